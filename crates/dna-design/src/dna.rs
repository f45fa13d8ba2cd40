//! Design DNA derivation — one structured style descriptor per domain.
//!
//! Every choice funnels through `hash(transform(domain, keyword)) % table
//! length`. Different transforms of the same two strings (concatenation
//! order, reversal, a literal suffix) stand in for independent seeds: the
//! palette, the fonts, and the layout triple all derive from the same
//! domain yet don't track each other across the corpus.
//!
//! The advanced dimensions additionally mix *pairs* of seeds (wrapping sum
//! before the modulo) so that no two dimensions ride literally the same
//! seed. It's a decorrelation heuristic, not a uniformity proof — but the
//! sum-then-modulo scheme is frozen because changing it re-skins every
//! deployed advanced-mode domain.

use dna_core::fnv1a;
use serde::Serialize;

use crate::font::{FONT_PAIRS, FontPair};
use crate::layout::{
    ANIMATION_STYLES, AdvancedLayout, BACKGROUND_PATTERNS, BORDER_RADII, BUTTON_STYLES,
    CARD_LAYOUTS, CTA_PLACEMENTS, CardStyle, CtaStyle, FOOTER_STYLES, HERO_VARIANTS, HeroStyle,
    IMAGE_STYLES, NAV_STYLES, SECTION_ORDERS, SHADOW_STYLES, SPACING_SCALES, TYPOGRAPHY_SCALES,
};
use crate::palette::{PALETTES, Palette};

// ---------------------------------------------------------------------------
// DesignMode
// ---------------------------------------------------------------------------

/// Whether a domain gets the basic triple or the full advanced layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DesignMode {
    /// Palette + fonts + hero/card/CTA triple.
    #[default]
    Basic,
    /// Basic plus the fourteen advanced dimensions.
    Advanced,
}

impl DesignMode {
    /// Parse a mode from site configuration.
    ///
    /// Anything that isn't "advanced" (after trimming, case-insensitive)
    /// is Basic: mode only gates which optional fields are populated, so a
    /// typo in config degrades instead of failing the render.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("advanced") {
            Self::Advanced
        } else {
            Self::Basic
        }
    }
}

// ---------------------------------------------------------------------------
// Gradients
// ---------------------------------------------------------------------------

/// CSS gradient strings derived from the palette. Never stored — always
/// recomputed from the palette roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradients {
    /// primary → secondary.
    pub primary: String,
    /// primary → secondary → accent, for hero backgrounds.
    pub hero: String,
    /// accent → primary.
    pub accent: String,
}

impl Gradients {
    fn from_palette(palette: &Palette) -> Self {
        Self {
            primary: format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                palette.primary, palette.secondary
            ),
            hero: format!(
                "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
                palette.primary, palette.secondary, palette.accent
            ),
            accent: format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                palette.accent, palette.primary
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// DesignDna
// ---------------------------------------------------------------------------

/// The full style descriptor for one domain.
///
/// Derived fresh per call; cheap enough that callers usually don't bother
/// caching it. Rendering reads tokens and hex strings from here and never
/// makes a style decision of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignDna {
    pub palette: &'static Palette,
    pub fonts: &'static FontPair,
    pub hero: HeroStyle,
    pub card: CardStyle,
    pub cta: CtaStyle,
    pub gradients: Gradients,
    /// Populated only in [`DesignMode::Advanced`].
    pub advanced: Option<AdvancedLayout>,
}

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

impl DesignDna {
    /// Derive the descriptor for `(domain, keyword, mode)`.
    ///
    /// The three primary seeds use structurally different transforms of
    /// the same inputs — `domain+keyword`, `reverse(domain)`, and
    /// `keyword+domain` — and the layout triple is pulled from one seed
    /// via bit shifts rather than three separate hashes.
    #[must_use]
    pub fn derive(domain: &str, keyword: &str, mode: DesignMode) -> Self {
        let palette_seed = fnv1a(&format!("{domain}{keyword}")) as usize;
        let palette = &PALETTES[palette_seed % PALETTES.len()];

        let font_seed = fnv1a(&reverse(domain)) as usize;
        let fonts = &FONT_PAIRS[font_seed % FONT_PAIRS.len()];

        let layout_seed = fnv1a(&format!("{keyword}{domain}")) as usize;
        let hero = HeroStyle::ALL[layout_seed % HeroStyle::ALL.len()];
        let card = CardStyle::ALL[(layout_seed >> 2) % CardStyle::ALL.len()];
        let cta = CtaStyle::ALL[(layout_seed >> 4) % CtaStyle::ALL.len()];

        let advanced = match mode {
            DesignMode::Basic => None,
            DesignMode::Advanced => Some(derive_advanced(domain, keyword)),
        };

        Self {
            palette,
            fonts,
            hero,
            card,
            cta,
            gradients: Gradients::from_palette(palette),
            advanced,
        }
    }

    /// Theoretical number of distinct appearances for `mode`.
    ///
    /// The exact product of every table cardinality in play — a
    /// design-time capacity check against the planned corpus size, not a
    /// collision guarantee. A silent truncation of any table changes this
    /// number.
    #[must_use]
    pub fn unique_combinations(mode: DesignMode) -> u128 {
        let basic = [
            PALETTES.len(),
            FONT_PAIRS.len(),
            HeroStyle::ALL.len(),
            CardStyle::ALL.len(),
            CtaStyle::ALL.len(),
        ];
        let advanced = [
            HERO_VARIANTS.len(),
            SECTION_ORDERS.len(),
            CARD_LAYOUTS.len(),
            NAV_STYLES.len(),
            FOOTER_STYLES.len(),
            SPACING_SCALES.len(),
            ANIMATION_STYLES.len(),
            BORDER_RADII.len(),
            SHADOW_STYLES.len(),
            BACKGROUND_PATTERNS.len(),
            CTA_PLACEMENTS.len(),
            TYPOGRAPHY_SCALES.len(),
            IMAGE_STYLES.len(),
            BUTTON_STYLES.len(),
        ];

        let product = |dims: &[usize]| dims.iter().map(|&n| n as u128).product::<u128>();
        match mode {
            DesignMode::Basic => product(&basic),
            DesignMode::Advanced => product(&basic) * product(&advanced),
        }
    }
}

/// Derive the fourteen advanced dimensions.
///
/// Five auxiliary seeds from distinct transforms; each dimension indexes
/// with either one seed or the wrapping sum of two. The pairings are
/// frozen — see the module docs.
fn derive_advanced(domain: &str, keyword: &str) -> AdvancedLayout {
    let s1 = fnv1a(&format!("{domain}{keyword}"));
    let s2 = fnv1a(&reverse(domain));
    let s3 = fnv1a(&format!("{domain}{keyword}layout"));
    let s4 = fnv1a(&format!("{}{domain}", reverse(keyword)));
    let s5 = fnv1a(&format!("{keyword}{domain}"));

    let at = |seed: u32, table: &'static [&'static str]| table[seed as usize % table.len()];
    let sum = |a: u32, b: u32| a.wrapping_add(b);

    AdvancedLayout {
        hero_variant: at(s1, HERO_VARIANTS),
        section_order: at(sum(s1, s3), SECTION_ORDERS),
        card_layout: at(s3, CARD_LAYOUTS),
        nav_style: at(s2, NAV_STYLES),
        footer_style: at(sum(s2, s4), FOOTER_STYLES),
        spacing_scale: at(s4, SPACING_SCALES),
        animation_style: at(sum(s1, s4), ANIMATION_STYLES),
        border_radius: at(s5, BORDER_RADII),
        shadow_style: at(sum(s3, s5), SHADOW_STYLES),
        background_pattern: at(sum(s2, s5), BACKGROUND_PATTERNS),
        cta_placement: at(sum(s1, s2), CTA_PLACEMENTS),
        typography_scale: at(sum(s3, s4), TYPOGRAPHY_SCALES),
        image_style: at(sum(s4, s5), IMAGE_STYLES),
        button_style: at(sum(s2, s3), BUTTON_STYLES),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derive_is_deterministic() {
        let a = DesignDna::derive("example-one.com", "medicare", DesignMode::Advanced);
        let b = DesignDna::derive("example-one.com", "medicare", DesignMode::Advanced);
        assert_eq!(a, b);
    }

    #[test]
    fn basic_has_no_advanced_block() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Basic);
        assert!(dna.advanced.is_none());
    }

    #[test]
    fn advanced_populates_every_dimension() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Advanced);
        let adv = dna.advanced.expect("advanced block missing");
        assert!(HERO_VARIANTS.contains(&adv.hero_variant));
        assert!(SECTION_ORDERS.contains(&adv.section_order));
        assert!(SPACING_SCALES.contains(&adv.spacing_scale));
        assert!(BUTTON_STYLES.contains(&adv.button_style));
    }

    #[test]
    fn domains_spread_over_palettes() {
        // 1000 synthetic domains must not cluster on a handful of
        // palettes; every palette should see traffic.
        let mut hits = vec![0usize; PALETTES.len()];
        for i in 0..1000 {
            let domain = format!("site-{i}.example");
            let dna = DesignDna::derive(&domain, "medicare", DesignMode::Basic);
            let idx = PALETTES.iter().position(|p| p.name == dna.palette.name).unwrap();
            hits[idx] += 1;
        }
        assert!(hits.iter().all(|&n| n > 0), "Unused palettes: {hits:?}");
    }

    #[test]
    fn fonts_decorrelated_from_palette() {
        // Among domains sharing one palette, fonts must still vary —
        // that's what the reversed-domain seed buys.
        let mut fonts_seen = std::collections::BTreeSet::new();
        let mut in_bucket = 0;
        for i in 0..1000 {
            let domain = format!("site-{i}.example");
            let dna = DesignDna::derive(&domain, "medicare", DesignMode::Basic);
            if dna.palette.name == PALETTES[0].name {
                fonts_seen.insert(dna.fonts.heading);
                in_bucket += 1;
            }
        }
        assert!(in_bucket > 10, "Palette bucket unexpectedly small: {in_bucket}");
        assert!(fonts_seen.len() > 3, "Fonts track palette: {fonts_seen:?}");
    }

    #[test]
    fn keyword_perturbs_palette() {
        let a = DesignDna::derive("example-one.com", "medicare", DesignMode::Basic);
        let b = DesignDna::derive("example-one.com", "medicaid", DesignMode::Basic);
        // Not guaranteed per pair; these two were checked to differ and
        // act as a regression anchor for the seed recipe.
        assert_ne!(
            (a.palette.name, a.hero.name()),
            (b.palette.name, b.hero.name())
        );
    }

    #[test]
    fn gradients_derived_from_palette_roles() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Basic);
        assert!(dna.gradients.primary.contains(dna.palette.primary));
        assert!(dna.gradients.primary.contains(dna.palette.secondary));
        assert!(dna.gradients.hero.contains(dna.palette.accent));
        assert!(dna.gradients.accent.starts_with("linear-gradient("));
    }

    #[test]
    fn mode_parse_is_lenient() {
        assert_eq!(DesignMode::parse("advanced"), DesignMode::Advanced);
        assert_eq!(DesignMode::parse("  ADVANCED "), DesignMode::Advanced);
        assert_eq!(DesignMode::parse("basic"), DesignMode::Basic);
        assert_eq!(DesignMode::parse(""), DesignMode::Basic);
        assert_eq!(DesignMode::parse("deluxe"), DesignMode::Basic);
    }

    #[test]
    fn capacity_is_exact_product() {
        // Recomputed by hand from the frozen table lengths. Any table
        // truncation or growth must move these numbers.
        let basic: u128 = 18 * 14 * 5 * 4 * 4;
        assert_eq!(DesignDna::unique_combinations(DesignMode::Basic), basic);

        let advanced_dims: u128 =
            6 * 8 * 5 * 4 * 4 * 3 * 4 * 5 * 4 * 5 * 3 * 3 * 4 * 5;
        assert_eq!(
            DesignDna::unique_combinations(DesignMode::Advanced),
            basic * advanced_dims
        );
    }

    #[test]
    fn capacity_clears_planned_corpus() {
        // Design-time safety margin: four orders of magnitude over a
        // 100k-domain corpus even in basic mode is not required, but
        // advanced mode must clear it easily.
        assert!(DesignDna::unique_combinations(DesignMode::Advanced) > 100_000 * 10_000);
    }

    #[test]
    fn dna_serializes() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Advanced);
        let json = serde_json::to_string(&dna).unwrap();
        assert!(json.contains("\"palette\""), "JSON: {json}");
        assert!(json.contains("\"advanced\""), "JSON: {json}");
    }
}
