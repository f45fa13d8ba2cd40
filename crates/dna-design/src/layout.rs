//! Layout dimensions — the basic triple and the advanced dimension tables.
//!
//! The basic triple (hero/card/CTA style) is what every domain gets. The
//! advanced tables only come into play for domains in advanced mode, where
//! fourteen further dimensions (including the section-order permutation)
//! are derived. Each table's length and order is a compatibility contract,
//! exactly like the palette and font tables.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Basic layout triple
// ---------------------------------------------------------------------------

/// Hero section skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeroStyle {
    /// Headline and form centered, full-width background.
    Centered,
    /// Copy on the left, form card on the right.
    SplitRight,
    /// Form card on the left, copy on the right.
    SplitLeft,
    /// Edge-to-edge gradient banner with an overlaid form.
    FullBleed,
    /// Compact headline strip, form below the fold.
    Minimal,
}

impl HeroStyle {
    /// Every hero style, in seed order. Append-only.
    pub const ALL: &'static [Self] =
        &[Self::Centered, Self::SplitRight, Self::SplitLeft, Self::FullBleed, Self::Minimal];

    /// CSS token for templates ("hero--centered").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::SplitRight => "split-right",
            Self::SplitLeft => "split-left",
            Self::FullBleed => "full-bleed",
            Self::Minimal => "minimal",
        }
    }
}

/// Content card treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardStyle {
    /// Drop shadow, white surface.
    Elevated,
    /// 1px border, no shadow.
    Outlined,
    /// Flat tinted surface.
    Flat,
    /// Translucent blur-backed surface.
    Glass,
}

impl CardStyle {
    /// Every card style, in seed order. Append-only.
    pub const ALL: &'static [Self] = &[Self::Elevated, Self::Outlined, Self::Flat, Self::Glass];

    /// CSS token for templates ("card--elevated").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
            Self::Flat => "flat",
            Self::Glass => "glass",
        }
    }
}

/// Call-to-action button treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CtaStyle {
    /// Solid primary fill.
    Solid,
    /// Primary→accent gradient fill.
    Gradient,
    /// Transparent with primary border.
    Outline,
    /// Fully rounded solid pill.
    Pill,
}

impl CtaStyle {
    /// Every CTA style, in seed order. Append-only.
    pub const ALL: &'static [Self] = &[Self::Solid, Self::Gradient, Self::Outline, Self::Pill];

    /// CSS token for templates ("cta--solid").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
            Self::Outline => "outline",
            Self::Pill => "pill",
        }
    }
}

// ---------------------------------------------------------------------------
// Advanced dimension tables
// ---------------------------------------------------------------------------

/// Hero variant, a finer cut than [`HeroStyle`].
pub static HERO_VARIANTS: &[&str] =
    &["classic", "banner", "split", "boxed", "gradient-wash", "editorial"];

/// Section-order permutations. Tokens are template section ids.
pub static SECTION_ORDERS: &[&str] = &[
    "hero,benefits,how-it-works,eligibility,providers,faq,cta",
    "hero,how-it-works,benefits,eligibility,faq,providers,cta",
    "hero,eligibility,benefits,how-it-works,providers,faq,cta",
    "hero,benefits,eligibility,providers,how-it-works,faq,cta",
    "hero,how-it-works,eligibility,benefits,faq,providers,cta",
    "hero,benefits,faq,how-it-works,eligibility,providers,cta",
    "hero,eligibility,how-it-works,providers,benefits,faq,cta",
    "hero,providers,benefits,how-it-works,eligibility,faq,cta",
];

/// Card layout within content sections.
pub static CARD_LAYOUTS: &[&str] = &["grid-3", "grid-2", "list", "carousel", "masonry"];

/// Navigation bar treatment.
pub static NAV_STYLES: &[&str] = &["solid", "transparent", "sticky-compact", "centered-logo"];

/// Footer treatment.
pub static FOOTER_STYLES: &[&str] = &["columns", "slim", "stacked", "legal-first"];

/// Vertical rhythm scale.
pub static SPACING_SCALES: &[&str] = &["compact", "comfortable", "spacious"];

/// Entry animation family.
pub static ANIMATION_STYLES: &[&str] = &["none", "fade", "slide-up", "stagger"];

/// Corner radius token.
pub static BORDER_RADII: &[&str] = &["0", "0.25rem", "0.5rem", "0.75rem", "9999px"];

/// Shadow depth token.
pub static SHADOW_STYLES: &[&str] = &["none", "soft", "medium", "crisp"];

/// Decorative background pattern.
pub static BACKGROUND_PATTERNS: &[&str] = &["none", "dots", "grid", "waves", "diagonal"];

/// Where the repeated CTA block lands.
pub static CTA_PLACEMENTS: &[&str] = &["after-every-section", "mid-and-end", "end-only"];

/// Typographic scale ratio.
pub static TYPOGRAPHY_SCALES: &[&str] = &["1.2", "1.25", "1.333"];

/// Illustration/photo treatment.
pub static IMAGE_STYLES: &[&str] = &["photo", "illustration", "icon-led", "abstract"];

/// Button shape/weight treatment.
pub static BUTTON_STYLES: &[&str] = &["square", "rounded", "pill", "shadowed", "ghost"];

// ---------------------------------------------------------------------------
// Advanced layout configuration
// ---------------------------------------------------------------------------

/// The fourteen advanced dimensions resolved for one domain.
///
/// Only populated in advanced mode. Every field is a token straight out of
/// one of the tables above; templates switch on tokens, never on indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvancedLayout {
    pub hero_variant: &'static str,
    pub section_order: &'static str,
    pub card_layout: &'static str,
    pub nav_style: &'static str,
    pub footer_style: &'static str,
    pub spacing_scale: &'static str,
    pub animation_style: &'static str,
    pub border_radius: &'static str,
    pub shadow_style: &'static str,
    pub background_pattern: &'static str,
    pub cta_placement: &'static str,
    pub typography_scale: &'static str,
    pub image_style: &'static str,
    pub button_style: &'static str,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
