//! CSS custom-property emission — pure formatting over a derived DNA.
//!
//! No decisions happen here. Templates inline this block into a `<style>`
//! tag (or a `:root` rule) and reference the variables everywhere else.

use std::fmt::Write as _;

use crate::dna::DesignDna;

/// Render the `:root` custom-property block for a domain's DNA.
///
/// Basic variables always appear; advanced-mode variables are appended
/// when the DNA carries an advanced block. Output order is fixed so the
/// emitted stylesheet is byte-stable across rebuilds.
#[must_use]
pub fn css_variables(dna: &DesignDna) -> String {
    let p = dna.palette;
    let mut out = String::with_capacity(1024);

    // Infallible for String, but write! keeps the formatting readable.
    let _ = writeln!(out, ":root {{");
    let _ = writeln!(out, "  --color-primary: {};", p.primary);
    let _ = writeln!(out, "  --color-secondary: {};", p.secondary);
    let _ = writeln!(out, "  --color-accent: {};", p.accent);
    let _ = writeln!(out, "  --color-background: {};", p.background);
    let _ = writeln!(out, "  --color-text: {};", p.text);
    let _ = writeln!(out, "  --color-text-on-primary: {};", p.text_on_primary);
    let _ = writeln!(out, "  --gradient-primary: {};", dna.gradients.primary);
    let _ = writeln!(out, "  --gradient-hero: {};", dna.gradients.hero);
    let _ = writeln!(out, "  --gradient-accent: {};", dna.gradients.accent);
    let _ = writeln!(out, "  --font-heading: '{}', sans-serif;", dna.fonts.heading);
    let _ = writeln!(out, "  --font-body: '{}', sans-serif;", dna.fonts.body);
    let _ = writeln!(out, "  --hero-style: {};", dna.hero.name());
    let _ = writeln!(out, "  --card-style: {};", dna.card.name());
    let _ = writeln!(out, "  --cta-style: {};", dna.cta.name());

    if let Some(adv) = &dna.advanced {
        let _ = writeln!(out, "  --spacing-scale: {};", adv.spacing_scale);
        let _ = writeln!(out, "  --border-radius: {};", adv.border_radius);
        let _ = writeln!(out, "  --shadow-style: {};", adv.shadow_style);
        let _ = writeln!(out, "  --typography-scale: {};", adv.typography_scale);
        let _ = writeln!(out, "  --background-pattern: {};", adv.background_pattern);
    }

    out.push('}');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::DesignMode;

    #[test]
    fn contains_all_palette_roles() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Basic);
        let css = css_variables(&dna);
        assert!(css.contains(&format!("--color-primary: {};", dna.palette.primary)));
        assert!(css.contains(&format!("--color-text-on-primary: {};", dna.palette.text_on_primary)));
        assert!(css.contains("--gradient-hero: linear-gradient("));
    }

    #[test]
    fn basic_omits_advanced_variables() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Basic);
        let css = css_variables(&dna);
        assert!(!css.contains("--spacing-scale"), "CSS: {css}");
    }

    #[test]
    fn advanced_adds_advanced_variables() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Advanced);
        let css = css_variables(&dna);
        assert!(css.contains("--spacing-scale:"), "CSS: {css}");
        assert!(css.contains("--border-radius:"), "CSS: {css}");
    }

    #[test]
    fn output_is_stable() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Advanced);
        assert_eq!(css_variables(&dna), css_variables(&dna));
    }

    #[test]
    fn block_is_well_formed() {
        let dna = DesignDna::derive("example-one.com", "medicare", DesignMode::Basic);
        let css = css_variables(&dna);
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
    }
}
