//! Font pairings — one heading face, one body face, all on Google Fonts.
//!
//! Append-only table, same contract as the palettes. The pairing index is
//! seeded from the *reversed* domain (see [`crate::dna`]), so a domain's
//! fonts don't track its palette even though both derive from one string.

use serde::Serialize;

/// A heading/body font pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontPair {
    /// Display face for headlines and section titles.
    pub heading: &'static str,
    /// Reading face for body copy and form labels.
    pub body: &'static str,
}

impl FontPair {
    /// Google Fonts stylesheet URL loading both faces.
    ///
    /// Pure formatting — no decision is made here. Spaces in family names
    /// become `+` per the css2 API.
    #[must_use]
    pub fn google_fonts_url(&self) -> String {
        let heading = self.heading.replace(' ', "+");
        let body = self.body.replace(' ', "+");
        format!(
            "https://fonts.googleapis.com/css2?family={heading}:wght@600;700;800&family={body}:wght@400;500;600&display=swap"
        )
    }
}

/// The font pairing table. Append-only.
pub static FONT_PAIRS: &[FontPair] = &[
    FontPair { heading: "Inter", body: "Inter" },
    FontPair { heading: "Poppins", body: "Open Sans" },
    FontPair { heading: "Montserrat", body: "Source Sans 3" },
    FontPair { heading: "Playfair Display", body: "Lato" },
    FontPair { heading: "Raleway", body: "Roboto" },
    FontPair { heading: "Merriweather", body: "Public Sans" },
    FontPair { heading: "Libre Franklin", body: "Libre Franklin" },
    FontPair { heading: "Work Sans", body: "Nunito Sans" },
    FontPair { heading: "DM Serif Display", body: "DM Sans" },
    FontPair { heading: "Archivo", body: "Karla" },
    FontPair { heading: "Sora", body: "Inter" },
    FontPair { heading: "Manrope", body: "Mulish" },
    FontPair { heading: "Figtree", body: "Figtree" },
    FontPair { heading: "Bitter", body: "Rubik" },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
