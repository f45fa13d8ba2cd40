//! Site configuration — what the rendering layer hands the engine.
//!
//! One deployment serves one domain; its configuration names the domain,
//! the keyword id, the design mode, and (rarely) a hand-pinned Design DNA
//! override for domains whose appearance was locked before a table edit.

use dna_design::{DesignDna, DesignMode};

use crate::bundle::ContentBundle;
use crate::keyword::load_keyword_variations;

/// Per-site configuration. The domain is expected pre-normalized by the
/// hostname middleware: lowercase, scheme and `www.` stripped.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub domain: String,
    pub keyword_id: String,
    pub mode: DesignMode,
    /// When present, wins over derivation entirely.
    pub dna_override: Option<DesignDna>,
}

impl SiteConfig {
    /// Configuration with no override, parsing the mode leniently.
    #[must_use]
    pub fn new(domain: &str, keyword_id: &str, mode: &str) -> Self {
        Self {
            domain: domain.to_owned(),
            keyword_id: keyword_id.to_owned(),
            mode: DesignMode::parse(mode),
            dna_override: None,
        }
    }

    /// The content bundle for this site (fallback rules included).
    #[must_use]
    pub fn bundle(&self) -> ContentBundle {
        load_keyword_variations(&self.keyword_id)
    }

    /// This site's Design DNA: the override when pinned, otherwise derived
    /// from the domain and the *resolved* keyword id — so a misconfigured
    /// keyword yields the same appearance as an explicit default keyword.
    #[must_use]
    pub fn resolve_dna(&self) -> DesignDna {
        if let Some(pinned) = &self.dna_override {
            return pinned.clone();
        }
        let keyword = self.bundle().keyword().id;
        DesignDna::derive(&self.domain, keyword, self.mode)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
