//! Context keys — the closed set of per-slot decision labels.
//!
//! Every selection is keyed by a context label so two different UI slots
//! never draw the same index for the same domain by accident. Labels used
//! to be free-form strings; a typo silently resolved to a fresh (wrong)
//! hash stream. These enums close the set: call sites name a variant, the
//! variant owns its label, and the label strings below are frozen because
//! they feed the hash.

/// Decision slots filled from keyword-agnostic tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalContext {
    /// Form field label set (name/email/phone/zip/submit).
    FormLabels,
    /// Trust badge strip entries.
    TrustBadges,
    /// Generic program description paragraph.
    ProgramDescription,
    /// Provider directory intro paragraph.
    ProviderIntro,
    /// Structured-data "how to apply" step list.
    StructuredSteps,
    /// Hero call-to-action button text.
    CtaHero,
    /// FAQ-section call-to-action button text.
    CtaFaq,
    /// Legal disclaimer paragraph.
    Disclaimer,
}

impl GlobalContext {
    /// The stable hash label for this slot. Frozen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FormLabels => "form-labels",
            Self::TrustBadges => "trust-badges",
            Self::ProgramDescription => "program-description",
            Self::ProviderIntro => "provider-intro",
            Self::StructuredSteps => "structured-steps",
            Self::CtaHero => "cta-hero",
            Self::CtaFaq => "cta-faq",
            Self::Disclaimer => "legal-disclaimer",
        }
    }
}

/// Decision slots filled from keyword-scoped tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordContext {
    /// Hero headline template.
    Headline,
    /// Hero sub-headline template.
    Subheadline,
    /// FAQ entry set.
    Faq,
    /// Whether the site name is injected into the headline.
    HeadlineSiteName,
}

impl KeywordContext {
    /// The stable hash label for this slot. Frozen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Headline => "hero-headline",
            Self::Subheadline => "hero-subheadline",
            Self::Faq => "faq-set",
            Self::HeadlineSiteName => "headline-site-name",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
