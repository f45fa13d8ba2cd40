//! Site architecture — explicit structural templates, keyed by domain.
//!
//! Unlike everything else in the engine this is *not* hashed: operations
//! assigns a named architecture to specific domains by exact match, and
//! every unlisted domain gets the default. Architecture is orthogonal to
//! Design DNA — two domains can share a skeleton and look nothing alike.

use serde::Serialize;

/// How much copy a page targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LengthClass {
    /// Short pages, near the target-word floor.
    Compact,
    /// The default editorial length.
    Standard,
    /// Long-form pages for competitive keywords.
    Longform,
}

/// How the eligibility criteria list renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EligibilityStyle {
    Bullets,
    Numbered,
    Cards,
    Prose,
}

/// A structural template: section order, counts, and length targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteArchitecture {
    /// Diagnostic name ("standard", "faq-heavy").
    pub name: &'static str,
    /// Page sections in render order.
    pub sections: &'static [&'static str],
    /// Providers listed in the directory section.
    pub provider_count: usize,
    /// FAQ entries rendered. Must not exceed any keyword's FAQ table.
    pub faq_count: usize,
    /// Target word count for the whole page.
    pub target_words: usize,
    pub length_class: LengthClass,
    pub eligibility_style: EligibilityStyle,
}

/// The architecture every unlisted domain gets.
pub static DEFAULT_ARCHITECTURE: SiteArchitecture = SiteArchitecture {
    name: "standard",
    sections: &["hero", "benefits", "how-it-works", "eligibility", "providers", "faq", "cta"],
    provider_count: 6,
    faq_count: 5,
    target_words: 1200,
    length_class: LengthClass::Standard,
    eligibility_style: EligibilityStyle::Bullets,
};

static LONGFORM: SiteArchitecture = SiteArchitecture {
    name: "longform",
    sections: &[
        "hero", "benefits", "eligibility", "how-it-works", "calculator", "providers", "faq",
        "resources", "cta",
    ],
    provider_count: 10,
    faq_count: 8,
    target_words: 2400,
    length_class: LengthClass::Longform,
    eligibility_style: EligibilityStyle::Numbered,
};

static COMPACT: SiteArchitecture = SiteArchitecture {
    name: "compact",
    sections: &["hero", "benefits", "eligibility", "faq", "cta"],
    provider_count: 3,
    faq_count: 3,
    target_words: 700,
    length_class: LengthClass::Compact,
    eligibility_style: EligibilityStyle::Prose,
};

static FAQ_HEAVY: SiteArchitecture = SiteArchitecture {
    name: "faq-heavy",
    sections: &["hero", "faq", "benefits", "eligibility", "providers", "faq-extended", "cta"],
    provider_count: 5,
    faq_count: 8,
    target_words: 1600,
    length_class: LengthClass::Standard,
    eligibility_style: EligibilityStyle::Cards,
};

/// Domain-to-architecture assignments maintained by operations.
/// Exact-match lookup; everything else resolves to the default.
static ASSIGNMENTS: &[(&str, &SiteArchitecture)] = &[
    ("medicare-plan-finder.com", &LONGFORM),
    ("compare-benefit-plans.org", &LONGFORM),
    ("quick-benefits-check.com", &COMPACT),
    ("my-benefit-answers.com", &FAQ_HEAVY),
    ("state-assistance-guide.org", &FAQ_HEAVY),
    ("household-aid-finder.com", &COMPACT),
];

/// Resolve the structural template for a domain.
///
/// Every domain resolves to *some* architecture; the default covers the
/// long tail.
#[must_use]
pub fn architecture(domain: &str) -> &'static SiteArchitecture {
    ASSIGNMENTS
        .iter()
        .find(|(assigned, _)| *assigned == domain)
        .map_or(&DEFAULT_ARCHITECTURE, |(_, arch)| *arch)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
