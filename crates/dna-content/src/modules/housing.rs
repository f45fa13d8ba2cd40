//! Copy tables for the "section-8" (housing voucher) keyword.

use crate::keyword::FaqEntry;

/// Hero headline templates. Append-only.
pub static HEADLINES: &[&str] = &[
    "Check {label} Waitlists Open Near You",
    "{label} Vouchers: See If Your Income Qualifies",
    "Find Open {label} Applications in Your Area",
    "How to Get on a {label} Waitlist That's Actually Open",
    "{label} Housing Help for Your Household Size",
    "See Your Local {label} Income Limits",
    "Applying for {label}? Start With the Right Office",
    "Track {label} Waitlist Openings in Your State",
];

/// Hero sub-headline templates. Append-only.
pub static SUBHEADLINES: &[&str] = &[
    "Vouchers cap your rent near 30% of income — see if your household fits the {label} limits.",
    "{label} waitlists open and close quickly. Find the ones accepting applications now.",
    "Check income limits by county, since {label} eligibility follows local median income.",
    "Seniors, veterans, and people with disabilities often get {label} waitlist preferences.",
    "Learn what documents your housing authority needs before the {label} waitlist opens.",
    "Apply to multiple housing authorities to shorten your {label} wait.",
    "A quick screening estimates your place in the {label} income tiers.",
    "From application to lease-up: the {label} process explained step by step.",
];

/// FAQ entries. Question or answer names the topic. Append-only.
pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How does {label} determine my rent?",
        answer: "You generally pay about 30% of adjusted monthly income \
                 toward rent and utilities, and the voucher covers the \
                 remainder up to a local payment standard.",
    },
    FaqEntry {
        question: "Who qualifies for {label}?",
        answer: "Households earning under 50% of area median income can \
                 qualify, and most vouchers must go to households under \
                 30%. Limits vary by county and household size.",
    },
    FaqEntry {
        question: "How long is the {label} waitlist?",
        answer: "It varies from months to several years by housing \
                 authority. Applying to several authorities, and to \
                 project-based openings, usually shortens the wait.",
    },
    FaqEntry {
        question: "Can I use a {label} voucher anywhere?",
        answer: "Vouchers are portable after an initial period: you can \
                 move anywhere in the country with a participating \
                 landlord, following your authority's transfer process.",
    },
    FaqEntry {
        question: "Does {label} cover utilities?",
        answer: "A utility allowance is built into the calculation. When \
                 tenants pay utilities directly, the allowance lowers the \
                 rent portion you owe.",
    },
    FaqEntry {
        question: "What disqualifies someone from {label}?",
        answer: "Certain criminal convictions, prior program violations, \
                 or owing money to a housing authority can disqualify an \
                 application. Rules differ by authority.",
    },
    FaqEntry {
        question: "Do landlords have to accept {label}?",
        answer: "In a growing number of states and cities, refusing a \
                 voucher is illegal source-of-income discrimination; \
                 elsewhere participation is voluntary.",
    },
    FaqEntry {
        question: "How do I apply for {label}?",
        answer: "Apply directly with your local public housing authority \
                 when its waitlist is open — applications are always free. \
                 Beware of sites charging fees to 'register' you.",
    },
];
