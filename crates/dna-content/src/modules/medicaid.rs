//! Copy tables for the "medicaid" keyword.

use crate::keyword::FaqEntry;

/// Hero headline templates. Append-only.
pub static HEADLINES: &[&str] = &[
    "See If Your Household Qualifies for {label}",
    "{label} Income Limits for Your State, Explained",
    "Check Your {label} Eligibility in 2 Minutes",
    "Lost Coverage? You May Still Qualify for {label}",
    "{label} Coverage for Families, Kids, and Adults",
    "Find Out What {label} Covers in Your State",
    "Apply for {label} the Easy Way",
    "Think You Earn Too Much for {label}? Check Again",
];

/// Hero sub-headline templates. Append-only.
pub static SUBHEADLINES: &[&str] = &[
    "Every state sets its own {label} income limits — see where your household lands.",
    "A quick screening shows whether you, your kids, or your parents qualify for {label}.",
    "{label} renewals restarted nationwide. Make sure your coverage doesn't lapse.",
    "Pregnant, disabled, or raising kids? {label} rules may be more generous than you think.",
    "See the documents your state asks for and apply for {label} without the guesswork.",
    "Compare {label} with marketplace plans before assuming you don't qualify.",
    "Free, confidential {label} screening based on your household size and income.",
    "Millions qualify for {label} and never apply. A two-minute check settles it.",
];

/// FAQ entries. Question or answer names the topic. Append-only.
pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Who qualifies for {label}?",
        answer: "Eligibility is based on household income relative to the \
                 federal poverty level, plus factors like pregnancy, \
                 disability, and age. Expansion states cover most adults \
                 under 138% of the poverty level.",
    },
    FaqEntry {
        question: "What does {label} cost?",
        answer: "Coverage is free or near-free for most enrollees. Some \
                 states charge small copays or premiums for certain income \
                 bands, capped by federal rules.",
    },
    FaqEntry {
        question: "What services does {label} cover?",
        answer: "Doctor visits, hospital care, lab work, prescriptions, \
                 maternity care, and children's services are covered in \
                 every state; dental and vision for adults vary by state.",
    },
    FaqEntry {
        question: "Can I have {label} and a job?",
        answer: "Yes. Eligibility depends on income, not employment status. \
                 Many working families qualify, especially in expansion \
                 states.",
    },
    FaqEntry {
        question: "How do I apply for {label}?",
        answer: "Apply any time of year through your state's benefits \
                 portal, by phone, or in person. There is no enrollment \
                 deadline.",
    },
    FaqEntry {
        question: "How long does {label} approval take?",
        answer: "States must process most applications within 45 days, or \
                 90 days when a disability determination is involved. Many \
                 decisions arrive much sooner.",
    },
    FaqEntry {
        question: "Do I have to renew {label} every year?",
        answer: "Yes. States recheck eligibility annually and will mail or \
                 email renewal paperwork. Respond by the deadline to avoid \
                 a coverage gap.",
    },
    FaqEntry {
        question: "What if my {label} application is denied?",
        answer: "You can appeal within the window printed on your notice, \
                 and you may qualify for subsidized marketplace coverage \
                 instead — a denial often unlocks a special enrollment \
                 period.",
    },
];
