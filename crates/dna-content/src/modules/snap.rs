//! Copy tables for the "snap" (food assistance) keyword.

use crate::keyword::FaqEntry;

/// Hero headline templates. Append-only.
pub static HEADLINES: &[&str] = &[
    "Check Your {label} Eligibility Before You Shop",
    "See How Much {label} Could Add to Your Grocery Budget",
    "{label} Benefits: Find Your Household's Estimate",
    "Apply for {label} Without the Paperwork Maze",
    "Your State's {label} Income Limits, Made Simple",
    "Feeding a Family? {label} May Cover More Than You Think",
    "Quick {label} Screening for Your Household",
    "{label} Rules Changed — See What You Qualify for Now",
];

/// Hero sub-headline templates. Append-only.
pub static SUBHEADLINES: &[&str] = &[
    "Estimate your monthly {label} benefit from your income and household size.",
    "See the {label} income limits for your state and what counts toward them.",
    "Most {label} applications take one interview and a few documents — we list them all.",
    "Seniors and students have special {label} rules. Check which apply to you.",
    "{label} benefits arrive on an EBT card that works at most grocery stores and many markets.",
    "A short screening shows your likely {label} eligibility before you commit to applying.",
    "Deductions for rent, childcare, and utilities can raise your {label} benefit — don't skip them.",
    "Find your local {label} office and what to bring to your interview.",
];

/// FAQ entries. Question or answer names the topic. Append-only.
pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Who is eligible for {label}?",
        answer: "Households under their state's gross and net income limits \
                 qualify, with higher limits for larger households and \
                 special rules for seniors and people with disabilities.",
    },
    FaqEntry {
        question: "How much does {label} pay per month?",
        answer: "The benefit depends on household size, income, and \
                 deductible expenses like rent and utilities. Maximum \
                 allotments are updated every October.",
    },
    FaqEntry {
        question: "What can I buy with {label}?",
        answer: "Most grocery foods: produce, meat, dairy, bread, snacks, \
                 and seeds or plants that grow food. It does not cover \
                 alcohol, hot prepared foods, or household supplies.",
    },
    FaqEntry {
        question: "How fast can {label} benefits start?",
        answer: "States must decide within 30 days, and households with \
                 very low income and resources can receive expedited \
                 benefits within 7 days.",
    },
    FaqEntry {
        question: "Do I have to repay {label}?",
        answer: "No. Benefits are not a loan. Repayment is only required \
                 when benefits were issued in error or based on incorrect \
                 information.",
    },
    FaqEntry {
        question: "Can working families get {label}?",
        answer: "Yes. Many working households qualify because deductions \
                 for earnings, childcare, and housing lower the income \
                 that counts against the limit.",
    },
    FaqEntry {
        question: "Does {label} affect my immigration status?",
        answer: "Receiving food assistance for eligible household members \
                 is not counted in the public charge test. Many mixed-status \
                 households apply for their eligible children.",
    },
    FaqEntry {
        question: "How do I renew my {label} benefits?",
        answer: "Your state sends a recertification packet before your \
                 certification period ends — usually every 6 to 12 months. \
                 Return it on time to avoid a gap.",
    },
];
