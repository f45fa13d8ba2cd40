//! Copy tables for the "liheap" (energy assistance) keyword.

use crate::keyword::FaqEntry;

/// Hero headline templates. Append-only.
pub static HEADLINES: &[&str] = &[
    "Behind on Utilities? {label} Can Help",
    "Check Your {label} Eligibility Before Winter",
    "{label} Grants for Heating and Cooling Bills",
    "See If {label} Covers Your Energy Bills This Year",
    "Apply for {label} in Your State",
    "Facing Disconnection? {label} Crisis Help Is Faster",
    "{label} Income Limits and How to Apply",
    "Keep the Heat On: Your {label} Guide",
];

/// Hero sub-headline templates. Append-only.
pub static SUBHEADLINES: &[&str] = &[
    "{label} pays heating and cooling costs for qualifying households — and it's a grant, not a loan.",
    "Funding is limited each season. Check your {label} eligibility before your state's window closes.",
    "A shutoff notice usually qualifies you for expedited {label} crisis assistance.",
    "See your state's {label} income limits by household size in seconds.",
    "One application can unlock bill help, furnace repair, and weatherization through {label}.",
    "Seniors and households with young children often get {label} priority. See if yours does.",
    "Estimate your {label} grant from your income, fuel type, and household size.",
    "Find your local {label} intake office and the documents to bring.",
];

/// FAQ entries. Question or answer names the topic. Append-only.
pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What does {label} pay for?",
        answer: "Home heating and cooling bills, crisis help during \
                 shutoffs or fuel emergencies, and in many states minor \
                 furnace repair or replacement and weatherization.",
    },
    FaqEntry {
        question: "Who qualifies for {label}?",
        answer: "Households under their state's income limit — typically \
                 around 150% of the federal poverty level or 60% of state \
                 median income. Receiving other assistance often qualifies \
                 you automatically.",
    },
    FaqEntry {
        question: "Is {label} a loan?",
        answer: "No. It is a grant paid on your behalf, usually directly \
                 to your utility or fuel vendor, and never has to be \
                 repaid.",
    },
    FaqEntry {
        question: "When can I apply for {label}?",
        answer: "Most states open applications in the fall for heating \
                 help and some run summer cooling programs. Crisis \
                 assistance is available whenever funds remain.",
    },
    FaqEntry {
        question: "How much does {label} pay?",
        answer: "Grants commonly range from a few hundred to over a \
                 thousand dollars per season, scaled by income, household \
                 size, fuel type, and your state's funding.",
    },
    FaqEntry {
        question: "Can renters get {label}?",
        answer: "Yes. Renters qualify even when utilities are included in \
                 rent, though the benefit calculation differs in that \
                 case.",
    },
    FaqEntry {
        question: "How fast does {label} crisis help arrive?",
        answer: "Federal rules require action within 48 hours of a crisis \
                 application, and within 18 hours when a household is \
                 already without heat.",
    },
    FaqEntry {
        question: "Do I reapply for {label} every year?",
        answer: "Yes. Eligibility and funding reset each program year, so \
                 submit a fresh application every season you need help.",
    },
];
