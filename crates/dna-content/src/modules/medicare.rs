//! Copy tables for the "medicare" keyword.

use crate::keyword::FaqEntry;

/// Hero headline templates. Append-only.
pub static HEADLINES: &[&str] = &[
    "Compare {label} Plans Available in Your Area",
    "Find the Right {label} Coverage in Minutes",
    "Your {label} Options, Explained in Plain English",
    "New to {label}? Start With a Free Plan Check",
    "See Which {label} Plans Cover Your Doctors",
    "Turning 65? Your {label} Enrollment Starts Here",
    "Check Your {label} Plan Options for This Year",
    "Is Your {label} Plan Still the Best Fit?",
];

/// Hero sub-headline templates. Append-only.
pub static SUBHEADLINES: &[&str] = &[
    "Answer a few questions to see {label} plans with the benefits you use most.",
    "Licensed agents compare {label} options side by side at no cost to you.",
    "Thousands of plans change every year — make sure your {label} coverage keeps up.",
    "See estimated premiums, drug coverage, and extras for {label} plans near you.",
    "A two-minute check shows the {label} plans accepting new members in your ZIP code.",
    "Don't overpay for coverage: review your {label} options before enrollment closes.",
    "Get a clear, no-pressure summary of the {label} plans available at your address.",
    "From supplements to all-in-one plans, compare every {label} path in one place.",
];

/// FAQ entries. Question or answer names the topic. Append-only.
pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "When can I enroll in {label}?",
        answer: "Your first window opens three months before the month you \
                 turn 65 and closes three months after it. Outside of that, \
                 the annual enrollment period runs each fall, and special \
                 periods apply after qualifying life events.",
    },
    FaqEntry {
        question: "What does {label} Part A cover?",
        answer: "Part A covers hospital stays, skilled nursing care after a \
                 qualifying stay, hospice, and some home health services. \
                 Most people pay no monthly premium for it.",
    },
    FaqEntry {
        question: "Do {label} plans include prescription drugs?",
        answer: "Original coverage does not include most prescriptions; a \
                 standalone Part D plan or an Advantage plan with drug \
                 coverage fills that gap. Formularies differ, so check your \
                 medications against each plan.",
    },
    FaqEntry {
        question: "Can I keep my doctor with {label}?",
        answer: "With Original coverage you can see any doctor who accepts \
                 it. Advantage plans use networks, so confirm your doctors \
                 and hospitals are in-network before switching.",
    },
    FaqEntry {
        question: "What is the difference between a supplement and an Advantage plan?",
        answer: "A supplement works alongside Original {label} and pays the \
                 gaps like coinsurance. An Advantage plan replaces how you \
                 receive benefits and often bundles drug, dental, and vision \
                 coverage.",
    },
    FaqEntry {
        question: "How much does {label} cost each month?",
        answer: "Most people pay the standard Part B premium, which is set \
                 annually. Higher incomes pay more, and Advantage or \
                 supplement plans add their own premiums, some as low as $0.",
    },
    FaqEntry {
        question: "Is help available to pay {label} costs?",
        answer: "Yes. Savings programs through your state can cover premiums \
                 and cost sharing for qualifying incomes, and the Extra Help \
                 program lowers prescription costs.",
    },
    FaqEntry {
        question: "Can I switch {label} plans if my needs change?",
        answer: "Yes, during the annual enrollment period each fall, and in \
                 some cases during the early-year Advantage open enrollment \
                 or after a qualifying event such as moving.",
    },
];
