//! Copy tables for the "ssdi" (disability benefits) keyword.

use crate::keyword::FaqEntry;

/// Hero headline templates. Append-only.
pub static HEADLINES: &[&str] = &[
    "Check Your {label} Eligibility Before You File",
    "{label} Benefits: See What Your Work History Earns",
    "Denied {label}? Most Awards Happen on Appeal",
    "How Much Could {label} Pay You Monthly?",
    "Start Your {label} Claim the Right Way",
    "{label} Eligibility: The Work Credit Rules Explained",
    "Applying for {label}? Avoid the 5 Most Common Mistakes",
    "Free {label} Case Review for Your Situation",
];

/// Hero sub-headline templates. Append-only.
pub static SUBHEADLINES: &[&str] = &[
    "Your {label} benefit is based on your earnings record — estimate it in minutes.",
    "Most first-time {label} claims are denied on paperwork issues. Start yours complete.",
    "See whether your condition appears in the {label} impairment listings.",
    "Check your work credits: most {label} applicants need 40, with 20 earned in the last decade.",
    "A quick screening shows whether {label} or its needs-based sibling fits your case.",
    "Appeals win more often with representation — and {label} advocates only get paid if you do.",
    "Understand the {label} timeline from application to back pay.",
    "Answer a few questions to see your likely {label} eligibility before filing.",
];

/// FAQ entries. Question or answer names the topic. Append-only.
pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Who qualifies for {label}?",
        answer: "Workers with enough recent work credits whose medical \
                 condition prevents substantial work and is expected to \
                 last at least a year or result in death.",
    },
    FaqEntry {
        question: "How much does {label} pay?",
        answer: "The monthly amount is computed from your lifetime average \
                 earnings, not the severity of your condition. Your \
                 personal estimate appears in your Social Security \
                 statement.",
    },
    FaqEntry {
        question: "How long does a {label} decision take?",
        answer: "Initial decisions average several months. Appeals add \
                 more time, but benefits are paid retroactively to your \
                 established onset date when you win.",
    },
    FaqEntry {
        question: "What if my {label} claim is denied?",
        answer: "Request reconsideration, then a hearing before an \
                 administrative law judge. Hearing-level approval rates \
                 are substantially higher than initial rates.",
    },
    FaqEntry {
        question: "Can I work while receiving {label}?",
        answer: "Limited work is allowed under the trial work period and \
                 substantial gainful activity rules, which let you test \
                 working without immediately losing benefits.",
    },
    FaqEntry {
        question: "Does {label} come with health coverage?",
        answer: "Yes — hospital and medical coverage begins after a \
                 24-month qualifying period from your benefit start date, \
                 with exceptions for certain conditions.",
    },
    FaqEntry {
        question: "What is the difference between {label} and SSI?",
        answer: "One is an insurance benefit earned through payroll taxes \
                 and work credits; SSI is needs-based with strict income \
                 and asset limits. Some people qualify for both.",
    },
    FaqEntry {
        question: "Do I need a lawyer for my {label} claim?",
        answer: "No, but representation correlates with higher approval \
                 rates, and fees are capped and only paid from back pay \
                 when you win.",
    },
];
