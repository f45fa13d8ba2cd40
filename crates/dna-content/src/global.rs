//! Global variation tables — keyword-agnostic copy.
//!
//! The load-bearing invariant of this module: nothing here names any
//! keyword. The moment a table entry mentions a program by name, every
//! keyword's sites render identical generic sections and the corpus
//! collapses toward near-duplicate content. The separation test in
//! `keyword.rs` enforces this against every enabled keyword label.
//!
//! All tables are append-only, same contract as the design tables.

use serde::Serialize;

/// One set of form field labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormLabels {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub zip: &'static str,
    pub submit: &'static str,
}

/// Form label sets. Append-only.
pub static FORM_LABEL_SETS: &[FormLabels] = &[
    FormLabels {
        name: "Full name",
        email: "Email address",
        phone: "Phone number",
        zip: "ZIP code",
        submit: "Check my eligibility",
    },
    FormLabels {
        name: "Your name",
        email: "Your email",
        phone: "Best phone number",
        zip: "Your ZIP code",
        submit: "See if I qualify",
    },
    FormLabels {
        name: "First and last name",
        email: "Email",
        phone: "Contact number",
        zip: "Postal code",
        submit: "Get started",
    },
    FormLabels {
        name: "Name",
        email: "Email address",
        phone: "Daytime phone",
        zip: "ZIP",
        submit: "Start my check",
    },
    FormLabels {
        name: "Legal name",
        email: "Preferred email",
        phone: "Mobile number",
        zip: "Home ZIP code",
        submit: "Review my options",
    },
    FormLabels {
        name: "Full legal name",
        email: "Contact email",
        phone: "Phone",
        zip: "ZIP code",
        submit: "Continue",
    },
    FormLabels {
        name: "Applicant name",
        email: "Email for updates",
        phone: "Callback number",
        zip: "Area ZIP code",
        submit: "Check availability",
    },
    FormLabels {
        name: "Your full name",
        email: "Where should we email you?",
        phone: "Where can we reach you?",
        zip: "What's your ZIP code?",
        submit: "Find my programs",
    },
];

/// Trust badge strip entries. Append-only.
pub static TRUST_BADGES: &[&str] = &[
    "Free to use",
    "No obligation",
    "Takes about 2 minutes",
    "Your information stays private",
    "Secure 256-bit encryption",
    "Trusted by thousands of families",
    "No credit check required",
    "Available in all 50 states",
    "Updated for the current plan year",
    "Plain-language guidance",
    "Licensed specialists on call",
    "No hidden fees, ever",
];

/// Generic program description paragraphs. Append-only.
pub static PROGRAM_DESCRIPTIONS: &[&str] = &[
    "Government assistance programs exist to help households cover \
     essentials when money is tight. Eligibility usually depends on \
     income, household size, and where you live.",
    "Millions of Americans qualify for assistance they never claim, \
     often because the paperwork looks harder than it is. A quick check \
     of your household details is usually enough to know where you stand.",
    "Each state runs its own version of most federal assistance \
     programs, so the rules in your area may differ from what a friend \
     in another state experienced.",
    "Benefit amounts are reviewed every year and adjusted for cost of \
     living, which means a household that missed the cutoff last year \
     may qualify today.",
    "Applying for assistance never affects your credit score, and in \
     most programs there is no cost to apply or to ask questions.",
    "Enrollment windows matter: some programs accept applications all \
     year, while others limit changes to certain months unless you have \
     a qualifying life event.",
    "Local offices and certified counselors can walk you through an \
     application at no charge. The first step is confirming which \
     programs your household is likely to qualify for.",
    "Your household's gross monthly income before taxes is the number \
     most programs look at first, followed by how many people share \
     your address and expenses.",
];

/// Provider directory intro paragraphs. Append-only.
pub static PROVIDER_INTROS: &[&str] = &[
    "The providers below are enrolled in your area and accepting new \
     participants. Availability changes, so confirm by phone before \
     visiting.",
    "We keep this directory current using state enrollment data. Call \
     ahead to verify hours and walk-in availability.",
    "Every listing below serves your region. Sort by distance or start \
     with the office nearest your ZIP code.",
    "These local offices and partners can help you apply, renew, or ask \
     questions in person.",
    "Below is a sample of enrolled providers near you. Your final list \
     may differ based on your county and household details.",
    "Offices near you are listed first. Most accept appointments online \
     or by phone, and many offer language assistance.",
    "This list is refreshed regularly from public enrollment records. \
     Report an out-of-date listing and we will correct it.",
    "Start with any provider below — each one can check your paperwork \
     before you submit, which avoids the most common delays.",
];

/// Structured-data "how to apply" step lists. Append-only.
pub static STRUCTURED_STEPS: &[&[&str]] = &[
    &[
        "Confirm your household size and monthly income",
        "Complete the short eligibility form",
        "Review the programs you match",
        "Submit your application online or by phone",
    ],
    &[
        "Gather proof of income and residency",
        "Answer a few questions about your household",
        "Compare your estimated benefit options",
        "Finish enrollment with a local office",
    ],
    &[
        "Check the income limits for your state",
        "Fill in your contact details",
        "Get matched with programs in your area",
    ],
    &[
        "Enter your ZIP code to find local programs",
        "Describe your household in two minutes",
        "Receive your eligibility summary",
        "Apply through the official channel for your state",
    ],
    &[
        "Review the basic eligibility rules",
        "Estimate your benefit with the calculator",
        "Start your application when ready",
    ],
    &[
        "Verify which documents your state requires",
        "Complete the pre-screening questions",
        "Schedule a call with a specialist if you want help",
        "Submit and track your application",
    ],
];

/// Hero call-to-action button texts. Append-only.
pub static CTA_HERO: &[&str] = &[
    "Check My Eligibility",
    "See If I Qualify",
    "Get Started Now",
    "Start My Free Check",
    "Find My Programs",
    "Check Eligibility in 2 Minutes",
    "See My Options",
    "Begin Eligibility Check",
    "Am I Eligible?",
    "Start Here",
    "Get My Results",
    "Check Now — It's Free",
];

/// FAQ-section call-to-action button texts. Append-only.
pub static CTA_FAQ: &[&str] = &[
    "Still have questions? Check your eligibility",
    "Ready to find out? Start your check",
    "Get your answer in minutes",
    "See where you stand today",
    "Take the 2-minute eligibility check",
    "Find out what you qualify for",
    "Start your free eligibility review",
    "Check your household's options",
    "Get a clear answer now",
    "Run your eligibility check",
    "See your estimated benefits",
    "Answer a few questions to begin",
];

/// Legal disclaimer paragraphs. Append-only.
pub static DISCLAIMERS: &[&str] = &[
    "This website is a privately operated information resource and is \
     not affiliated with, endorsed by, or operated on behalf of any \
     government agency. Program details are provided for general \
     guidance and may change without notice; always confirm current \
     rules with the official program administrator in your state.",
    "We are an independent publisher of benefits information. Nothing \
     on this site constitutes legal, financial, or medical advice, and \
     eligibility estimates are not a guarantee of enrollment or benefit \
     amount. Verify all details through your state's official channels.",
    "This site is not a government website. Using this site is free, \
     and you are never required to purchase anything to apply for \
     public assistance. Final eligibility decisions are made solely by \
     the administering agency.",
    "The information provided here is collected from public sources and \
     updated periodically. Errors are possible; official program \
     materials supersede anything published on this site. We may be \
     compensated by partners whose services appear here.",
    "This is an independent comparison and guidance service. We do not \
     process applications, issue benefits, or make eligibility \
     determinations. Contact the relevant agency for application status \
     or appeals.",
    "Privately owned and operated. References to public programs are \
     for identification and guidance only and do not imply endorsement. \
     Benefit rules vary by state and change periodically; confirm \
     current figures before making decisions.",
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
