//! # dna-content — Content variation and site structure for sitedna
//!
//! The text half of the variation engine. Where `dna-design` decides how a
//! site *looks*, this crate decides what it *says*: headlines, FAQ sets,
//! form labels, CTAs, disclaimers — all drawn deterministically from fixed
//! tables, keyed by domain and context label.
//!
//! The crate is organized around one invariant: keyword mentions live in
//! keyword modules, never in global tables. A sites network where the
//! generic sections name the program reads identically across every
//! domain of that keyword, which is the duplicate-content signature the
//! whole engine exists to avoid.
//!
//! - **[`context`]** — the closed enums of per-slot hash labels
//! - **[`global`]** — keyword-agnostic copy tables
//! - **[`modules`]** — keyword-scoped copy tables, one module per keyword
//! - **[`keyword`]** — registry and loader with warn-and-fallback semantics
//! - **[`bundle`]** — the merged content-producing surface per site
//! - **[`architecture`]** — explicit per-domain structural templates
//! - **[`config`]** — the per-site configuration handed in by rendering

pub mod architecture;
pub mod bundle;
pub mod config;
pub mod context;
pub mod global;
pub mod keyword;
pub mod modules;

pub use architecture::{SiteArchitecture, architecture};
pub use bundle::{ContentBundle, FaqItem};
pub use config::SiteConfig;
pub use keyword::{DEFAULT_KEYWORD_ID, KEYWORDS, KeywordConfig, load_keyword_variations};
