//! # dna-design — Design DNA generation for sitedna
//!
//! Turns a `(domain, keyword, mode)` triple into a complete style
//! descriptor: color palette, font pairing, layout skeleton, derived
//! gradients, and (in advanced mode) fourteen further layout dimensions.
//! Thousands of independently built domains come out looking different;
//! rebuilding any one domain reproduces it exactly.
//!
//! # Architecture
//!
//! ```text
//! domain + keyword + mode
//!     │
//!     ▼
//! dna.rs:     seed derivation (hash transforms) and table indexing
//!     │
//!     ├── palette.rs:  color palette table (six semantic roles)
//!     ├── font.rs:     Google Fonts pairing table
//!     └── layout.rs:   basic triple enums + advanced dimension tables
//!     │
//!     ▼
//! css.rs:     custom-property emission (pure formatting)
//! ```
//!
//! Every table in this crate is append-only. Index arithmetic over table
//! length is the only selection mechanism, so reordering or shrinking a
//! table silently re-skins deployed domains on their next rebuild.

pub mod css;
pub mod dna;
pub mod font;
pub mod layout;
pub mod palette;

pub use css::css_variables;
pub use dna::{DesignDna, DesignMode, Gradients};
pub use font::FontPair;
pub use layout::{AdvancedLayout, CardStyle, CtaStyle, HeroStyle};
pub use palette::Palette;
