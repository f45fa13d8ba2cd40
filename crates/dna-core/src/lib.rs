//! # dna-core — Deterministic selection primitives for sitedna
//!
//! Everything a site derives — colors, copy, layout — traces back to the
//! functions in this crate. Given the same domain string, the same context
//! label, and the same salt, every process on every platform computes the
//! same answer. There is no RNG, no persisted state, and no shared mutable
//! anything: a rebuild of a deployed site must reproduce it byte for byte.
//!
//! # Architecture
//!
//! ```text
//! domain + context label + salt
//!     │
//!     ▼
//! hash.rs:   FNV-1a per input, combined with distinct prime multipliers
//!     │
//!     ▼
//! select.rs: index arithmetic over fixed variation tables
//!     │
//!     ▼
//! audit.rs:  offline collision reporting across a domain corpus
//! ```
//!
//! [`cache::TtlCache`] is the one stateful utility here. The selection
//! engine never touches it — it exists for the rendering layer, which
//! memoizes data-store fetches, and is constructed and injected explicitly
//! rather than living behind a global.

pub mod audit;
pub mod cache;
pub mod error;
pub mod hash;
pub mod select;

pub use audit::{CollisionGroup, CollisionReport, detect_collisions};
pub use cache::TtlCache;
pub use error::SelectError;
pub use hash::{compound_hash, fnv1a};
pub use select::{pick, pick_unique, seeded_fraction};
