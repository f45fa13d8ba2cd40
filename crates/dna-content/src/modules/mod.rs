//! Keyword modules — topic-scoped copy tables, one module per keyword.
//!
//! Every headline and sub-headline template carries a `{label}` marker
//! that the bundle replaces with the keyword's display label, and every
//! FAQ entry names the topic in its question or answer. That is the other
//! half of the separation invariant: keyword mentions live here and only
//! here.

pub mod disability;
pub mod energy;
pub mod housing;
pub mod medicaid;
pub mod medicare;
pub mod snap;
