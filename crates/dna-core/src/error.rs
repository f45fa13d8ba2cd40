//! Selection failures — all of them programmer or packaging defects.
//!
//! A table that is empty, or too small for the number of unique draws
//! requested, shipped broken. These errors exist to abort a build/deploy
//! pipeline loudly; nothing in the engine catches and ignores them.
//! Recoverable conditions (unknown keyword id, unrecognized design mode)
//! are deliberately *not* here — those degrade to defaults at their call
//! sites instead of failing the render.

use thiserror::Error;

/// Failure selecting from a variation table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The table for a context has zero candidates. A packaging defect,
    /// never a runtime condition.
    #[error("variation table for context `{context}` is empty")]
    EmptyTable {
        /// Context label whose table was empty.
        context: String,
    },

    /// More unique selections were requested than the table holds.
    #[error(
        "requested {requested} unique variations for context `{context}` \
         but the table holds only {available}"
    )]
    ExceedsCapacity {
        /// Number of unique elements requested.
        requested: usize,
        /// Number of elements the table actually holds.
        available: usize,
        /// Context label for the offending draw.
        context: String,
    },
}
