//! Variation selection — deterministic index arithmetic over fixed tables.
//!
//! A variation table is an ordered, fixed-length slice of candidates. The
//! selector maps `(domain, context, salt)` to an index with
//! [`compound_hash`] and `% len`. Table order and length are therefore a
//! compatibility contract: reordering, resizing, or removing entries
//! changes what already-deployed domains render on their next rebuild.

use crate::error::SelectError;
use crate::hash::compound_hash;

/// Select one element of `table` for this domain and context.
///
/// # Errors
///
/// [`SelectError::EmptyTable`] if the table has no candidates.
pub fn pick<'t, T>(
    domain: &str,
    table: &'t [T],
    context: &str,
    salt: &str,
) -> Result<&'t T, SelectError> {
    if table.is_empty() {
        return Err(SelectError::EmptyTable { context: context.to_owned() });
    }
    let idx = compound_hash(domain, context, salt) as usize % table.len();
    Ok(&table[idx])
}

/// Select `count` distinct elements of `table` for this domain and context.
///
/// Each output slot probes candidate indices with the salt
/// `"index-{slot}-attempt-{n}"` for `n = 0, 1, 2, ...` until an unused
/// index turns up. The attempt budget is `2 × table.len()` per slot; if it
/// runs out (dense tables late in the fill), the slot falls back to the
/// lowest index not yet used. Bounded retries plus the linear fallback
/// guarantee termination and determinism while letting the hash probe win
/// almost always.
///
/// # Errors
///
/// [`SelectError::ExceedsCapacity`] if `count > table.len()`;
/// [`SelectError::EmptyTable`] if the table is empty and `count > 0`.
pub fn pick_unique<'t, T>(
    domain: &str,
    table: &'t [T],
    count: usize,
    context: &str,
) -> Result<Vec<&'t T>, SelectError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if table.is_empty() {
        return Err(SelectError::EmptyTable { context: context.to_owned() });
    }
    if count > table.len() {
        return Err(SelectError::ExceedsCapacity {
            requested: count,
            available: table.len(),
            context: context.to_owned(),
        });
    }

    let len = table.len();
    let budget = 2 * len;
    let mut used = vec![false; len];
    let mut out = Vec::with_capacity(count);

    for slot in 0..count {
        let mut chosen = None;
        for attempt in 0..budget {
            let salt = format!("index-{slot}-attempt-{attempt}");
            let idx = compound_hash(domain, context, &salt) as usize % len;
            if !used[idx] {
                chosen = Some(idx);
                break;
            }
        }
        // Budget exhausted: take the lowest unused index. `count <= len`
        // guarantees one exists.
        let idx = chosen.unwrap_or_else(|| {
            used.iter().position(|taken| !taken).unwrap_or(0)
        });
        used[idx] = true;
        out.push(&table[idx]);
    }

    Ok(out)
}

/// Deterministic fraction in `[0, 1)` for this domain and context.
///
/// `compound_hash % 100_000 / 100_000` — five decimal digits of
/// resolution, used where a continuous threshold is wanted (e.g. "inject
/// the site name into this headline for ~30% of domains") instead of a
/// discrete table draw.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seeded_fraction(domain: &str, context: &str) -> f64 {
    (compound_hash(domain, context, "") % 100_000) as f64 / 100_000.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
