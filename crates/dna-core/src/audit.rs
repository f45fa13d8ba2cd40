//! Collision auditing — an offline quality gate for domain batches.
//!
//! Before onboarding a batch of domains, operations runs the batch through
//! [`detect_collisions`] for the contexts that matter and checks the rate.
//! Colliding domains render identical selections for that context, which
//! is exactly the near-duplicate signature the engine exists to avoid.
//! Birthday-paradox collisions are tolerated, not prevented — this report
//! is how they're noticed, never a request-time check.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::hash::compound_hash;

/// A set of domains that share one compound hash for the audited context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionGroup {
    /// The shared compound hash value.
    pub hash: u64,
    /// Every domain in the input that produced it. Always >= 2 entries.
    pub domains: Vec<String>,
}

/// Outcome of auditing one context over a batch of domains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionReport {
    /// Context label the batch was audited against.
    pub context: String,
    /// Number of domains in the input batch.
    pub total_domains: usize,
    /// Number of distinct compound hash values observed.
    pub distinct_hashes: usize,
    /// Number of domains involved in at least one collision.
    pub colliding_domains: usize,
    /// `colliding_domains / total_domains`, 0.0 for an empty batch.
    pub collision_rate: f64,
    /// The offending groups, ordered by hash value.
    pub groups: Vec<CollisionGroup>,
}

/// Audit a batch of domains for compound-hash collisions in one context.
///
/// Grouping uses a `BTreeMap` so the report order is stable across runs —
/// diffs of two audit outputs mean something.
#[allow(clippy::cast_precision_loss)]
pub fn detect_collisions<S: AsRef<str>>(domains: &[S], context: &str) -> CollisionReport {
    let mut by_hash: BTreeMap<u64, Vec<String>> = BTreeMap::new();
    for domain in domains {
        let domain = domain.as_ref();
        let hash = compound_hash(domain, context, "");
        by_hash.entry(hash).or_default().push(domain.to_owned());
    }

    let distinct_hashes = by_hash.len();
    let groups: Vec<CollisionGroup> = by_hash
        .into_iter()
        .filter(|(_, domains)| domains.len() > 1)
        .map(|(hash, domains)| CollisionGroup { hash, domains })
        .collect();

    let colliding_domains = groups.iter().map(|g| g.domains.len()).sum();
    let collision_rate = if domains.is_empty() {
        0.0
    } else {
        colliding_domains as f64 / domains.len() as f64
    };

    CollisionReport {
        context: context.to_owned(),
        total_domains: domains.len(),
        distinct_hashes,
        colliding_domains,
        collision_rate,
        groups,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch() {
        let report = detect_collisions::<&str>(&[], "cta-faq");
        assert_eq!(report.total_domains, 0);
        assert_eq!(report.distinct_hashes, 0);
        assert!(report.groups.is_empty());
        assert!(report.collision_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_domains_collide_trivially() {
        let report = detect_collisions(&["a.com", "a.com", "b.com"], "cta-faq");
        assert_eq!(report.total_domains, 3);
        assert_eq!(report.distinct_hashes, 2);
        assert_eq!(report.colliding_domains, 2);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].domains, vec!["a.com", "a.com"]);
    }

    #[test]
    fn synthetic_batch_mostly_distinct() {
        // Statistical gate from operations: >= 99% of a 1000-domain batch
        // must hash distinctly for a non-trivial context.
        let domains: Vec<String> = (0..1000).map(|i| format!("site-{i}.example")).collect();
        let report = detect_collisions(&domains, "cta-faq");
        assert!(
            report.distinct_hashes >= 990,
            "Too many collisions: {} distinct of {}",
            report.distinct_hashes,
            report.total_domains
        );
        assert!(report.collision_rate < 0.02, "Rate: {}", report.collision_rate);
    }

    #[test]
    fn report_is_deterministic() {
        let domains = ["x.com", "y.com", "z.com"];
        let a = detect_collisions(&domains, "hero-headline");
        let b = detect_collisions(&domains, "hero-headline");
        assert_eq!(a, b);
    }

    #[test]
    fn report_serializes() {
        let report = detect_collisions(&["a.com", "a.com"], "cta-faq");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"collision_rate\":1.0"), "JSON: {json}");
    }
}
