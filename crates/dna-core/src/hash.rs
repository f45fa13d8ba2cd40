//! String hashing — FNV-1a plus the domain/context/salt combinator.
//!
//! The contract that everything downstream leans on: these functions are
//! pure, total, and platform-independent. No floats, no locale-sensitive
//! case folding, no iteration over unordered containers. Change a constant
//! here and every already-deployed site silently changes its appearance on
//! the next rebuild, so the constants are frozen.

/// FNV-1a 32-bit offset basis. `fnv1a("")` returns exactly this value.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

// Distinct large primes for the compound combinator. Three different
// multipliers mean a change to any one input perturbs the result
// independently of the other two — two contexts that differ only in
// their label never collapse onto the domain hash alone.
const DOMAIN_PRIME: u64 = 2_654_435_761;
const CONTEXT_PRIME: u64 = 2_246_822_519;
const SALT_PRIME: u64 = 3_266_489_917;

/// Hash a string with FNV-1a over its UTF-16 code units.
///
/// Code units (not bytes, not scalar values) keep the accumulator sequence
/// identical to what the deployed site corpus was built against, including
/// for the rare non-ASCII domain label. O(n), accepts any string; the
/// empty string hashes to [`FNV_OFFSET_BASIS`].
#[must_use]
pub fn fnv1a(text: &str) -> u32 {
    let mut acc = FNV_OFFSET_BASIS;
    for unit in text.encode_utf16() {
        acc ^= u32::from(unit);
        acc = acc.wrapping_mul(FNV_PRIME);
    }
    acc
}

/// Combine a domain, a context label, and an optional salt into one seed.
///
/// Each input is hashed independently, then the three hashes are combined
/// with distinct prime multipliers in wrapping u64 arithmetic. An empty
/// salt contributes zero rather than the FNV basis, so salt-free call
/// sites don't pay a constant offset.
///
/// The context label is the decision being made ("hero-headline",
/// "cta-faq"); the salt decorrelates multiple draws within one context
/// ("index-3-attempt-1"). Both must stay stable across builds.
#[must_use]
pub fn compound_hash(domain: &str, context: &str, salt: &str) -> u64 {
    let d = u64::from(fnv1a(domain));
    let c = u64::from(fnv1a(context));
    let s = if salt.is_empty() { 0 } else { u64::from(fnv1a(salt)) };
    d.wrapping_mul(DOMAIN_PRIME)
        .wrapping_add(c.wrapping_mul(CONTEXT_PRIME))
        .wrapping_add(s.wrapping_mul(SALT_PRIME))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_offset_basis() {
        assert_eq!(fnv1a(""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn fnv1a_is_deterministic() {
        assert_eq!(fnv1a("example-one.com"), fnv1a("example-one.com"));
    }

    #[test]
    fn fnv1a_known_vectors() {
        // FNV-1a reference vectors (ASCII, so code units == bytes).
        assert_eq!(fnv1a("a"), 0xe40c_292c);
        assert_eq!(fnv1a("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn fnv1a_distinguishes_close_inputs() {
        assert_ne!(fnv1a("example-one.com"), fnv1a("example-two.com"));
        assert_ne!(fnv1a("ab"), fnv1a("ba"));
    }

    #[test]
    fn non_ascii_input_hashes() {
        // Multi-code-unit scalars (emoji = surrogate pair) must not panic
        // and must differ from their prefix.
        assert_ne!(fnv1a("münchen-hilfe.de"), fnv1a("munchen-hilfe.de"));
        assert_ne!(fnv1a("a🦀"), fnv1a("a"));
    }

    #[test]
    fn compound_is_deterministic() {
        let a = compound_hash("example-one.com", "cta-faq", "");
        let b = compound_hash("example-one.com", "cta-faq", "");
        assert_eq!(a, b);
    }

    #[test]
    fn compound_empty_salt_contributes_zero() {
        // An empty salt must behave as if the salt term were absent, which
        // is *not* the same as hashing "" (that would add the basis).
        let d = u64::from(fnv1a("example-one.com"));
        let c = u64::from(fnv1a("cta-faq"));
        let expected = d
            .wrapping_mul(2_654_435_761)
            .wrapping_add(c.wrapping_mul(2_246_822_519));
        assert_eq!(compound_hash("example-one.com", "cta-faq", ""), expected);
    }

    #[test]
    fn compound_sensitive_to_each_input() {
        let base = compound_hash("example-one.com", "cta-faq", "index-0-attempt-0");
        assert_ne!(base, compound_hash("example-two.com", "cta-faq", "index-0-attempt-0"));
        assert_ne!(base, compound_hash("example-one.com", "cta-hero", "index-0-attempt-0"));
        assert_ne!(base, compound_hash("example-one.com", "cta-faq", "index-0-attempt-1"));
    }

    #[test]
    fn compound_inputs_not_interchangeable() {
        // Swapping domain and context must not produce the same seed —
        // that's the whole point of distinct prime multipliers.
        assert_ne!(
            compound_hash("hero", "example.com", ""),
            compound_hash("example.com", "hero", "")
        );
    }
}
