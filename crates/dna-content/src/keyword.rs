//! Keyword registry and module loader.
//!
//! Two states, no errors: a requested keyword id either resolves to an
//! enabled registry entry, or the loader logs a warning and falls back to
//! the default keyword. The contract is "always returns a usable module" —
//! a misconfigured site renders with default copy instead of failing.

use tracing::warn;

use crate::bundle::ContentBundle;
use crate::modules;

/// A FAQ entry template. `{label}` markers are substituted at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Canonical id, lowercase ("medicare"). What site config refers to.
    pub id: &'static str,
    /// Display label substituted into keyword-scoped copy ("Medicare").
    pub label: &'static str,
    /// Content module folder name, for operator tooling.
    pub folder: &'static str,
    /// Vertical tag for reporting ("health", "food", ...).
    pub category: &'static str,
    /// Disabled entries stay in the registry (ids must never be reused)
    /// but are not selectable and fall back like unknown ids.
    pub enabled: bool,
}

/// The default keyword's registry entry, named so the fallback path can
/// build its module without a registry lookup that could miss.
const DEFAULT_CONFIG: KeywordConfig =
    KeywordConfig { id: "medicare", label: "Medicare", folder: "medicare", category: "health", enabled: true };

/// The fixed keyword registry. Append-only; ids are never reused.
pub static KEYWORDS: &[KeywordConfig] = &[
    DEFAULT_CONFIG,
    KeywordConfig { id: "medicaid", label: "Medicaid", folder: "medicaid", category: "health", enabled: true },
    KeywordConfig { id: "snap", label: "SNAP", folder: "snap", category: "food", enabled: true },
    KeywordConfig { id: "section-8", label: "Section 8", folder: "housing", category: "housing", enabled: true },
    KeywordConfig { id: "liheap", label: "LIHEAP", folder: "energy", category: "utilities", enabled: true },
    KeywordConfig { id: "ssdi", label: "SSDI", folder: "disability", category: "disability", enabled: true },
    KeywordConfig { id: "wic", label: "WIC", folder: "wic", category: "food", enabled: false },
    KeywordConfig { id: "tax-relief", label: "Tax Relief", folder: "tax-relief", category: "finance", enabled: false },
];

/// The fallback keyword. Must be an enabled registry entry.
pub const DEFAULT_KEYWORD_ID: &str = DEFAULT_CONFIG.id;

/// A keyword's copy tables plus its registry entry.
#[derive(Debug, Clone, Copy)]
pub struct KeywordModule {
    pub config: &'static KeywordConfig,
    pub headlines: &'static [&'static str],
    pub subheadlines: &'static [&'static str],
    pub faqs: &'static [FaqEntry],
}

/// Copy tables for every *enabled* keyword, by registry id.
fn module_tables(id: &str) -> Option<(&'static [&'static str], &'static [&'static str], &'static [FaqEntry])> {
    match id {
        "medicare" => Some((modules::medicare::HEADLINES, modules::medicare::SUBHEADLINES, modules::medicare::FAQS)),
        "medicaid" => Some((modules::medicaid::HEADLINES, modules::medicaid::SUBHEADLINES, modules::medicaid::FAQS)),
        "snap" => Some((modules::snap::HEADLINES, modules::snap::SUBHEADLINES, modules::snap::FAQS)),
        "section-8" => Some((modules::housing::HEADLINES, modules::housing::SUBHEADLINES, modules::housing::FAQS)),
        "liheap" => Some((modules::energy::HEADLINES, modules::energy::SUBHEADLINES, modules::energy::FAQS)),
        "ssdi" => Some((modules::disability::HEADLINES, modules::disability::SUBHEADLINES, modules::disability::FAQS)),
        _ => None,
    }
}

fn resolve_module(id: &str) -> Option<KeywordModule> {
    let config = KEYWORDS.iter().find(|k| k.id == id && k.enabled)?;
    let (headlines, subheadlines, faqs) = module_tables(id)?;
    Some(KeywordModule { config, headlines, subheadlines, faqs })
}

/// The module the fallback path hands out, wired through the same table
/// lookup as every other keyword so the two can't desync. A default entry
/// with no tables is a packaging defect; the empty slices turn it into
/// `EmptyTable` at the first selection instead of hiding it.
fn default_module() -> KeywordModule {
    let (headlines, subheadlines, faqs) =
        module_tables(DEFAULT_CONFIG.id).unwrap_or((&[], &[], &[]));
    KeywordModule { config: &DEFAULT_CONFIG, headlines, subheadlines, faqs }
}

/// Load the content bundle for a requested keyword id.
///
/// The id is normalized (trim + ASCII lowercase) before lookup. Unknown
/// and disabled ids log a warning and resolve to [`DEFAULT_KEYWORD_ID`];
/// the returned bundle has the same shape either way.
#[must_use]
pub fn load_keyword_variations(requested: &str) -> ContentBundle {
    let normalized = requested.trim().to_ascii_lowercase();
    resolve_module(&normalized).map_or_else(
        || {
            warn!(
                requested,
                fallback = DEFAULT_KEYWORD_ID,
                "unknown or disabled keyword id, using fallback module"
            );
            ContentBundle::new(default_module())
        },
        ContentBundle::new,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global;

    fn enabled() -> impl Iterator<Item = &'static KeywordConfig> {
        KEYWORDS.iter().filter(|k| k.enabled)
    }

    #[test]
    fn registry_ids_unique() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.id, b.id, "Duplicate keyword id");
            }
        }
    }

    #[test]
    fn default_keyword_is_enabled() {
        let config = KEYWORDS.iter().find(|k| k.id == DEFAULT_KEYWORD_ID).unwrap();
        assert!(config.enabled);
    }

    #[test]
    fn default_module_shares_the_registry_wiring() {
        // The fallback module must come out of the same table lookup as a
        // direct resolution of the default id — a default whose tables
        // drifted from the registry would surface here.
        let tables = module_tables(DEFAULT_KEYWORD_ID);
        assert!(tables.is_some(), "Default keyword has no wired tables");

        let fallback = default_module();
        let resolved = resolve_module(DEFAULT_KEYWORD_ID).unwrap();
        assert_eq!(fallback.config.id, resolved.config.id);
        assert!(std::ptr::eq(fallback.headlines, resolved.headlines));
        assert!(std::ptr::eq(fallback.subheadlines, resolved.subheadlines));
        assert!(std::ptr::eq(fallback.faqs, resolved.faqs));
    }

    #[test]
    fn every_enabled_keyword_has_a_module() {
        for config in enabled() {
            let module = resolve_module(config.id);
            assert!(module.is_some(), "No module for `{}`", config.id);
        }
    }

    #[test]
    fn disabled_keywords_do_not_resolve() {
        assert!(resolve_module("wic").is_none());
        assert!(resolve_module("tax-relief").is_none());
    }

    #[test]
    fn module_tables_are_non_empty() {
        for config in enabled() {
            let module = resolve_module(config.id).unwrap();
            assert!(!module.headlines.is_empty(), "{}: empty headlines", config.id);
            assert!(!module.subheadlines.is_empty(), "{}: empty subheadlines", config.id);
            assert!(module.faqs.len() >= 6, "{}: thin FAQ table", config.id);
        }
    }

    #[test]
    fn keyword_templates_mention_the_label() {
        // Every headline/subheadline template must carry the substitution
        // marker, and every FAQ must name the topic somewhere.
        for config in enabled() {
            let module = resolve_module(config.id).unwrap();
            for template in module.headlines.iter().chain(module.subheadlines) {
                assert!(
                    template.contains("{label}"),
                    "{}: template without marker: {template}",
                    config.id
                );
            }
            for faq in module.faqs {
                assert!(
                    faq.question.contains("{label}") || faq.answer.contains("{label}"),
                    "{}: FAQ never names the topic: {}",
                    config.id,
                    faq.question
                );
            }
        }
    }

    #[test]
    fn global_tables_never_mention_keywords() {
        // The separation invariant. Checked case-insensitively to be
        // stricter than the letter of the contract.
        let mut globals: Vec<String> = Vec::new();
        for set in global::FORM_LABEL_SETS {
            for field in [set.name, set.email, set.phone, set.zip, set.submit] {
                globals.push(field.to_lowercase());
            }
        }
        for text in global::TRUST_BADGES
            .iter()
            .chain(global::PROGRAM_DESCRIPTIONS)
            .chain(global::PROVIDER_INTROS)
            .chain(global::CTA_HERO)
            .chain(global::CTA_FAQ)
            .chain(global::DISCLAIMERS)
        {
            globals.push(text.to_lowercase());
        }
        for steps in global::STRUCTURED_STEPS {
            for step in *steps {
                globals.push(step.to_lowercase());
            }
        }

        for config in enabled() {
            let label = config.label.to_lowercase();
            for text in &globals {
                assert!(
                    !text.contains(&label),
                    "Global copy mentions `{}`: {text}",
                    config.label
                );
            }
        }
    }

    #[test]
    fn loader_normalizes_ids() {
        let bundle = load_keyword_variations("  MediCare \n");
        assert_eq!(bundle.keyword().id, "medicare");
    }

    #[test]
    fn unknown_id_falls_back() {
        let bundle = load_keyword_variations("not-a-real-keyword");
        assert_eq!(bundle.keyword().id, DEFAULT_KEYWORD_ID);
    }

    #[test]
    fn disabled_id_falls_back() {
        let bundle = load_keyword_variations("wic");
        assert_eq!(bundle.keyword().id, DEFAULT_KEYWORD_ID);
    }

    #[test]
    fn fallback_bundle_matches_default_shape() {
        // Same module, same outputs — the fallback path must be
        // indistinguishable from asking for the default directly.
        let fallback = load_keyword_variations("not-a-real-keyword");
        let default = load_keyword_variations(DEFAULT_KEYWORD_ID);
        assert_eq!(fallback.keyword().id, default.keyword().id);
        assert_eq!(
            fallback.headline("example-one.com").unwrap(),
            default.headline("example-one.com").unwrap()
        );
        assert_eq!(
            fallback.faq("example-one.com", 4).unwrap(),
            default.faq("example-one.com", 4).unwrap()
        );
    }
}
