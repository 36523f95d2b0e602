use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

// Outgoing conflicts only; the table is intentionally not symmetric.
const CONFLICTS: &[(&str, &[&str])] = &[
    ("summer", &["winter", "snow", "ski", "skiing", "cold", "ice"]),
    ("winter", &["summer", "beach", "hot", "warm", "pool"]),
    ("water", &["snow", "ski", "skiing", "winter"]),
    ("snow", &["water", "beach", "summer", "pool", "swimming"]),
    ("kayak", &["ski", "skiing", "snow", "winter"]),
    ("ski", &["water", "kayak", "swimming", "beach", "summer"]),
];

const GENERIC_TERMS: &[&str] = &["gear", "equipment", "stuff", "items", "tools", "supplies"];

const CONTEXT_TERMS: &[&str] = &[
    "winter", "summer", "water", "outdoor", "camping", "gaming", "sports",
];

pub(crate) static DEFAULT_TABLES: LazyLock<MatchTables> = LazyLock::new(MatchTables::default);

/// Vocabulary used by the relevance heuristic.
///
/// Entries are expected in normalized form (lower-case, single spaces).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchTables {
    pub conflicts: HashMap<String, Vec<String>>,
    pub generic_terms: Vec<String>,
    pub context_terms: Vec<String>,
}

impl Default for MatchTables {
    fn default() -> Self {
        let to_vec = |terms: &[&str]| terms.iter().map(|t| t.to_string()).collect::<Vec<_>>();

        Self {
            conflicts: CONFLICTS
                .iter()
                .map(|(tag, opposed)| (tag.to_string(), to_vec(*opposed)))
                .collect(),
            generic_terms: to_vec(GENERIC_TERMS),
            context_terms: to_vec(CONTEXT_TERMS),
        }
    }
}

impl MatchTables {
    pub fn conflicts_for(&self, tag: &str) -> &[String] {
        self.conflicts.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_generic(&self, word: &str) -> bool {
        self.generic_terms.iter().any(|t| t == word)
    }

    pub fn is_context(&self, word: &str) -> bool {
        self.context_terms.iter().any(|t| t == word)
    }

    /// True if `tag` contains any context term as a substring.
    pub fn mentions_context(&self, tag: &str) -> bool {
        self.context_terms.iter().any(|ctx| tag.contains(ctx.as_str()))
    }
}
