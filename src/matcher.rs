use crate::rules::{RuleEntry, RuleTable};

const WILDCARD: &str = "*";

/// Resolves the most specific rule for an exchange via four narrowing
/// lookups: request type, requesting-origin suffix, target-origin suffix,
/// path prefix. At each scanned level the first key in table order whose
/// test succeeds wins; `*` matches unconditionally wherever it appears.
pub fn match_rule<'a>(
    table: &'a RuleTable,
    kind: &str,
    origin: &str,
    target: &str,
    path: &str,
) -> Option<&'a RuleEntry> {
    let by_origin = table.get(kind).or_else(|| table.get(WILDCARD))?;

    let by_target = by_origin
        .iter()
        .find(|(key, _)| suffix_matches(key, origin))
        .map(|(_, value)| value)?;

    let by_path = by_target
        .iter()
        .find(|(key, _)| suffix_matches(key, target))
        .map(|(_, value)| value)?;

    by_path
        .iter()
        .find(|(key, _)| prefix_matches(key, path))
        .map(|(_, value)| value)
}

// Suffix matching is boundary-aware: the key "example.com" covers
// "example.com" and anything ending in ".example.com" (or "//example.com"
// for full URLs), but never the lookalike "notexample.com".
fn suffix_matches(key: &str, candidate: &str) -> bool {
    if key == WILDCARD {
        return true;
    }
    if !candidate.ends_with(key) {
        return false;
    }
    match candidate[..candidate.len() - key.len()].chars().next_back() {
        Some(ch) => !ch.is_ascii_alphanumeric() && ch != '-',
        None => true,
    }
}

// Not path-segment aware on purpose: "/api" also matches "/apiary".
fn prefix_matches(key: &str, candidate: &str) -> bool {
    key == WILDCARD || candidate.starts_with(key)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
