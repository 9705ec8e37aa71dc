use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::method;

/// What to do about `Access-Control-Allow-Origin` for an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginPolicy {
    /// Echo the requesting origin into the response.
    Allow,
    /// Answer with the `*` wildcard.
    Star,
    /// Cancel the exchange outright.
    Block,
}

/// Leaf of the rule table. Every field is optional; an absent field means
/// "leave that aspect of the exchange alone".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Allowed `Access-Control-Request-Headers` entries, lower-cased.
    #[serde(rename = "ACRH", skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Vec<String>>,
    #[serde(rename = "ACAO", skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginPolicy>,
    /// Header names a response may expose.
    #[serde(rename = "ACEH", skip_serializing_if = "Option::is_none")]
    pub expose_headers: Option<Vec<String>>,
    /// `false` additionally strips credential-carrying request headers.
    #[serde(rename = "ACAC", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<bool>,
    /// Allowed methods, checked against both the preflighted and actual method.
    #[serde(rename = "ACAM", skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Header names a preflight response may allow.
    #[serde(rename = "ACAH", skip_serializing_if = "Option::is_none")]
    pub allow_headers: Option<Vec<String>>,
}

/// Innermost level: path prefix → rule.
pub type PathRules = IndexMap<String, RuleEntry>;
/// Target-origin suffix → path rules.
pub type TargetRules = IndexMap<String, PathRules>;
/// Requesting-origin suffix → target rules.
pub type OriginRules = IndexMap<String, TargetRules>;
/// Request type → origin rules. Key order at every level is match priority;
/// `*` is an ordinary candidate, not an automatic last resort.
pub type RuleTable = IndexMap<String, OriginRules>;

static DEFAULT_RULES: Lazy<RuleTable> = Lazy::new(|| {
    let entry = RuleEntry {
        origin: Some(OriginPolicy::Star),
        credentials: Some(false),
        methods: Some(vec![method::GET.to_string()]),
        ..RuleEntry::default()
    };

    let mut paths = PathRules::new();
    paths.insert("*".to_string(), entry);
    let mut targets = TargetRules::new();
    targets.insert("*".to_string(), paths);
    let mut origins = OriginRules::new();
    origins.insert("*".to_string(), targets);
    let mut table = RuleTable::new();
    table.insert("font".to_string(), origins);
    table
});

/// Built-in table applied when the configuration store holds nothing:
/// a single `font/*/*/*` rule granting star-origin, no-credentials,
/// GET-only access.
pub fn default_rules() -> RuleTable {
    DEFAULT_RULES.clone()
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;
