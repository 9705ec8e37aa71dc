use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::rules::{RuleTable, default_rules};

/// Holds the active rule table behind an atomic pointer swap.
///
/// Interception callbacks take one snapshot per operation and never observe
/// a partially-updated table; configuration commands build the replacement
/// in full before publishing it.
pub struct RuleStore {
    table: ArcSwap<RuleTable>,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    pub fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(default_rules()),
        }
    }

    pub fn snapshot(&self) -> Arc<RuleTable> {
        self.table.load_full()
    }

    pub fn replace(&self, table: RuleTable) {
        tracing::debug!(types = table.len(), "replacing active rule table");
        self.table.store(Arc::new(table));
    }

    pub fn reset(&self) {
        self.replace(default_rules());
    }

    pub fn parse(json: &str) -> Result<RuleTable, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.snapshot().as_ref())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
