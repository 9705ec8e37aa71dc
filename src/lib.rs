pub mod constants;

mod commands;
mod context;
mod correlator;
mod engine;
mod headers;
mod matcher;
mod result;
mod rewrite;
mod rules;
mod storage;
mod store;
mod util;

pub use commands::{Command, CommandResponse};
pub use context::ExchangeContext;
pub use engine::CorsOverride;
pub use headers::{Header, HeaderCollection};
pub use matcher::match_rule;
pub use result::{CommandError, Verdict};
pub use rules::{
    OriginPolicy, OriginRules, PathRules, RuleEntry, RuleTable, TargetRules, default_rules,
};
pub use storage::{ConfigStore, MemoryStore, StorageError};
pub use store::RuleStore;
pub use util::{complement, intersect, split_list};
