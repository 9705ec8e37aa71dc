use tracing::{debug, warn};

use crate::commands::{Command, CommandResponse};
use crate::constants::{RULES_KEY, header};
use crate::context::ExchangeContext;
use crate::correlator::{ExchangeCorrelator, ExchangeRecord};
use crate::headers::{Header, HeaderCollection};
use crate::matcher::match_rule;
use crate::result::{CommandError, Verdict};
use crate::rewrite::{self, RewriteOutcome};
use crate::storage::ConfigStore;
use crate::store::RuleStore;

/// The CORS override engine: rule matching, preflight/request correlation,
/// and header rewriting, wired to an injected configuration store.
///
/// Both interception entry points run synchronously to completion; the host
/// guarantees that for one exchange the request-phase call returns before
/// the response-phase call begins. Calls for different exchanges may
/// interleave freely.
pub struct CorsOverride<S: ConfigStore> {
    storage: S,
    rules: RuleStore,
    exchanges: ExchangeCorrelator,
}

impl<S: ConfigStore> CorsOverride<S> {
    /// Builds the engine and loads rules from the injected store. A missing
    /// or unreadable store keeps the built-in default table; a corrupt
    /// stored table is ignored the same way rather than crashing traffic.
    pub fn new(storage: S) -> Self {
        let engine = Self {
            storage,
            rules: RuleStore::new(),
            exchanges: ExchangeCorrelator::new(),
        };
        if let Err(error) = engine.load_from_storage() {
            warn!(%error, "stored rules unreadable, keeping built-in defaults");
        }
        engine
    }

    pub fn handle_command(&self, command: Command) -> Result<CommandResponse, CommandError> {
        match command {
            Command::GetRules => Ok(CommandResponse::Rules(self.rules.to_json()?)),
            Command::SetRules(json) => {
                let table = RuleStore::parse(&json)?;
                self.storage.set(RULES_KEY, &json)?;
                self.rules.replace(table);
                Ok(CommandResponse::Done)
            }
            Command::ReadStorage => {
                self.load_from_storage()?;
                Ok(CommandResponse::Done)
            }
            Command::ClearStorage => {
                self.storage.clear()?;
                self.rules.reset();
                Ok(CommandResponse::Done)
            }
        }
    }

    /// Before-headers-sent hook. Resolves a rule, correlates the exchange,
    /// and rewrites or cancels the outgoing header set.
    pub fn on_request(&self, ctx: &ExchangeContext<'_>, headers: Vec<Header>) -> Verdict {
        let mut headers = HeaderCollection::from_headers(headers);

        // Requests without an Origin header are not CORS traffic.
        let Some(origin_value) = headers.value(header::ORIGIN).map(str::to_owned) else {
            return Verdict::Pass;
        };

        let snapshot = self.rules.snapshot();
        let Some(rule) = match_rule(
            &snapshot,
            ctx.kind,
            ctx.initiator,
            ctx.target_origin,
            ctx.path,
        ) else {
            return Verdict::Pass;
        };

        let key = ctx.correlation_key();
        if ctx.is_options() && !self.exchanges.has_preflight(&key) {
            let mut record = ExchangeRecord::new(rule.clone(), origin_value);
            match rewrite::preflight_request(&mut record, &mut headers) {
                RewriteOutcome::Cancel => {
                    debug!(kind = ctx.kind, "cancelling preflight per rule");
                    Verdict::Cancel
                }
                outcome => {
                    self.exchanges.insert_preflight(key, record);
                    Self::verdict(outcome, headers)
                }
            }
        } else {
            // A pending preflight for the same compound identity is consumed
            // here and its record reused, so the rule resolved for the
            // preflight keeps governing the whole exchange and the omitted
            // request headers carry forward.
            let record = self
                .exchanges
                .take_preflight(&key)
                .unwrap_or_else(|| ExchangeRecord::new(rule.clone(), origin_value));
            match rewrite::actual_request(&record, ctx.method, &mut headers) {
                RewriteOutcome::Cancel => {
                    debug!(kind = ctx.kind, method = ctx.method, "cancelling request per rule");
                    Verdict::Cancel
                }
                outcome => {
                    self.exchanges.insert_request(ctx.request_id.to_string(), record);
                    Self::verdict(outcome, headers)
                }
            }
        }
    }

    /// After-headers-received hook. A response with no stored record is
    /// untracked traffic and passes through untouched.
    pub fn on_response(&self, ctx: &ExchangeContext<'_>, headers: Vec<Header>) -> Verdict {
        let mut headers = HeaderCollection::from_headers(headers);

        let preflight = if ctx.is_options() {
            self.exchanges.peek_preflight(&ctx.correlation_key())
        } else {
            None
        };

        let outcome = match preflight {
            Some(record) => rewrite::preflight_response(&record, &mut headers),
            // An OPTIONS response without a pending preflight falls through
            // to the actual-request table.
            None => match self.exchanges.take_request(ctx.request_id) {
                Some(record) => rewrite::actual_response(&record, &mut headers),
                None => return Verdict::Pass,
            },
        };

        Self::verdict(outcome, headers)
    }

    fn load_from_storage(&self) -> Result<(), CommandError> {
        match self.storage.get(RULES_KEY)? {
            Some(json) => self.rules.replace(RuleStore::parse(&json)?),
            None => self.rules.reset(),
        }
        Ok(())
    }

    fn verdict(outcome: RewriteOutcome, headers: HeaderCollection) -> Verdict {
        match outcome {
            RewriteOutcome::Modified => Verdict::Rewrite(headers.into_headers()),
            _ => Verdict::Pass,
        }
    }
}
