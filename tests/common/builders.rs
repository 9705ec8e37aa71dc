use cors_override_rs::constants::method;
use cors_override_rs::{Command, CorsOverride, ExchangeContext, Header, MemoryStore};

pub fn default_engine() -> CorsOverride<MemoryStore> {
    CorsOverride::new(MemoryStore::new())
}

pub fn engine_with_rules(json: &str) -> CorsOverride<MemoryStore> {
    let engine = default_engine();
    engine
        .handle_command(Command::SetRules(json.to_string()))
        .expect("valid rule JSON");
    engine
}

pub fn headers(pairs: &[(&str, &str)]) -> Vec<Header> {
    pairs
        .iter()
        .map(|(name, value)| Header::new(*name, *value))
        .collect()
}

/// Owns the exchange metadata so tests can hand out `ExchangeContext`
/// borrows without juggling lifetimes.
pub struct Exchange {
    pub request_id: String,
    pub kind: String,
    pub method: String,
    pub initiator: String,
    pub target_origin: String,
    pub path: String,
}

impl Exchange {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            kind: "xhr".into(),
            method: method::GET.into(),
            initiator: "https://app.test".into(),
            target_origin: "https://api.test".into(),
            path: "/".into(),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn initiator(mut self, initiator: impl Into<String>) -> Self {
        self.initiator = initiator.into();
        self
    }

    pub fn target_origin(mut self, target_origin: impl Into<String>) -> Self {
        self.target_origin = target_origin.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// The same exchange identity one phase later: an actual request
    /// following this preflight shares everything but id and method.
    pub fn follow_up(&self, request_id: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            kind: self.kind.clone(),
            method: method.into(),
            initiator: self.initiator.clone(),
            target_origin: self.target_origin.clone(),
            path: self.path.clone(),
        }
    }

    pub fn context(&self) -> ExchangeContext<'_> {
        ExchangeContext {
            request_id: &self.request_id,
            kind: &self.kind,
            method: &self.method,
            initiator: &self.initiator,
            target_origin: &self.target_origin,
            path: &self.path,
        }
    }
}

pub fn preflight(request_id: impl Into<String>) -> Exchange {
    Exchange::new(request_id).method(method::OPTIONS)
}
