/// Configuration commands exposed to the editor/storage collaborators.
/// Closed set; every request/response shape is fixed at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serialize the current in-memory rule table.
    GetRules,
    /// Parse the JSON text, persist it, and atomically replace the active
    /// table. A parse failure leaves both the store and the table unchanged.
    SetRules(String),
    /// Reload from the injected store, falling back to the built-in default
    /// table when the store holds nothing.
    ReadStorage,
    /// Erase the injected store and reset to the built-in default table.
    ClearStorage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResponse {
    /// Rule table JSON, returned by [`Command::GetRules`].
    Rules(String),
    Done,
}
