/// Metadata the host interception facility supplies with every hook call.
///
/// `request_id` is stable across the request and response phase of one
/// exchange but not across a preflight and its actual request; those two
/// are correlated through `initiator` plus the target identity instead.
#[derive(Debug, Clone)]
pub struct ExchangeContext<'a> {
    /// Host-assigned per-exchange transaction id.
    pub request_id: &'a str,
    /// Request type as reported by the host, e.g. `"xhr"` or `"font"`.
    pub kind: &'a str,
    pub method: &'a str,
    /// URL of the page or origin that initiated the request.
    pub initiator: &'a str,
    /// Origin part of the request URL, e.g. `"https://api.example.com"`.
    pub target_origin: &'a str,
    /// Path part of the request URL, e.g. `"/v1/items"`.
    pub path: &'a str,
}

impl ExchangeContext<'_> {
    /// Compound identity tying a preflight to its later actual request.
    pub(crate) fn correlation_key(&self) -> String {
        format!("{}|{}{}", self.initiator, self.target_origin, self.path)
    }

    pub(crate) fn is_options(&self) -> bool {
        self.method.eq_ignore_ascii_case(crate::constants::method::OPTIONS)
    }
}
