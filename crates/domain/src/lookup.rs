use std::sync::Arc;
use std::time::Duration;

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub domain: Arc<str>,
    pub ip_address: String,
    pub lookup_time: Duration,
}

impl LookupResult {
    pub fn new(domain: Arc<str>, ip_address: impl Into<String>, lookup_time: Duration) -> Self {
        Self {
            domain,
            ip_address: ip_address.into(),
            lookup_time,
        }
    }

    /// Elapsed time rendered as whole milliseconds, e.g. `"42ms"`.
    pub fn lookup_time_display(&self) -> String {
        format!("{}ms", self.lookup_time.as_millis())
    }
}
