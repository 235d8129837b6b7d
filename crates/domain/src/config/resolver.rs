use serde::{Deserialize, Serialize};

/// Upstream DNS-over-HTTPS resolver speaking `application/dns-json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_url")]
    pub url: String,

    /// Seconds before an outbound query is abandoned
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_url() -> String {
    "https://1.1.1.1/dns-query".to_string()
}

fn default_query_timeout() -> u64 {
    10
}
