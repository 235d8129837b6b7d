//! HTTPS transport for JSON DNS queries (`application/dns-json`)
//!
//! Sends the domain as the `name` query parameter of a GET request and reads
//! the resolver's JSON answer. Only the `Answer` section is decoded.
//!
//! Wire format (HTTP):
//! ```text
//! GET /dns-query?name=example.com HTTP/2
//! Accept: application/dns-json
//!
//! {"Status":0,"Answer":[{"name":"example.com","type":1,"TTL":300,"data":"93.184.216.34"}]}
//! ```

use async_trait::async_trait;
use ferrous_lookup_application::ports::DohClient;
use ferrous_lookup_domain::{DohResponse, DomainError, LookupQuery};
use std::time::Duration;
use tracing::debug;

/// Media type requesting JSON-formatted DNS answers
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// DNS-over-HTTPS JSON client with a pooled connection per resolver host.
pub struct HttpsJsonClient {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpsJsonClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                DomainError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            url,
            timeout,
            client,
        })
    }
}

#[async_trait]
impl DohClient for HttpsJsonClient {
    async fn query(&self, query: &LookupQuery) -> Result<DohResponse, DomainError> {
        debug!(url = %self.url, domain = %query.domain, "Sending DoH JSON query");

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .get(&self.url)
                .query(&[("name", &*query.domain)])
                .header("accept", DNS_JSON_CONTENT_TYPE)
                .send(),
        )
        .await
        .map_err(|_| DomainError::QueryTimeout)?
        .map_err(|e| {
            DomainError::Transport(format!("DoH request to {} failed: {}", self.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %self.url, status = status.as_u16(), "DoH server rejected query");
            return Err(DomainError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::Transport(format!(
                    "Failed to read DoH response from {}: {}",
                    self.url, e
                ))
            })?;

        debug!(url = %self.url, response_len = body.len(), "DoH response received");

        serde_json::from_slice(&body).map_err(|e| {
            DomainError::InvalidDnsResponse(format!(
                "Malformed JSON from {}: {}",
                self.url, e
            ))
        })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
