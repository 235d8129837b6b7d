use async_trait::async_trait;
use ferrous_lookup_domain::{DohResponse, DomainError, LookupQuery};

/// Outbound DNS-over-HTTPS transport.
///
/// Implementations send exactly one request per call and never retry.
/// A non-success HTTP status from the resolver must surface as
/// [`DomainError::UpstreamStatus`] without the body being parsed.
#[async_trait]
pub trait DohClient: Send + Sync {
    async fn query(&self, query: &LookupQuery) -> Result<DohResponse, DomainError>;

    /// Resolver endpoint this client talks to.
    fn endpoint(&self) -> &str;
}
