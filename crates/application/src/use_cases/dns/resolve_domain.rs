use crate::ports::DohClient;
use ferrous_lookup_domain::{DomainError, LookupQuery, LookupResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

pub struct ResolveDomainUseCase {
    client: Arc<dyn DohClient>,
}

impl ResolveDomainUseCase {
    pub fn new(client: Arc<dyn DohClient>) -> Self {
        Self { client }
    }

    /// Resolves `query` to its first IPv4 address.
    ///
    /// `started` is taken by the caller when the inbound request arrived, so
    /// the reported lookup time covers the whole request.
    #[instrument(skip(self, started), fields(domain = %query.domain))]
    pub async fn execute(
        &self,
        query: &LookupQuery,
        started: Instant,
    ) -> Result<LookupResult, DomainError> {
        let response = self.client.query(query).await?;

        debug!(
            resolver = self.client.endpoint(),
            answers = response.answer.len(),
            "Resolver answered"
        );

        let ip_address = response
            .first_ipv4()
            .ok_or_else(|| DomainError::NoAddressFound(query.domain.to_string()))?;

        Ok(LookupResult::new(
            Arc::clone(&query.domain),
            ip_address,
            started.elapsed(),
        ))
    }
}
