use ferrous_lookup_application::ports::DohClient;
use ferrous_lookup_application::use_cases::ResolveDomainUseCase;
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::dns::HttpsJsonClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client: Arc<dyn DohClient> = Arc::new(HttpsJsonClient::new(
            config.resolver.url.clone(),
            Duration::from_secs(config.resolver.query_timeout),
        )?);

        info!(
            resolver = client.endpoint(),
            timeout_secs = config.resolver.query_timeout,
            "DoH resolver configured"
        );

        Ok(Self {
            resolve_domain: Arc::new(ResolveDomainUseCase::new(client)),
        })
    }
}
