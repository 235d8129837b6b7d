use ferrous_lookup_application::use_cases::ResolveDomainUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}
