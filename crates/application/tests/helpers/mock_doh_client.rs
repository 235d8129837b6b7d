#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::DohClient;
use ferrous_lookup_domain::{DohAnswer, DohResponse, DomainError, LookupQuery, RecordType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory resolver keyed by domain; unknown domains get an empty answer.
#[derive(Clone)]
pub struct MockDohClient {
    responses: Arc<RwLock<HashMap<String, Result<DohResponse, DomainError>>>>,
    queried: Arc<RwLock<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDohClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            queried: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_response(&self, domain: &str, response: DohResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Ok(response));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.queried.read().unwrap().clone()
    }
}

#[async_trait]
impl DohClient for MockDohClient {
    async fn query(&self, query: &LookupQuery) -> Result<DohResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queried.write().unwrap().push(query.domain.to_string());

        self.responses
            .read()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .unwrap_or_else(|| Ok(DohResponse::default()))
    }

    fn endpoint(&self) -> &str {
        "mock://resolver"
    }
}

pub fn a_records(addresses: &[&str]) -> DohResponse {
    DohResponse::new(
        addresses
            .iter()
            .map(|ip| DohAnswer::new(RecordType::A, *ip))
            .collect(),
    )
}
