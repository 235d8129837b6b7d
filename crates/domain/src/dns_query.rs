use crate::DomainError;
use std::sync::Arc;

/// Domain name a caller asked to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub domain: Arc<str>,
}

impl LookupQuery {
    /// Builds a query from the raw `domain` parameter; absent or empty is rejected.
    pub fn parse(domain: Option<&str>) -> Result<Self, DomainError> {
        match domain {
            Some(domain) if !domain.is_empty() => Ok(Self::new(domain)),
            _ => Err(DomainError::MissingDomain),
        }
    }

    pub fn new(domain: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}
