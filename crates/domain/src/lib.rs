//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::LookupQuery;
pub use dns_record::{DohAnswer, DohResponse, RecordType};
pub use errors::DomainError;
pub use lookup::LookupResult;
