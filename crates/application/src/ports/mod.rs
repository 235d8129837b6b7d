mod doh_client;

pub use doh_client::DohClient;

// Re-export for convenience
pub use ferrous_lookup_domain::{DohResponse, LookupQuery};
