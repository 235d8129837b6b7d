pub mod https;

pub use https::{HttpsJsonClient, DNS_JSON_CONTENT_TYPE};
