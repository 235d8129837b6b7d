use ferrous_lookup_domain::LookupResult;
use serde::Serialize;

/// Query string of `GET /dns`. When `domain` repeats, the first value wins.
#[derive(Debug, Default)]
pub struct LookupParams {
    pub domain: Option<String>,
}

impl From<Vec<(String, String)>> for LookupParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let domain = pairs
            .into_iter()
            .find(|(key, _)| key == "domain")
            .map(|(_, value)| value);
        Self { domain }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub domain: String,
    pub ip_address: String,
    pub lookup_time: String,
}

impl From<LookupResult> for LookupResponse {
    fn from(result: LookupResult) -> Self {
        let lookup_time = result.lookup_time_display();
        Self {
            domain: result.domain.to_string(),
            ip_address: result.ip_address,
            lookup_time,
        }
    }
}
