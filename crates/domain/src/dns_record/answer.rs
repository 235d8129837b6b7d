use super::RecordType;
use serde::{Deserialize, Deserializer};

/// One entry of the `Answer` section of a DoH JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DohAnswer {
    #[serde(rename = "type")]
    pub record_type: u16,

    pub data: String,
}

impl DohAnswer {
    pub fn new(record_type: RecordType, data: impl Into<String>) -> Self {
        Self {
            record_type: record_type.to_u16(),
            data: data.into(),
        }
    }

    pub fn is(&self, record_type: RecordType) -> bool {
        self.record_type == record_type.to_u16()
    }
}

/// Body returned by a resolver speaking `application/dns-json`.
///
/// Only the `Answer` section is read; a missing or `null` section is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DohResponse {
    #[serde(rename = "Answer", default, deserialize_with = "null_as_empty")]
    pub answer: Vec<DohAnswer>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DohAnswer>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<DohAnswer>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl DohResponse {
    pub fn new(answer: Vec<DohAnswer>) -> Self {
        Self { answer }
    }

    /// Data of the first A record, in upstream order.
    pub fn first_ipv4(&self) -> Option<&str> {
        self.answer
            .iter()
            .find(|ans| ans.is(RecordType::A))
            .map(|ans| ans.data.as_str())
    }
}
