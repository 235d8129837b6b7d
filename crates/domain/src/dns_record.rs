pub mod answer;
pub mod record_type;

pub use answer::{DohAnswer, DohResponse};
pub use record_type::RecordType;
