/// Resource record types that appear in the numeric `type` field of a DoH JSON answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    CNAME,
    AAAA,
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::CNAME => 5,
            RecordType::AAAA => 28,
        }
    }
}
