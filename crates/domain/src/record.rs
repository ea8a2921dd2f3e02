use std::fmt;

/// Record types this backend can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    TXT,
    SOA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::SOA => "SOA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One answer record. Class is always IN and is added by the wire encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub qname: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub record_id: String,
    pub content: String,
}

impl Answer {
    pub fn new(
        qname: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        record_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            qname: qname.into(),
            record_type,
            ttl,
            record_id: record_id.into(),
            content: content.into(),
        }
    }
}
