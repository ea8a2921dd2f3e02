use std::fmt;

/// Query type as received from the pipe channel.
///
/// The wire side must answer every qtype, so conversion from text is total:
/// anything outside the handled set lands in `Other` with the raw text kept
/// for the `LOG` diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryType {
    A,
    CNAME,
    TXT,
    SOA,
    ANY,
    Other(String),
}

impl QueryType {
    pub fn as_str(&self) -> &str {
        match self {
            QueryType::A => "A",
            QueryType::CNAME => "CNAME",
            QueryType::TXT => "TXT",
            QueryType::SOA => "SOA",
            QueryType::ANY => "ANY",
            QueryType::Other(raw) => raw,
        }
    }
}

impl From<&str> for QueryType {
    fn from(s: &str) -> Self {
        match s {
            "A" => QueryType::A,
            "CNAME" => QueryType::CNAME,
            "TXT" => QueryType::TXT,
            "SOA" => QueryType::SOA,
            "ANY" => QueryType::ANY,
            other => QueryType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One decoded query: name (lowercased on receipt) and type.
#[derive(Debug, Clone)]
pub struct Question {
    pub qname: String,
    pub qtype: QueryType,
}

impl Question {
    pub fn new(qname: impl Into<String>, qtype: QueryType) -> Self {
        Self {
            qname: qname.into(),
            qtype,
        }
    }
}
