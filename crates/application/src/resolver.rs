use tracing::debug;
use wildcard_dns_domain::{parse_embedded_ipv4, Answer, Question, QueryType, RecordType, Zone};

/// Outcome of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Ordered answer records; may be empty only in theory (every handled
    /// branch emits at least one record).
    Records(Vec<Answer>),
    /// Query type not served, or name outside the zone. The wire side
    /// reports this as a LOG diagnostic, not an error.
    Unknown,
}

/// Pure resolution engine: maps a query against the zone snapshot to a set
/// of answer records. Never touches the channel, never fails.
#[derive(Debug, Clone)]
pub struct Resolver {
    zone: Zone,
}

impl Resolver {
    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn resolve(&self, question: &Question) -> Reply {
        if !question.qname.ends_with(&self.zone.domain) {
            return Reply::Unknown;
        }

        match question.qtype {
            QueryType::SOA => Reply::Records(vec![self.answer(
                &question.qname,
                RecordType::SOA,
                self.zone.soa.clone(),
            )]),
            QueryType::A | QueryType::CNAME | QueryType::TXT | QueryType::ANY => {
                Reply::Records(self.resolve_name(&question.qname))
            }
            QueryType::Other(_) => Reply::Unknown,
        }
    }

    /// Exact-match priority: apex, name server, CNAME, TXT, then the
    /// embedded-address subdomain case.
    fn resolve_name(&self, qname: &str) -> Vec<Answer> {
        if qname == self.zone.domain {
            return self.apex_answers(qname);
        }
        if let Some(ip) = self.zone.name_servers.get(qname) {
            debug!(qname, ip = %ip, "name server match");
            return vec![self.answer(qname, RecordType::A, ip.to_string())];
        }
        if let Some(target) = self.zone.cnames.get(qname) {
            debug!(qname, target, "static CNAME match");
            return vec![self.answer(qname, RecordType::CNAME, target.clone())];
        }
        if let Some(text) = self.zone.txt.get(qname) {
            debug!(qname, "static TXT match");
            return vec![self.answer(qname, RecordType::TXT, text.clone())];
        }
        self.resolve_subdomain(qname)
    }

    /// Parses an address out of the subdomain labels. A subdomain carrying
    /// no valid embedded address is answered apex-style under its own name;
    /// the backend claims authority over everything below the zone.
    fn resolve_subdomain(&self, qname: &str) -> Vec<Answer> {
        let prefix = qname.strip_suffix(&self.zone.domain).unwrap_or(qname);
        let subdomain = prefix.strip_suffix('.').unwrap_or(prefix);

        match parse_embedded_ipv4(subdomain) {
            Some(addr) => {
                debug!(qname, addr = %addr, "embedded address");
                let mut answers = vec![self.answer(qname, RecordType::A, addr.to_string())];
                answers.extend(self.ns_answers(qname));
                answers
            }
            None => {
                debug!(qname, subdomain, "no embedded address, answering apex-style");
                self.apex_answers(qname)
            }
        }
    }

    /// The authoritative address followed by the NS set, emitted under
    /// `name` (the apex itself, or a fallback subdomain).
    fn apex_answers(&self, name: &str) -> Vec<Answer> {
        let mut answers = vec![self.answer(
            name,
            RecordType::A,
            self.zone.authoritative_addr.to_string(),
        )];
        answers.extend(self.ns_answers(name));
        answers
    }

    fn ns_answers(&self, name: &str) -> impl Iterator<Item = Answer> + '_ {
        let name = name.to_string();
        self.zone.name_servers.keys().map(move |ns| {
            Answer::new(
                name.as_str(),
                RecordType::NS,
                self.zone.ttl,
                self.zone.record_id.as_str(),
                ns.as_str(),
            )
        })
    }

    fn answer(&self, qname: &str, record_type: RecordType, content: String) -> Answer {
        Answer::new(
            qname,
            record_type,
            self.zone.ttl,
            self.zone.record_id.as_str(),
            content,
        )
    }
}
