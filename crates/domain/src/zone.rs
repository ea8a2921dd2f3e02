use std::collections::{BTreeMap, HashMap};
use std::net::Ipv4Addr;

use crate::config::{Config, ConfigError};

/// Immutable zone snapshot the resolver answers from.
///
/// Built once at startup and never mutated; every query is resolved
/// statelessly against it. Name servers live in a `BTreeMap` so NS records
/// are always emitted in the same order.
#[derive(Debug, Clone)]
pub struct Zone {
    /// Authoritative suffix all served names must end with, lowercase.
    pub domain: String,
    pub ttl: u32,
    /// Opaque identity token included in every answer line.
    pub record_id: String,
    /// Literal SOA record content.
    pub soa: String,
    /// Address answered at the zone apex and for subdomains that fail
    /// embedded-address validation.
    pub authoritative_addr: Ipv4Addr,
    pub name_servers: BTreeMap<String, Ipv4Addr>,
    pub cnames: HashMap<String, String>,
    pub txt: HashMap<String, String>,
}

impl Zone {
    /// Builds the snapshot from a parsed config file: lowercases and
    /// domain-qualifies nameserver and CNAME keys, assembles the SOA text
    /// and validates every address.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let domain = config.main.domain.to_lowercase();

        let authoritative_addr: Ipv4Addr = config.main.ipaddress.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "invalid IPv4 address for main.ipaddress: {}",
                config.main.ipaddress
            ))
        })?;

        let mut name_servers = BTreeMap::new();
        for (name, addr) in &config.nameservers {
            let ip: Ipv4Addr = addr.parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "invalid IPv4 address for nameserver {}: {}",
                    name, addr
                ))
            })?;
            name_servers.insert(qualify(name, &domain), ip);
        }

        let cnames = config
            .cnames
            .iter()
            .map(|(name, target)| (qualify(name, &domain), target.clone()))
            .collect();

        // TXT keys are matched verbatim, never domain-qualified
        let txt = config
            .txt
            .iter()
            .map(|(name, text)| (name.to_lowercase(), text.clone()))
            .collect();

        Ok(Self {
            domain,
            ttl: config.main.ttl,
            record_id: config.soa.id.clone(),
            soa: format!(
                "{} {} {}",
                config.soa.ns, config.soa.hostmaster, config.soa.id
            ),
            authoritative_addr,
            name_servers,
            cnames,
            txt,
        })
    }
}

fn qualify(name: &str, domain: &str) -> String {
    let name = name.to_lowercase();
    if name.ends_with(domain) {
        name
    } else {
        format!("{}.{}", name, domain)
    }
}
