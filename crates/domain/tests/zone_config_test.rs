use wildcard_dns_domain::{CliOverrides, Config, ConfigError, Zone};

fn parse(source: &str) -> Config {
    toml::from_str(source).unwrap()
}

fn sample() -> Config {
    parse(
        r#"
        [main]
        domain = "example.com"
        ipaddress = "127.0.0.1"
        ttl = 200

        [soa]
        ns = "ns1.example.com"
        hostmaster = "hostmaster.example.com"
        id = "55"

        [nameservers]
        ns1 = "10.0.0.2"
        "ns2.example.com" = "10.0.0.3"

        [cnames]
        www = "example.com"

        [txt]
        "txt.example.com" = "v=spf1 -all"
    "#,
    )
}

#[test]
fn test_zone_snapshot_fields() {
    let zone = Zone::from_config(&sample()).unwrap();
    assert_eq!(zone.domain, "example.com");
    assert_eq!(zone.ttl, 200);
    assert_eq!(zone.record_id, "55");
    assert_eq!(zone.soa, "ns1.example.com hostmaster.example.com 55");
    assert_eq!(zone.authoritative_addr.to_string(), "127.0.0.1");
}

#[test]
fn test_bare_nameserver_labels_qualified() {
    let zone = Zone::from_config(&sample()).unwrap();
    assert_eq!(
        zone.name_servers.get("ns1.example.com").map(|ip| ip.to_string()),
        Some("10.0.0.2".to_string())
    );
    assert_eq!(
        zone.name_servers.get("ns2.example.com").map(|ip| ip.to_string()),
        Some("10.0.0.3".to_string())
    );
    assert!(!zone.name_servers.contains_key("ns1"));
}

#[test]
fn test_cname_keys_qualified_txt_keys_verbatim() {
    let zone = Zone::from_config(&sample()).unwrap();
    assert_eq!(
        zone.cnames.get("www.example.com"),
        Some(&"example.com".to_string())
    );
    assert_eq!(
        zone.txt.get("txt.example.com"),
        Some(&"v=spf1 -all".to_string())
    );
}

#[test]
fn test_domain_and_keys_lowercased() {
    let config = parse(
        r#"
        [main]
        domain = "Example.COM"
        ipaddress = "127.0.0.1"

        [soa]
        ns = "ns1.example.com"
        hostmaster = "hostmaster.example.com"
        id = "1"

        [nameservers]
        NS1 = "10.0.0.2"
    "#,
    );
    let zone = Zone::from_config(&config).unwrap();
    assert_eq!(zone.domain, "example.com");
    assert!(zone.name_servers.contains_key("ns1.example.com"));
}

#[test]
fn test_ttl_defaults_to_300() {
    let config = parse(
        r#"
        [main]
        domain = "example.com"
        ipaddress = "127.0.0.1"

        [soa]
        ns = "ns1.example.com"
        hostmaster = "hostmaster.example.com"
        id = "1"

        [nameservers]
        ns1 = "10.0.0.2"
    "#,
    );
    assert_eq!(config.main.ttl, 300);
}

#[test]
fn test_logging_level_defaults_to_info() {
    assert_eq!(sample().logging.level, "info");
}

#[test]
fn test_load_applies_log_level_override() {
    let path = std::env::temp_dir().join("wildcard-dns-override-test.toml");
    std::fs::write(
        &path,
        r#"
        [main]
        domain = "example.com"
        ipaddress = "127.0.0.1"

        [soa]
        ns = "ns1.example.com"
        hostmaster = "hostmaster.example.com"
        id = "1"

        [nameservers]
        ns1 = "10.0.0.2"
    "#,
    )
    .unwrap();

    let config = Config::load(
        path.to_str(),
        CliOverrides {
            log_level: Some("debug".to_string()),
        },
    )
    .unwrap();
    assert_eq!(config.logging.level, "debug");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_authoritative_address() {
    let mut config = sample();
    config.main.ipaddress = "not-an-ip".to_string();
    assert!(matches!(
        Zone::from_config(&config),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_invalid_nameserver_address() {
    let mut config = sample();
    config
        .nameservers
        .insert("ns3".to_string(), "10.0.0.999".to_string());
    assert!(matches!(
        Zone::from_config(&config),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_validate_rejects_empty_nameservers() {
    let mut config = sample();
    config.nameservers.clear();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_validate_rejects_empty_domain() {
    let mut config = sample();
    config.main.domain.clear();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_load_missing_explicit_path_fails() {
    let err = Config::load(
        Some("/nonexistent/wildcard-dns.toml"),
        CliOverrides::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(_, _)));
}
