use std::io;

use clap::Parser;
use tracing::info;
use wildcard_dns_application::{PipeSession, Resolver};
use wildcard_dns_domain::{CliOverrides, Zone};

mod bootstrap;

#[derive(Parser)]
#[command(name = "wildcard-dns-backend")]
#[command(version)]
#[command(about = "Wildcard DNS pipe backend - resolves IPv4 addresses embedded in subdomains")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let zone = Zone::from_config(&config)?;
    info!(
        domain = %zone.domain,
        ttl = zone.ttl,
        record_id = %zone.record_id,
        soa = %zone.soa,
        address = %zone.authoritative_addr,
        name_servers = ?zone.name_servers,
        cnames = zone.cnames.len(),
        txt = zone.txt.len(),
        "zone configured"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = PipeSession::new(stdin.lock(), stdout.lock(), Resolver::new(zone));
    session.run()?;

    info!("shutting down");
    Ok(())
}
