use clap::Parser;
use captive_dns_domain::{CliOverrides, Config, ReplyCode};
use std::net::{IpAddr, Ipv4Addr};
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "captive-dns")]
#[command(version)]
#[command(about = "Captive DNS - answers one domain (or every domain) with a single IPv4 address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<IpAddr>,

    /// Domain to answer, or "*" for every name
    #[arg(long)]
    domain: Option<String>,

    /// IPv4 address returned in answers
    #[arg(long)]
    address: Option<Ipv4Addr>,

    /// Answer TTL in seconds
    #[arg(long)]
    ttl: Option<u32>,

    /// Reply code for unanswered queries (nxdomain, refused, servfail, ...)
    #[arg(long)]
    error_code: Option<ReplyCode>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        domain: cli.domain,
        resolved_address: cli.address,
        ttl: cli.ttl,
        error_reply_code: cli.error_code,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Captive DNS v{}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.clone().or_else(Config::get_config_path);
    info!(
        config_file = config_path.as_deref().unwrap_or("<defaults>"),
        "Configuration loaded"
    );

    let stats = server::run_dns_responder(&config).await?;

    info!(total = stats.total(), "Server shutdown complete");
    Ok(())
}
