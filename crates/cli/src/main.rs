use clap::Parser;
use scitra_dns_domain::CliOverrides;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "scitra-dns")]
#[command(version)]
#[command(about = "DNS front end that maps SCION hosts to synthesized IPv6 addresses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream DNS server (ip:port), may be repeated
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstream: Vec<String>,

    /// IPv6 /8 prefix for translated addresses
    #[arg(short = 'p', long)]
    prefix: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        upstream_servers: cli.upstream.clone(),
        prefix: cli.prefix.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting scitra-dns v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = bootstrap::config_source(cli.config.as_deref()) {
        info!(path = %path, "Configuration loaded");
    }

    let dns_services = di::DnsServices::new(&config)?;

    let dns_addr: SocketAddr = config.server.socket_addr()?;
    let tcp_idle_timeout = Duration::from_secs(config.server.tcp_idle_timeout);

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_services.handler, tcp_idle_timeout) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
