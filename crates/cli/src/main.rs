use clap::Parser;
use ferrous_lookup_api::AppState;
use ferrous_lookup_domain::CliOverrides;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - resolve a domain to its IPv4 address over DNS-over-HTTPS")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DoH JSON resolver endpoint
    #[arg(short = 'r', long, value_name = "URL")]
    resolver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        resolver_url: cli.resolver.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    info!("Starting Ferrous Lookup v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;

    let app_state = AppState {
        resolve_domain: dns_services.resolve_domain,
    };

    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
