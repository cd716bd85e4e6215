//! Standalone mock server binary.

use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = std::env::var("REQRES_ECHO_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("REQRES_ECHO_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .map_err(|e| format!("REQRES_ECHO_PORT must be a valid port number: {e}"))?;

    let addr = listen_addr(&host, port)?;

    tracing::info!("Starting reqres echo server v{}", env!("CARGO_PKG_VERSION"));

    reqres_echo::run_server(addr).await?;

    Ok(())
}

/// Builds the listen address from a bare IP, so `::1` works as well as `127.0.0.1`.
fn listen_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let ip: IpAddr = host
        .trim_matches(['[', ']'])
        .parse()
        .map_err(|e| format!("REQRES_ECHO_HOST must be an IP address: {e}"))?;
    Ok(SocketAddr::new(ip, port))
}
