//! VoyageLux Agent Studio gateway binary.

use std::net::SocketAddr;

use voyagelux_gateway::{init_tracing, router, GatewayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = GatewayConfig::load()?;
    init_tracing(&config.log_filter);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        app = %config.app_name,
        core = voyagelux_core::version(),
        "listening on http://{}",
        addr
    );

    axum::serve(
        listener,
        router().into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
