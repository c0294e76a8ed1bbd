// vl-convert-service - HTTP front end for Vega-Lite/Vega chart conversion

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use tokio::signal;
use tracing::info;
use vl_convert_service::cli::Args;
use vl_convert_service::config::AppConfig;
use vl_convert_service::convert::{register_font_directory, ConvertService};
use vl_convert_service::server::create_router;
use vl_convert_service::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration, with the positional port taking precedence
    let mut config = AppConfig::load()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting vl-convert-service v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Register fonts with the renderer, once, before serving begins
    register_font_directory(Path::new(&config.converter.font_dir))?;

    // Phase 4: Build the converter and HTTP router
    let converter = ConvertService::new(&config.converter);
    let app = create_router(&config, converter);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("vl-convert-service running on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
