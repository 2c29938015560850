//! Demo server mounting both health endpoints over a sample registry.

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use health_endpoint::{basic_handler, json_handler, CheckRegistry, CheckState};

#[derive(Parser)]
#[command(name = "health-demo")]
#[command(about = "Serve plain-text and JSON health endpoints", long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let started = Instant::now();
    let mut registry = CheckRegistry::new();
    registry.register("heartbeat", || Ok(CheckState::from("ok")));
    registry.register("uptime_secs", move || {
        Ok(CheckState::Number(started.elapsed().as_secs_f64()))
    });
    let reporter = Arc::new(registry);

    let app = Router::new()
        .route("/healthz", basic_handler(reporter.clone()))
        .route("/health", json_handler(reporter));

    let listener = TcpListener::bind(cli.bind).await?;
    tracing::info!(address = %cli.bind, "health demo listening");
    axum::serve(listener, app).await?;

    Ok(())
}
