//! smogcast-server: HTTP service around the smogcast training pipeline.
//!
//! Exposes three endpoints:
//!
//! - `GET /health` - Health check, including whether a model is live
//! - `POST /api/upload` - Train on a CSV body and publish the new model
//! - `POST /api/predict` - Predict PM2.5 for one query
//!
//! The server starts without a model; uploading a dataset trains and
//! publishes one atomically, and predictions keep hitting the previously
//! published model until the swap completes.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod api;
mod ingest;

use api::{create_router, AppState};

/// PM2.5 prediction service: upload a pollution CSV, then query the model.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "SMOGCAST_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "SMOGCAST_PORT", default_value = "3000")]
    port: u16,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let app = create_router(AppState::new());
    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
