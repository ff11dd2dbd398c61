use anyhow::Result;
use axum::Router;
use bridge_core::{EngineConfig, Strategy};
use clap::Parser;
use server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Catalog file (.json/.jsonl) or directory
    #[arg(long, default_value = "./data/catalog.jsonl")]
    catalog: String,
    /// JSON engine config file
    #[arg(long)]
    config: Option<String>,
    /// Matching strategy: vector_space or keyword
    #[arg(long, env = "BRIDGE_STRATEGY")]
    strategy: Option<Strategy>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    let app: Router = build_app(&args.catalog, &config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, strategy = %config.strategy, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
