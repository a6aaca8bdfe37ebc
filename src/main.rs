use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use wellness_api::config::ServerConfig;
use wellness_api::core::WellnessStorage;
use wellness_api::observability::init_tracing;
use wellness_api::server::ServerBuilder;
use wellness_api::storage::{InMemoryStorage, seed_demo_data};

/// REST backend for the wellness tracker
#[derive(Parser, Debug)]
#[command(name = "wellness-api", version)]
#[command(about = "REST backend for a personal wellness tracker")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "WELLNESS_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Start with empty storage
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?.with_bind_address_override(cli.bind);
    init_tracing(&config.log_filter);

    tracing::info!(
        bind_address = %config.bind_address,
        cors_permissive = config.cors.permissive,
        seed_demo_data = config.seed_demo_data && !cli.no_seed,
        "Configuration loaded"
    );

    let storage: Arc<dyn WellnessStorage> = Arc::new(InMemoryStorage::new());
    if config.seed_demo_data && !cli.no_seed {
        seed_demo_data(storage.as_ref()).await?;
    }

    ServerBuilder::new()
        .with_shared_storage(storage)
        .with_cors(config.cors)
        .serve(&config.bind_address)
        .await
}
