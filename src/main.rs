use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use mimalloc::MiMalloc;

use campusd::params::Configurables;
use campusd::repo::{Catalog, FacadeCatalog, InMemoryCatalog, Repository};
use campusd::server::{self, AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Read-access daemon for the campus catalog.
#[derive(Debug, Parser)]
#[command(name = "campusd", version, about)]
struct Args {
    /// Address to bind, overrides CAMPUSD_BIND_ADDR
    #[arg(long)]
    bind: Option<String>,

    /// Postgres connection string, overrides DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,

    /// Run on the in-memory engine instead of Postgres
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut config = Configurables::from_env()?;

    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    let catalog: Arc<dyn Catalog> = if args.in_memory {
        info!("catalog engine: in-memory");
        Arc::new(InMemoryCatalog::new())
    } else {
        info!("catalog engine: postgres");
        let repository =
            Repository::connect(&config.database_url, config.db_max_connections).await?;
        repository.init().await?;
        Arc::new(repository)
    };

    let facade = FacadeCatalog::new(catalog, config.policies);
    server::serve(&config.bind_addr, AppState::new(facade)).await?;

    Ok(())
}
