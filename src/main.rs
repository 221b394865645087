use anyhow::{Result, bail};
use clap::Parser;
use tourism_explorer::cli::Cli;
use tourism_explorer::{DataFiles, DataStore, ExplorerConfig, logging, web};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ExplorerConfig::load_from_path(cli.config)?;
    logging::init(&config.logging)?;

    let files = DataFiles::new(&config.data.directory);
    let reload_on_change = config.data.reload_on_change;
    let store = match tokio::task::spawn_blocking(move || DataStore::open(files, reload_on_change)).await? {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load datasets: {}", e);
            bail!(e.user_message());
        }
    };
    info!(
        "Serving {} from {}",
        store.snapshot().summary(),
        store.files().directory().display()
    );

    web::run(config, store).await
}
