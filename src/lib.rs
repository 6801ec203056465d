pub mod cli;
pub mod core;
pub mod store;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::store::disk::FjallStore;

pub enum AppCommand {
    Add(cli::add::AddArgs),
    List,
    Remove { name: String },
    Schedule,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Liability tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let data_path = config.default_data_path()?;
    let store = FjallStore::open(&data_path)?;

    match command {
        AppCommand::Add(args) => cli::add::run(&store, &config.account, args).await,
        AppCommand::List => cli::list::run(&store, &config.account).await,
        AppCommand::Remove { name } => cli::remove::run(&store, &config.account, &name).await,
        AppCommand::Schedule => cli::schedule::run(&store, &config.account).await,
    }
}
