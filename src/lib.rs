pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::entry::Category;
use crate::core::ledger::Ledger;
use crate::store::json::JsonFileStore;
use anyhow::Result;
use tracing::{debug, info};

/// A discrete action against the ledger. Both the one-shot subcommands
/// and the interactive menu dispatch through the same core paths.
#[derive(Debug)]
pub enum AppCommand {
    Add {
        category: Category,
        description: String,
        price: f64,
        currency: String,
    },
    Summary {
        currency: String,
    },
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

fn open_ledger(config: &AppConfig) -> Result<Ledger> {
    let data_path = config.data_file_path()?;
    let store = JsonFileStore::new(data_path);
    Ledger::load(config.rate_table(), Box::new(store))
}

/// Executes a single command against the persisted ledger.
pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut ledger = open_ledger(&config)?;

    match command {
        AppCommand::Add {
            category,
            description,
            price,
            currency,
        } => {
            ledger.add_entry(category, &description, price, &currency)?;
            println!("Added {category} entry: {description} ({price} {currency})");
            Ok(())
        }
        AppCommand::Summary { currency } => cli::summary::run(&ledger, &currency),
    }
}

/// Loads the ledger once and runs the interactive menu over it.
pub fn run_interactive(config_path: Option<&str>) -> Result<()> {
    info!("Job ledger starting...");

    let config = load_config(config_path)?;
    let mut ledger = open_ledger(&config)?;

    cli::menu::run(&mut ledger)
}
