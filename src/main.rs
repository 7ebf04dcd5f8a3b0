use anyhow::Result;
use clap::{Parser, Subcommand};
use jobledger::core::entry::Category;
use jobledger::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for jobledger::AppCommand {
    fn from(cmd: Commands) -> jobledger::AppCommand {
        match cmd {
            Commands::Add {
                category,
                description,
                price,
                currency,
            } => jobledger::AppCommand::Add {
                category,
                description,
                price,
                currency,
            },
            Commands::Summary { currency } => jobledger::AppCommand::Summary { currency },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record a ledger entry without entering the menu
    Add {
        /// Entry category
        #[arg(value_enum)]
        category: Category,
        /// What the money was for
        #[arg(short, long)]
        description: String,
        /// Non-negative price in the given currency
        #[arg(short, long)]
        price: f64,
        /// Currency code, e.g. USD
        #[arg(long)]
        currency: String,
    },
    /// Display per-category totals in a target currency
    Summary {
        /// Currency to convert all totals into
        #[arg(long)]
        currency: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => jobledger::cli::setup::setup(),
        Some(cmd) => jobledger::run_command(cmd.into(), cli.config_path.as_deref()),
        None => jobledger::run_interactive(cli.config_path.as_deref()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
