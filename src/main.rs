use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use ltrack::core::log::init_logging;

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

impl From<Commands> for ltrack::AppCommand {
    fn from(cmd: Commands) -> ltrack::AppCommand {
        match cmd {
            Commands::Add(args) => ltrack::AppCommand::Add(args),
            Commands::List => ltrack::AppCommand::List,
            Commands::Remove { name } => ltrack::AppCommand::Remove { name },
            Commands::Schedule => ltrack::AppCommand::Schedule,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Add or update a liability
    Add(ltrack::cli::add::AddArgs),
    /// List recorded liabilities
    List,
    /// Remove a liability by name
    Remove { name: String },
    /// Display the monthly expense schedule
    Schedule,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => ltrack::cli::setup::setup(),
        Some(cmd) => ltrack::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
