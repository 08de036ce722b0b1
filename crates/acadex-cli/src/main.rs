//! Acadex CLI — Local operator interface for the credential portal store.
//!
//! Subcommands: init, submit, dashboard, show.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Acadex — academic credential portal.
#[derive(Parser, Debug)]
#[command(name = "acadex", version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a default portal configuration file.
    Init(commands::init::InitArgs),
    /// Submit a credential for a holder.
    Submit(commands::submit::SubmitArgs),
    /// Show a user's dashboard: profile plus aggregated credentials.
    Dashboard(commands::dashboard::DashboardArgs),
    /// Show a single credential record by id.
    Show(commands::show::ShowArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    match &cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Submit(args) => commands::submit::run(args).await,
        Commands::Dashboard(args) => commands::dashboard::run(args).await,
        Commands::Show(args) => commands::show::run(args).await,
    }
}
