mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version, about = "Check registration form values", long_about = None)]
struct Cli {
    /// Config file (defaults to ./regform.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log validation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a registration and report each field
    Check {
        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            first_name,
            last_name,
            email,
            password,
        } => {
            let values = commands::check::Values {
                first_name,
                last_name,
                email,
                password,
            };
            commands::check::execute(&values, config)
        }
        Commands::Config => {
            commands::config::execute(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
