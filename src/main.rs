use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use expense_cli::cli::{run_command, Commands};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Command-line personal expense tracker",
    long_about = "Records dated expenses in a flat file, summarizes spending by \
                  category and month, and warns when a month goes over its budget."
)]
struct Cli {
    /// Directory holding expenses.txt and budgets.txt (default: current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log storage activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let paths = ExpensePaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(&paths, &settings);
    debug!(
        data_dir = %paths.base_dir().display(),
        expenses = %storage.expenses.path().display(),
        budgets = %storage.budgets.path().display(),
        "using data files"
    );

    run_command(&storage, &settings, command)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // An unknown command name falls back to the help text
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            return match Cli::command().print_help() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(e) => e.exit(),
    };
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
