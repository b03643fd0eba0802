//! Payroll ledger CLI
//!
//! Prints the payroll report for a roster file, or for the built-in demo
//! roster when no file is given.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll_ledger::config::RosterLoader;
use payroll_ledger::demo::demo_registry;
use payroll_ledger::error::PayrollResult;
use payroll_ledger::registry::PayrollRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed-width text report
    Text,
    /// JSON payroll summary
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "payroll-ledger")]
#[command(about = "Print a payroll report for a roster of workers and managers")]
struct Cli {
    /// Path to a YAML or JSON roster (defaults to the built-in demo roster)
    roster: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> PayrollResult<()> {
    let registry = match &cli.roster {
        Some(path) => RosterLoader::load(path)?,
        None => {
            info!("No roster given, using demo roster");
            demo_registry()?
        }
    };

    match cli.format {
        OutputFormat::Text => registry.display_all(),
        OutputFormat::Json => print_summary(&registry),
    }
}

fn print_summary(registry: &PayrollRegistry) -> PayrollResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    registry.write_summary_json(&mut handle)
}
