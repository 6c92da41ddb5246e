mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::ShortfallArgs;

/// Retirement shortfall analytics
#[derive(Parser)]
#[command(
    name = "rsc",
    version,
    about = "Retirement shortfall analytics",
    long_about = "A CLI for retirement-savings shortfall projections with decimal \
                  precision. Prices an inflation-adjusted income goal as a level \
                  annuity, grows current savings and escalating contributions to \
                  retirement, and reports the gap plus the monthly contribution \
                  that closes it."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the retirement savings shortfall
    Shortfall(ShortfallArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Shortfall(args) => commands::run_shortfall(args),
        Commands::Version => {
            println!("rsc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
