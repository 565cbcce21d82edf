mod commands;
mod input;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;

use commands::payment::PaymentArgs;
use commands::process::ProcessArgs;

/// Mortgage record validation and payment calculations
#[derive(Parser)]
#[command(
    name = "pixell",
    version,
    about = "Validate PiXELL River mortgage records and calculate payments",
    long_about = "A CLI for validating mortgage input records and computing periodic \
                  payments with decimal precision. Processes comma-separated record \
                  files in batch, reporting each record's payment schedule or the \
                  validation error it triggered."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a batch of mortgage records and print their payments
    Process(ProcessArgs),
    /// Calculate the payment for a single mortgage
    Payment(PaymentArgs),
    /// Print version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Process(args) => commands::process::run_process(args),
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Version => {
            println!("pixell {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
