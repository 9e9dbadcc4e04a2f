//! heritage-check CLI
//!
//! Checks a Magic Online style decklist against the commander heritage
//! card pool.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use heritage_check::HeritageChecker;

#[derive(Parser)]
#[command(name = "heritage-check", version)]
#[command(
    about = "Take a decklist in Magic Online format and check if it respects commander heritage format",
    long_about = None
)]
struct Cli {
    /// The file containing the deck list
    #[arg(long)]
    deck: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut checker = HeritageChecker::builder().build();
    match checker.run(&cli.deck) {
        Ok(violations) => {
            for violation in violations {
                println!("{}", violation);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
