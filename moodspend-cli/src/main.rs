use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moodspend_core::{Ledger, recommend};
use moodspend_store::CsvLedger;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod chat;
mod log_cmd;
mod state;

#[derive(Parser, Debug)]
#[command(name = "moodspend", version, about = "Conversational purchase logger")]
struct Cli {
    /// Ledger CSV path (default: ~/.moodspend/purchase_log.csv)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log a purchase from one sentence, answering follow-ups on stdin
    Log {
        /// E.g. "I bought a phone for 900"
        text: Vec<String>,
    },

    /// Print all purchases, newest first
    List,

    /// Delete a purchase by id (its timestamp)
    Delete { id: String },

    /// Suggest one category to cut back on
    Recommend,

    /// Interactive chat session
    Chat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let path = match cli.ledger {
        Some(path) => path,
        None => state::default_ledger_path()?,
    };
    let ledger = CsvLedger::open(&path)
        .with_context(|| format!("opening ledger {}", path.display()))?;

    match cli.command {
        Command::Log { text } => {
            log_cmd::run(&ledger, &text.join(" "))?;
        }

        Command::List => {
            print_feed(&ledger)?;
        }

        Command::Delete { id } => {
            ledger.delete(&id)?;
            println!("Deleted {} (if it existed).", id);
        }

        Command::Recommend => {
            let records = ledger.list()?;
            match recommend(&records) {
                Some(top) => println!("{}", top.message()),
                None => println!("Nothing clearly negative to cut back on!"),
            }
        }

        Command::Chat => {
            chat::run_chat(&ledger)?;
        }
    }

    Ok(())
}

fn print_feed(ledger: &CsvLedger) -> Result<()> {
    let records = ledger.list()?;
    if records.is_empty() {
        println!("No purchases logged yet.");
        return Ok(());
    }
    for r in &records {
        println!(
            "{} | {} | ${:.2} | {} | {}",
            r.id(),
            r.item,
            r.amount,
            r.sentiment,
            r.category
        );
    }
    Ok(())
}
