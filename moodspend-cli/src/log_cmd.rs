//! One-shot `log` flow: the seed sentence comes from argv, follow-up
//! answers (amount, feeling) are read from stdin.

use anyhow::{Result, bail};
use chrono::Local;
use moodspend_core::{DialogueSession, Ledger, Reply};
use std::io::{self, Write};

fn prompt(label: &str) -> Result<String> {
    print!("{} ", label);
    io::stdout().flush().ok();
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        bail!("stdin closed before the purchase was complete");
    }
    Ok(line.trim().to_string())
}

pub fn run(ledger: &dyn Ledger, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        println!("Tell me about a purchase, e.g.: moodspend log \"I bought a phone for 900\"");
        return Ok(());
    }

    let mut session = DialogueSession::new()?;
    let mut input = text.to_string();

    loop {
        match session.handle(&input, ledger, Local::now().naive_local()) {
            Ok(reply @ (Reply::Committed(_) | Reply::CouldNotParse)) => {
                println!("{}", reply.message());
                return Ok(());
            }
            Ok(reply) => {
                input = prompt(&reply.message())?;
            }
            Err(err) => {
                // Item and amount stay pending; answering again retries the append
                println!("Could not save: {err}");
                input = prompt("Tell me the feeling again to retry (Ctrl-C gives up):")?;
            }
        }
    }
}
