//! Multi-turn purchase dialogue.
//!
//! One session per user. Idle until a "bought a ..." sentence arrives, then
//! walks the missing pieces (amount, then feeling) one question at a time
//! and commits the finished record to the ledger.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::classify::{classify_category, classify_sentiment};
use crate::extract::{Extractor, parse_amount};
use crate::ledger::{Ledger, StorageError};
use crate::record::PurchaseRecord;

/// Where a session currently is in the exchange.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogueState {
    #[default]
    Idle,
    AwaitingAmount {
        item: String,
    },
    AwaitingFeeling {
        item: String,
        amount: f64,
    },
}

/// What the controller tells the user after a turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    AskAmount { item: String },
    AskFeeling { item: String },
    Committed(PurchaseRecord),
    CouldNotParse,
    InvalidAmount,
    Abandoned,
    NothingPending,
}

impl Reply {
    /// User-facing prompt line, shared by every frontend.
    pub fn message(&self) -> String {
        match self {
            Reply::AskAmount { item } => format!("How much did you spend on the {item}?"),
            Reply::AskFeeling { item } => {
                format!("How did buying the {item} make you feel?")
            }
            Reply::Committed(record) => format!(
                "Logged: {} for ${:.2} ({}, felt {}).",
                record.item, record.amount, record.category, record.sentiment
            ),
            Reply::CouldNotParse => {
                "I didn't understand. Try: 'I bought a lamp for 30'".to_string()
            }
            Reply::InvalidAmount => {
                "Please give a non-negative amount, like 12.50 or 2k.".to_string()
            }
            Reply::Abandoned => "Okay, never mind that one.".to_string(),
            Reply::NothingPending => "Nothing in progress.".to_string(),
        }
    }
}

pub struct DialogueSession {
    extractor: Extractor,
    state: DialogueState,
}

impl DialogueSession {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            extractor: Extractor::new()?,
            state: DialogueState::Idle,
        })
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    /// Feed one line of user input through the state machine.
    ///
    /// Parse and validation problems come back as replies and leave the
    /// state untouched. A storage failure during commit propagates and
    /// keeps the session in `AwaitingFeeling` with item and amount intact,
    /// so answering the feeling prompt again retries the append.
    pub fn handle(
        &mut self,
        input: &str,
        ledger: &dyn Ledger,
        now: NaiveDateTime,
    ) -> Result<Reply, StorageError> {
        match &self.state {
            DialogueState::Idle => {
                let found = self.extractor.extract(input);
                match (found.item, found.amount) {
                    (None, _) => Ok(Reply::CouldNotParse),
                    (Some(item), Some(amount)) => {
                        debug!(%item, amount, "purchase extracted");
                        let reply = Reply::AskFeeling { item: item.clone() };
                        self.state = DialogueState::AwaitingFeeling { item, amount };
                        Ok(reply)
                    }
                    (Some(item), None) => {
                        debug!(%item, "purchase extracted without amount");
                        let reply = Reply::AskAmount { item: item.clone() };
                        self.state = DialogueState::AwaitingAmount { item };
                        Ok(reply)
                    }
                }
            }

            DialogueState::AwaitingAmount { item } => match parse_amount(input) {
                Some(amount) => {
                    let item = item.clone();
                    let reply = Reply::AskFeeling { item: item.clone() };
                    self.state = DialogueState::AwaitingFeeling { item, amount };
                    Ok(reply)
                }
                None => Ok(Reply::InvalidAmount),
            },

            DialogueState::AwaitingFeeling { item, amount } => {
                let record = PurchaseRecord::new(
                    now,
                    item.clone(),
                    *amount,
                    classify_sentiment(input),
                    classify_category(item),
                );
                let stored = ledger.append(record)?;
                debug!(id = %stored.id(), "purchase committed");
                self.state = DialogueState::Idle;
                Ok(Reply::Committed(stored))
            }
        }
    }

    /// Drop any pending purchase and return to Idle.
    pub fn abandon(&mut self) -> Reply {
        match self.state {
            DialogueState::Idle => Reply::NothingPending,
            _ => {
                self.state = DialogueState::Idle;
                Reply::Abandoned
            }
        }
    }
}
