//! moodspend-core: extraction, classification, dialogue, and insight logic
//! for the conversational purchase logger.

pub mod classify;
pub mod dialogue;
pub mod extract;
pub mod insight;
pub mod ledger;
pub mod record;

pub use classify::{classify_category, classify_sentiment};
pub use dialogue::{DialogueSession, DialogueState, Reply};
pub use extract::{Extracted, Extractor, parse_amount};
pub use insight::{Recommendation, recommend};
pub use ledger::{Ledger, StorageError};
pub use record::{Category, PurchaseRecord, Sentiment, TIMESTAMP_FORMAT};
