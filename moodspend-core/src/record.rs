//! Purchase record types shared across the workspace.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of persisted timestamps; the formatted timestamp is the record id.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A committed purchase, exactly as stored in the ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    /// When the purchase was logged, second resolution; doubles as the id
    #[serde(rename = "timestamp")]
    pub occurred_at: NaiveDateTime,
    /// What was bought, lowercased as extracted
    pub item: String,
    /// Non-negative spend amount
    pub amount: f64,
    /// Mood label resolved from the feeling description
    pub sentiment: Sentiment,
    /// Keyword-derived item category
    pub category: Category,
}

impl PurchaseRecord {
    pub fn new(
        occurred_at: NaiveDateTime,
        item: impl Into<String>,
        amount: f64,
        sentiment: Sentiment,
        category: Category,
    ) -> Self {
        Self {
            occurred_at,
            item: item.into(),
            amount,
            sentiment,
            category,
        }
    }

    /// Record id: the timestamp formatted with [`TIMESTAMP_FORMAT`]
    pub fn id(&self) -> String {
        self.occurred_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Returns true if the purchase was regretted
    pub fn is_negative(&self) -> bool {
        self.sentiment == Sentiment::Negative
    }
}

/// Coarse three-way mood label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item categories matched deterministically from keyword lists.
/// Declaration order is the classifier's tie-break order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "games")]
    Games,
    #[serde(rename = "furniture")]
    Furniture,
    #[serde(rename = "electronics")]
    Electronics,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "clothing")]
    Clothing,
    #[serde(rename = "transportation")]
    Transportation,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "beauty")]
    Beauty,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "pet care")]
    PetCare,
    #[serde(rename = "home supplies")]
    HomeSupplies,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Games => "games",
            Category::Furniture => "furniture",
            Category::Electronics => "electronics",
            Category::Food => "food",
            Category::Clothing => "clothing",
            Category::Transportation => "transportation",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
            Category::Beauty => "beauty",
            Category::Health => "health",
            Category::PetCare => "pet care",
            Category::HomeSupplies => "home supplies",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
