//! Keyword classifiers for feeling descriptions and item names.
//!
//! Both scans are lowercase substring checks. Order matters twice: the
//! negative word set is checked before the positive one, and the category
//! table is scanned top to bottom, so the first matching category wins for
//! items that hit several keyword lists.

use crate::record::{Category, Sentiment};

const NEGATIVE_WORDS: &[&str] = &[
    "regret", "sad", "angry", "anxious", "bad", "guilty", "meh", "tired", "horrible", "awful",
    "waste", "terrible",
];

const POSITIVE_WORDS: &[&str] = &[
    "happy", "excited", "relieved", "good", "satisfied", "proud", "great", "amazing",
];

/// The canonical (category, keywords) table. Multi-word keywords are
/// matched as plain substrings ("dog food" matches "premium dog food").
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Games,
        &["playstation", "xbox", "game", "controller", "nintendo", "console"],
    ),
    (
        Category::Furniture,
        &["couch", "table", "chair", "sofa", "desk", "bed"],
    ),
    (
        Category::Electronics,
        &["phone", "laptop", "tv", "tablet", "monitor", "camera", "headphones"],
    ),
    (
        Category::Food,
        &["pizza", "coffee", "burger", "groceries", "sandwich", "lunch", "dinner", "meal"],
    ),
    (
        Category::Clothing,
        &["shirt", "jeans", "jacket", "shoes", "sneakers", "dress", "pants"],
    ),
    (
        Category::Transportation,
        &["bus", "train", "uber", "taxi", "flight", "ticket"],
    ),
    (
        Category::Entertainment,
        &["movie", "netflix", "concert", "theater"],
    ),
    (
        Category::Education,
        &["course", "book", "notebook", "class", "lesson", "pen", "pencil"],
    ),
    (
        Category::Beauty,
        &["makeup", "lipstick", "skincare", "cream", "lotion"],
    ),
    (
        Category::Health,
        &["medicine", "vitamin", "hospital", "pharmacy"],
    ),
    (
        Category::PetCare,
        &["dog food", "cat litter", "pet toy", "vet"],
    ),
    (
        Category::HomeSupplies,
        &["toilet paper", "detergent", "cleaner", "mop", "broom"],
    ),
];

/// Map a free-text feeling description to a sentiment label.
/// Total: anything without a cue word is neutral. An input containing both
/// negative and positive cues resolves negative.
pub fn classify_sentiment(text: &str) -> Sentiment {
    let text = text.to_lowercase();
    if NEGATIVE_WORDS.iter().any(|w| text.contains(w)) {
        return Sentiment::Negative;
    }
    if POSITIVE_WORDS.iter().any(|w| text.contains(w)) {
        return Sentiment::Positive;
    }
    Sentiment::Neutral
}

/// Map an item name to a category via the keyword table.
/// Total: unmatched items fall back to `Category::Other`.
pub fn classify_category(item: &str) -> Category {
    let item = item.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| item.contains(kw)) {
            return *category;
        }
    }
    Category::Other
}
