//! Spending insight: the single "cut back on X" recommendation.

use std::collections::BTreeMap;

use crate::record::{Category, PurchaseRecord};

/// Per-category aggregate behind a cut-back recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub category: Category,
    pub total_spend: f64,
    pub negative_count: usize,
}

impl Recommendation {
    pub fn message(&self) -> String {
        format!(
            "Consider cutting back on {}. You spent ${:.2} and felt bad about it {} time(s).",
            self.category, self.total_spend, self.negative_count
        )
    }

    // Costly and regretted both push a category up.
    fn score(&self) -> f64 {
        self.total_spend * self.negative_count as f64
    }
}

/// Pick the category most worth cutting back on.
///
/// Categories are ranked by total spend times negative-record count;
/// `other` and categories without a single negative record never qualify.
/// `None` means there is nothing to flag. Ties go to the bigger spend,
/// then to the earlier category in declaration order.
pub fn recommend(records: &[PurchaseRecord]) -> Option<Recommendation> {
    let mut groups: BTreeMap<Category, Recommendation> = BTreeMap::new();
    for record in records {
        if record.category == Category::Other {
            continue;
        }
        let entry = groups.entry(record.category).or_insert(Recommendation {
            category: record.category,
            total_spend: 0.0,
            negative_count: 0,
        });
        entry.total_spend += record.amount;
        if record.is_negative() {
            entry.negative_count += 1;
        }
    }

    let mut best: Option<Recommendation> = None;
    for candidate in groups.into_values() {
        if candidate.negative_count == 0 {
            continue;
        }
        best = match best {
            None => Some(candidate),
            Some(current) => {
                let better = candidate.score() > current.score()
                    || (candidate.score() == current.score()
                        && candidate.total_spend > current.total_spend);
                if better { Some(candidate) } else { Some(current) }
            }
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sentiment;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(12, 0, second)
            .unwrap()
    }

    fn rec(category: Category, amount: f64, sentiment: Sentiment, second: u32) -> PurchaseRecord {
        PurchaseRecord::new(at(second), "x", amount, sentiment, category)
    }

    #[test]
    fn test_no_negative_records_means_nothing_to_flag() {
        let records = vec![
            rec(Category::Food, 50.0, Sentiment::Positive, 0),
            rec(Category::Games, 70.0, Sentiment::Neutral, 1),
        ];
        assert_eq!(recommend(&records), None);
        assert_eq!(recommend(&[]), None);
    }

    #[test]
    fn test_ranks_by_spend_times_negative_count() {
        // electronics: 250 * 1 = 250; food: 100 * 3 = 300, so food wins
        // despite electronics having the bigger spend
        let records = vec![
            rec(Category::Electronics, 250.0, Sentiment::Negative, 0),
            rec(Category::Food, 40.0, Sentiment::Negative, 1),
            rec(Category::Food, 35.0, Sentiment::Negative, 2),
            rec(Category::Food, 25.0, Sentiment::Negative, 3),
        ];
        let top = recommend(&records).unwrap();
        assert_eq!(top.category, Category::Food);
        assert_eq!(top.total_spend, 100.0);
        assert_eq!(top.negative_count, 3);
    }

    #[test]
    fn test_other_is_excluded() {
        let records = vec![rec(Category::Other, 500.0, Sentiment::Negative, 0)];
        assert_eq!(recommend(&records), None);
    }

    #[test]
    fn test_non_negative_spend_still_counts_toward_total() {
        // One regretted coffee plus plenty of happy food spending: the
        // category total includes all of it
        let records = vec![
            rec(Category::Food, 5.0, Sentiment::Negative, 0),
            rec(Category::Food, 95.0, Sentiment::Positive, 1),
        ];
        let top = recommend(&records).unwrap();
        assert_eq!(top.total_spend, 100.0);
        assert_eq!(top.negative_count, 1);
    }

    #[test]
    fn test_message_reports_detail() {
        let top = Recommendation {
            category: Category::Games,
            total_spend: 120.0,
            negative_count: 2,
        };
        assert_eq!(
            top.message(),
            "Consider cutting back on games. You spent $120.00 and felt bad about it 2 time(s)."
        );
    }
}
