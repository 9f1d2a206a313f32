//! End-to-end exchanges: dialogue controller committing to a real CSV
//! ledger on disk, then the insight engine reading it back.

use chrono::{NaiveDate, NaiveDateTime};
use moodspend_core::{
    Category, DialogueSession, DialogueState, Ledger, Reply, Sentiment, recommend,
};
use moodspend_store::CsvLedger;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 5)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_phone_with_amount_then_guilty_feeling() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = CsvLedger::open(dir.path().join("log.csv")).unwrap();
    let mut session = DialogueSession::new().unwrap();

    let reply = session
        .handle("I bought a phone for 900", &ledger, at(9, 0))
        .unwrap();
    assert_eq!(
        reply,
        Reply::AskFeeling {
            item: "phone".to_string()
        }
    );

    let reply = session.handle("I felt so guilty", &ledger, at(9, 0)).unwrap();
    let record = match reply {
        Reply::Committed(record) => record,
        other => panic!("expected commit, got {:?}", other),
    };
    assert_eq!(record.item, "phone");
    assert_eq!(record.amount, 900.0);
    assert_eq!(record.sentiment, Sentiment::Negative);
    assert_eq!(record.category, Category::Electronics);
    assert_eq!(*session.state(), DialogueState::Idle);

    let listed = ledger.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], record);
}

#[test]
fn test_lamp_without_amount_walks_both_questions() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = CsvLedger::open(dir.path().join("log.csv")).unwrap();
    let mut session = DialogueSession::new().unwrap();

    let reply = session.handle("I bought a lamp", &ledger, at(10, 0)).unwrap();
    assert_eq!(
        reply,
        Reply::AskAmount {
            item: "lamp".to_string()
        }
    );

    let reply = session.handle("30", &ledger, at(10, 0)).unwrap();
    assert_eq!(
        reply,
        Reply::AskFeeling {
            item: "lamp".to_string()
        }
    );

    let reply = session.handle("happy", &ledger, at(10, 0)).unwrap();
    let record = match reply {
        Reply::Committed(record) => record,
        other => panic!("expected commit, got {:?}", other),
    };
    assert_eq!(record.amount, 30.0);
    assert_eq!(record.sentiment, Sentiment::Positive);
    // "lamp" matches no keyword list
    assert_eq!(record.category, Category::Other);
}

#[test]
fn test_recommend_over_logged_purchases() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = CsvLedger::open(dir.path().join("log.csv")).unwrap();
    let mut session = DialogueSession::new().unwrap();

    let exchanges = [
        ("I bought a phone for 900", "so guilty about it", at(9, 0)),
        ("I bought a pizza for 20", "it was great", at(12, 0)),
        ("I bought a burger for 15", "regret", at(13, 0)),
        ("I bought a lamp for 30", "meh", at(14, 0)),
    ];
    for (sentence, feeling, when) in exchanges {
        session.handle(sentence, &ledger, when).unwrap();
        let reply = session.handle(feeling, &ledger, when).unwrap();
        assert!(matches!(reply, Reply::Committed(_)));
    }

    let records = ledger.list().unwrap();
    assert_eq!(records.len(), 4);
    // Newest first
    assert_eq!(records[0].item, "lamp");
    assert_eq!(records[3].item, "phone");

    // electronics: 900 x 1 negative = 900; food: 35 x 1 negative = 35;
    // the regretted lamp is "other" and never qualifies
    let top = recommend(&records).unwrap();
    assert_eq!(top.category, Category::Electronics);
    assert_eq!(top.negative_count, 1);
    assert_eq!(top.total_spend, 900.0);
}
