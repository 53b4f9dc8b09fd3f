//! Integration tests for saldo-core
//!
//! These tests exercise the full ingest → classify → teach → report workflow.

use saldo_core::{
    db::Database,
    ingest::ingest,
    report::{totals_by_category, totals_by_month},
    UNCATEGORIZED,
};

/// Statement with an installment purchase, ledger noise, and a credit
fn statement_csv() -> &'static str {
    "date,title,amount\n\
     2024-01-15,Uber,23.40\n\
     2024-01-15,Pagamento recebido,-500.00\n\
     2024-01-20,Mercado Central - Parcela 1/3,120.00\n\
     2024-01-31,UBER,18.10\n\
     2024-02-01,Estorno,-42.00\n\
     2024-02-02,Padaria,9.90"
}

#[test]
fn test_full_ingest_workflow() {
    let db = Database::in_memory().expect("Failed to create test database");

    let summary = ingest(&db, statement_csv().as_bytes()).expect("Failed to ingest");
    assert_eq!(summary.parsed, 6);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.inserted, 4);

    // Titles land normalized and everything starts uncategorized
    let stored = db.list_transactions(None, None).unwrap();
    assert_eq!(stored.len(), 4);
    assert!(stored.iter().all(|tx| tx.category == UNCATEGORIZED));
    assert!(stored.iter().any(|tx| tx.title == "mercado central"));
    assert_eq!(stored.iter().filter(|tx| tx.title == "uber").count(), 2);
}

#[test]
fn test_reingest_creates_duplicates() {
    let db = Database::in_memory().unwrap();

    ingest(&db, statement_csv().as_bytes()).unwrap();
    ingest(&db, statement_csv().as_bytes()).unwrap();

    // Re-uploading the same file is not deduplicated
    assert_eq!(db.count_transactions().unwrap(), 8);
    let stored = db.list_transactions(None, None).unwrap();
    assert_eq!(stored.iter().filter(|tx| tx.title == "uber").count(), 4);
}

#[test]
fn test_malformed_statement_writes_nothing() {
    let db = Database::in_memory().unwrap();

    let csv = "date,title,amount\n2024-01-15,Uber,23.40\n2024-01-16,Mercado,not-a-number";
    assert!(ingest(&db, csv.as_bytes()).is_err());

    // The whole batch is rejected, including the parseable row
    assert_eq!(db.count_transactions().unwrap(), 0);
}

#[test]
fn test_teach_then_ingest_classifies_new_rows() {
    let db = Database::in_memory().unwrap();
    db.teach_keyword("Transport", "uber").unwrap();

    ingest(&db, statement_csv().as_bytes()).unwrap();

    let stored = db.list_transactions(None, None).unwrap();
    for tx in &stored {
        if tx.title == "uber" {
            assert_eq!(tx.category, "Transport");
        } else {
            assert_eq!(tx.category, UNCATEGORIZED);
        }
    }
}

#[test]
fn test_teach_after_ingest_rewrites_history() {
    let db = Database::in_memory().unwrap();
    ingest(&db, statement_csv().as_bytes()).unwrap();

    let result = db.teach_keyword("Transport", "uber").unwrap().unwrap();
    assert_eq!(result.reclassified, 2);

    let stored = db.list_transactions(None, None).unwrap();
    let transport: Vec<_> = stored.iter().filter(|tx| tx.category == "Transport").collect();
    assert_eq!(transport.len(), 2);
    assert!(transport.iter().all(|tx| tx.title == "uber"));
}

#[test]
fn test_reports_over_snapshot() {
    let db = Database::in_memory().unwrap();
    ingest(&db, statement_csv().as_bytes()).unwrap();
    db.teach_keyword("Transport", "uber").unwrap();

    let snapshot = db.list_transactions(None, None).unwrap();

    let by_category = totals_by_category(&snapshot);
    assert_eq!(by_category[0].category, UNCATEGORIZED);
    assert!((by_category[0].total - 129.90).abs() < 1e-9);
    assert_eq!(by_category[1].category, "Transport");
    assert!((by_category[1].total - 41.50).abs() < 1e-9);

    let by_month = totals_by_month(&snapshot);
    let months: Vec<&str> = by_month.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2024-01", "2024-02"]);
    assert!((by_month[0].total - 161.50).abs() < 1e-9);
    assert!((by_month[1].total - 9.90).abs() < 1e-9);
}
