//! Aggregate summaries over a transaction snapshot
//!
//! Pure functions over transactions already joined with their category
//! names. Sums are plain f64 algebra: credits (negative amounts) sum
//! algebraically, never absolute-valued.

use std::collections::{BTreeMap, HashMap};

use crate::models::{CategoryTotal, MonthlyTotal, TransactionRecord};

/// Sum amounts per category, sorted descending by total
///
/// Categories with no transactions in the snapshot are omitted, not
/// zero-filled. Ties break on category name for a stable order.
pub fn totals_by_category(transactions: &[TransactionRecord]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for tx in transactions {
        *sums.entry(tx.category.as_str()).or_insert(0.0) += tx.amount;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}

/// Sum amounts per calendar month, ascending chronological order
///
/// Each transaction's date is truncated to its containing month
/// (`YYYY-MM`).
pub fn totals_by_month(transactions: &[TransactionRecord]) -> Vec<MonthlyTotal> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for tx in transactions {
        let period = tx.date.format("%Y-%m").to_string();
        *sums.entry(period).or_insert(0.0) += tx.amount;
    }

    sums.into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn tx(date: (i32, u32, u32), category: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            id: 0,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            title: "t".to_string(),
            amount,
            category_id: 0,
            category: category.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_by_category_sorted_descending() {
        let txs = vec![
            tx((2024, 1, 1), "A", 100.0),
            tx((2024, 1, 2), "A", 50.0),
            tx((2024, 1, 3), "B", -20.0),
        ];
        let totals = totals_by_category(&txs);
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "A".to_string(),
                    total: 150.0
                },
                CategoryTotal {
                    category: "B".to_string(),
                    total: -20.0
                },
            ]
        );
    }

    #[test]
    fn test_totals_by_category_omits_absent_categories() {
        let totals = totals_by_category(&[tx((2024, 1, 1), "A", 10.0)]);
        assert_eq!(totals.len(), 1);
    }

    #[test]
    fn test_credits_sum_algebraically() {
        let txs = vec![tx((2024, 1, 1), "A", 100.0), tx((2024, 1, 2), "A", -30.0)];
        let totals = totals_by_category(&txs);
        assert_eq!(totals[0].total, 70.0);
    }

    #[test]
    fn test_monthly_bucketing() {
        let txs = vec![
            tx((2024, 2, 1), "A", 5.0),
            tx((2024, 1, 15), "A", 10.0),
            tx((2024, 1, 31), "B", 20.0),
        ];
        let totals = totals_by_month(&txs);
        assert_eq!(
            totals,
            vec![
                MonthlyTotal {
                    month: "2024-01".to_string(),
                    total: 30.0
                },
                MonthlyTotal {
                    month: "2024-02".to_string(),
                    total: 5.0
                },
            ]
        );
    }

    #[test]
    fn test_months_ascending_across_years() {
        let txs = vec![
            tx((2024, 1, 1), "A", 1.0),
            tx((2023, 12, 31), "A", 2.0),
            tx((2024, 3, 1), "A", 3.0),
        ];
        let months: Vec<String> = totals_by_month(&txs).into_iter().map(|m| m.month).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);
    }
}
