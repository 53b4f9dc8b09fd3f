//! Statement CSV ingestion pipeline
//!
//! Parses uploaded statement rows, normalizes titles, assigns initial
//! categories from the current keyword index, and persists the batch. A
//! statement needs `date`, `title`, and `amount` columns (matched
//! case-/whitespace-insensitively); extra columns are ignored. Any
//! unparseable row rejects the whole batch before anything is written.

use std::io::Read;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{IngestSummary, NewTransaction, StatementRow};
use crate::normalize::normalize_rows;

/// Parse statement CSV data into raw rows
pub fn parse_statement<R: Read>(reader: R) -> Result<Vec<StatementRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_col = find_column(&headers, "date")?;
    let title_col = find_column(&headers, "title")?;
    let amount_col = find_column(&headers, "amount")?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let date_str = record
            .get(date_col)
            .ok_or_else(|| Error::MalformedInput("Missing date".into()))?;
        let date = parse_date(date_str)?;

        let title = record
            .get(title_col)
            .ok_or_else(|| Error::MalformedInput("Missing title".into()))?
            .to_string();

        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::MalformedInput("Missing amount".into()))?;
        let amount = parse_amount(amount_str)?;

        rows.push(StatementRow {
            date,
            title,
            amount,
        });
    }

    debug!("Parsed {} statement rows", rows.len());
    Ok(rows)
}

/// Run the full pipeline: parse, normalize, classify, persist
///
/// The surviving rows are inserted as one batch; a parse failure rejects the
/// whole upload and nothing is written. Re-ingesting the same statement
/// creates duplicate rows (there is no dedup key).
pub fn ingest<R: Read>(db: &Database, reader: R) -> Result<IngestSummary> {
    let rows = parse_statement(reader)?;
    let parsed = rows.len();

    let normalized = normalize_rows(rows);
    let skipped = parsed - normalized.len();

    let index = db.keyword_index()?;
    let batch: Vec<NewTransaction> = normalized
        .into_iter()
        .map(|row| NewTransaction {
            date: row.date,
            category_id: index.classify(&row.title),
            title: row.title,
            amount: row.amount,
        })
        .collect();

    let inserted = db.insert_transactions(&batch)?;
    Ok(IngestSummary {
        parsed,
        skipped,
        inserted,
    })
}

/// Resolve a column index by case-/whitespace-insensitive header name
fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::MalformedInput(format!("Missing '{}' column", name)))
}

/// Parse a date string in various common formats
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    // Try common date formats
    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
        "%d/%m/%Y", // 15/01/2024 (European)
        "%m-%d-%Y", // 01-15-2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::MalformedInput(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace("R$", "")
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::MalformedInput(format!("Unable to parse amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("01/15/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("R$ 99.90").unwrap(), 99.90);
        assert_eq!(parse_amount("-123.45").unwrap(), -123.45);
        assert_eq!(parse_amount("(100.00)").unwrap(), -100.00);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_statement() {
        let csv = "date,title,amount\n2024-01-15,Uber,23.40\n2024-01-16,Mercado,120.00";
        let rows = parse_statement(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Uber");
        assert_eq!(rows[0].amount, 23.40);
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }

    #[test]
    fn test_header_names_tolerant() {
        let csv = " Date ,TITLE, Amount \n2024-01-15,Uber,23.40";
        let rows = parse_statement(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Uber");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "date,title,amount,balance,memo\n2024-01-15,Uber,23.40,100.00,trip";
        let rows = parse_statement(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 23.40);
    }

    #[test]
    fn test_missing_column_rejects_batch() {
        let csv = "date,description,amount\n2024-01-15,Uber,23.40";
        let err = parse_statement(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_bad_row_rejects_batch() {
        let csv = "date,title,amount\n2024-01-15,Uber,23.40\nnot-a-date,Mercado,1.00";
        let err = parse_statement(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_bad_amount_rejects_batch() {
        let csv = "date,title,amount\n2024-01-15,Uber,oops";
        let err = parse_statement(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
