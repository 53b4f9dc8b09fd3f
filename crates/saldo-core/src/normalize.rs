//! Transaction title normalization
//!
//! Bank statement titles carry ledger noise (payment-received and refund
//! rows) and installment suffixes like "- Parcela 2/10". Normalization drops
//! the noise rows, strips the suffix, and lower-cases/trims what remains so
//! titles can be compared by exact string equality.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::StatementRow;

/// Raw titles that are ledger noise rather than spending
pub const FORBIDDEN_TITLES: &[&str] = &["Pagamento recebido", "Estorno"];

/// Installment suffix: a dash, the word Parcela, and N/M integers.
/// Case-insensitive so normalization is idempotent on its own output.
fn installment_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s*-\s*parcela\s*\d+/\d+").unwrap())
}

/// Whether a raw title is a non-expense ledger row that should be dropped
pub fn is_ledger_noise(raw_title: &str) -> bool {
    FORBIDDEN_TITLES.contains(&raw_title)
}

/// Normalize a single title: strip installment suffixes, lower-case, trim
pub fn normalize_title(raw: &str) -> String {
    let stripped = installment_suffix().replace_all(raw, "");
    stripped.to_lowercase().trim().to_string()
}

/// Normalize a parsed statement batch.
///
/// Drops ledger-noise rows, rewrites surviving titles, and leaves dates,
/// amounts, and row order untouched. Idempotent.
pub fn normalize_rows(rows: Vec<StatementRow>) -> Vec<StatementRow> {
    rows.into_iter()
        .filter(|row| !is_ledger_noise(&row.title))
        .map(|row| StatementRow {
            title: normalize_title(&row.title),
            ..row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(title: &str) -> StatementRow {
        StatementRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            title: title.to_string(),
            amount: 42.0,
        }
    }

    #[test]
    fn test_installment_suffix_stripped() {
        assert_eq!(normalize_title("Compra - Parcela 2/10"), "compra");
        assert_eq!(normalize_title("Loja X - Parcela 11/12"), "loja x");
        // Suffix in the middle of a title is removed wherever it appears
        assert_eq!(normalize_title("Loja - Parcela 1/3 Online"), "loja online");
    }

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize_title("  UBER Trip  "), "uber trip");
    }

    #[test]
    fn test_forbidden_titles_dropped() {
        let rows = vec![row("Pagamento recebido"), row("Uber"), row("Estorno")];
        let normalized = normalize_rows(rows);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].title, "uber");
    }

    #[test]
    fn test_order_dates_amounts_preserved() {
        let rows = vec![
            StatementRow {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                title: "Mercado - Parcela 1/2".to_string(),
                amount: 120.5,
            },
            StatementRow {
                date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                title: "Farmacia".to_string(),
                amount: -15.0,
            },
        ];
        let normalized = normalize_rows(rows);
        assert_eq!(normalized[0].title, "mercado");
        assert_eq!(normalized[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(normalized[0].amount, 120.5);
        assert_eq!(normalized[1].title, "farmacia");
        assert_eq!(normalized[1].amount, -15.0);
    }

    #[test]
    fn test_normalization_idempotent() {
        let rows = vec![
            row("Compra - Parcela 2/10"),
            row("  UBER Trip  "),
            row("restaurante"),
        ];
        let once = normalize_rows(rows.clone());
        let twice = normalize_rows(once.clone());
        assert_eq!(once, twice);
    }
}
