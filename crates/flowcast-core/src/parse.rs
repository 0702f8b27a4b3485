//! Delimited-text parser for transaction ledgers

use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TransactionRecord;

/// Parse delimited ledger text into transaction records
///
/// The first row must be a header containing `date`, `category`, and
/// `amount` columns in any order (names matched case-insensitively);
/// a missing column fails the whole parse with [`Error::Format`].
///
/// Per-row problems never abort the run: rows with fewer than three
/// fields or an unparseable amount are skipped. Dates are not validated
/// here; the aggregator checks them when bucketing by month.
///
/// Header-only input yields an empty Vec. The caller decides whether
/// zero records is fatal.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let (date_idx, category_idx, amount_idx) =
        match (find("date"), find("category"), find("amount")) {
            (Some(d), Some(c), Some(a)) => (d, c, a),
            _ => {
                return Err(Error::Format(
                    "required columns: date, category, amount".to_string(),
                ))
            }
        };

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let row = result?;

        if row.len() < 3 {
            skipped += 1;
            continue;
        }

        let (date, category, amount_str) = match (
            row.get(date_idx),
            row.get(category_idx),
            row.get(amount_idx),
        ) {
            (Some(d), Some(c), Some(a)) => (d, c, a),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let amount = match parse_amount(amount_str) {
            Ok(a) => a,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        records.push(TransactionRecord {
            date: date.to_string(),
            category: category.to_string(),
            amount,
        });
    }

    debug!("Parsed {} records ({} rows skipped)", records.len(), skipped);
    Ok(records)
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::InvalidData(format!("Unable to parse amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("-123.45").unwrap(), -123.45);
        assert_eq!(parse_amount("(100.00)").unwrap(), -100.00);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_basic_ledger() {
        let csv = "date,category,amount\n\
                   2024-01-15,Food,100\n\
                   2024-01-20,Income,2000";

        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2024-01-15");
        assert_eq!(records[0].category, "Food");
        assert_eq!(records[0].amount, 100.0);
        assert_eq!(records[1].category, "Income");
        assert_eq!(records[1].amount, 2000.0);
    }

    #[test]
    fn test_header_order_and_case_are_flexible() {
        let csv = "Amount,DATE,Category\n\
                   42.50,2024-03-01,Dining";

        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "2024-03-01");
        assert_eq!(records[0].category, "Dining");
        assert_eq!(records[0].amount, 42.50);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "date,category\n\
                   2024-01-15,Food";

        let err = parse_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "date,category,amount\n\
                   2024-01-15,Food\n\
                   2024-01-16,Food,75";

        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 75.0);
    }

    #[test]
    fn test_bad_amount_rows_are_skipped() {
        let csv = "date,category,amount\n\
                   2024-01-15,Food,not-a-number\n\
                   2024-01-16,Food,75";

        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 75.0);
    }

    #[test]
    fn test_header_only_input_is_empty_not_an_error() {
        let records = parse_records("date,category,amount\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_dates_are_not_validated_at_parse_time() {
        let csv = "date,category,amount\n\
                   garbage,Food,10";

        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "garbage");
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let csv = "date,category,amount\n\
                   2024-02-01,B,2\n\
                   2024-01-01,A,1\n\
                   2024-03-01,C,3";

        let records = parse_records(csv.as_bytes()).unwrap();
        let categories: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["B", "A", "C"]);
    }
}
