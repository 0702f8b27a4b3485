//! CLI command tests

use flowcast_core::{analyze, parse_records};

use crate::commands::{self, format_pct};
use crate::sample::SAMPLE_CSV;

#[test]
fn test_sample_ledger_parses_and_analyzes() {
    let records = parse_records(SAMPLE_CSV.as_bytes()).unwrap();
    assert!(!records.is_empty());

    let forecast = analyze(&records).unwrap();

    // Four months of history, January through April 2024
    assert_eq!(forecast.monthly_stats.len(), 4);
    assert_eq!(forecast.monthly_stats[0].month, "2024-01");
    assert_eq!(forecast.last_month.month, "2024-04");

    // Every month in the sample has income and expenses
    for month in &forecast.monthly_stats {
        assert!(month.total_income > 0.0);
        assert!(month.total_expenses > 0.0);
        assert_eq!(month.cash_flow, month.total_income - month.total_expenses);
    }

    // Travel first appears in April, so it ranks as a +100% change
    let travel = forecast
        .significant_changes
        .iter()
        .find(|c| c.category == "Travel")
        .unwrap();
    assert_eq!(travel.percentage_change, 100.0);
}

#[test]
fn test_render_forecast_does_not_panic() {
    let records = parse_records(SAMPLE_CSV.as_bytes()).unwrap();
    let forecast = analyze(&records).unwrap();
    commands::render_forecast(&forecast);
}

#[test]
fn test_render_single_month_forecast() {
    let csv = "date,category,amount\n2024-01-15,Food,80\n";
    let records = parse_records(csv.as_bytes()).unwrap();
    let forecast = analyze(&records).unwrap();

    assert!(forecast.significant_changes.is_empty());
    commands::render_forecast(&forecast);
}

#[test]
fn test_format_pct() {
    assert_eq!(format_pct(50.0), "+50.0%");
    assert_eq!(format_pct(-12.34), "-12.3%");
    assert_eq!(format_pct(0.0), "0.0%");
}

#[tokio::test]
async fn test_cmd_analyze_sample_without_ai() {
    let result = commands::cmd_analyze(None, true, false).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_cmd_analyze_json_output() {
    let result = commands::cmd_analyze(None, true, true).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_cmd_analyze_missing_file_fails() {
    let result =
        commands::cmd_analyze(Some(std::path::Path::new("/nonexistent/ledger.csv")), true, false)
            .await;
    assert!(result.is_err());
}

#[test]
fn test_cmd_sample_prints() {
    assert!(commands::cmd_sample().is_ok());
}
