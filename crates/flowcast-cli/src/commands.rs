//! CLI command implementations
//!
//! Commands are thin glue around flowcast-core: read text, parse,
//! analyze, render. The AI narrative is appended after the forecast is
//! already printed, so a backend failure only ever affects the trailing
//! insight section.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use flowcast_core::ai;
use flowcast_core::{analyze, parse_records, ForecastResult, NarrativeClient};

use crate::sample::SAMPLE_CSV;

/// Analyze a ledger file (or the built-in sample) and print the forecast
pub async fn cmd_analyze(file: Option<&Path>, no_ai: bool, json: bool) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => SAMPLE_CSV.to_string(),
    };

    let records = parse_records(text.as_bytes())?;
    if records.is_empty() {
        anyhow::bail!("No valid rows found in CSV");
    }

    let forecast = analyze(&records)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    render_forecast(&forecast);

    if !no_ai {
        let client = NarrativeClient::from_env();
        let explanation = ai::generate_explanation(client.as_ref(), &forecast).await;

        println!("🤖 AI Insight");
        println!("   ─────────────────────────────────────────────────────────────");
        println!("   {}", explanation);
        println!();
    }

    Ok(())
}

/// Print the built-in sample ledger
pub fn cmd_sample() -> Result<()> {
    print!("{}", SAMPLE_CSV);
    Ok(())
}

/// Render a forecast as a text report
pub fn render_forecast(forecast: &ForecastResult) {
    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          💰 Flowcast Forecast           │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Predicted Next Month Expenses: ${:.2}",
        forecast.predicted_next_month_expenses
    );
    println!(
        "  Predicted Net Cash Flow:       ${:.2}",
        forecast.predicted_next_month_cash_flow
    );
    println!(
        "  (trailing average over the last {} month{})",
        forecast.monthly_stats.len().min(3),
        if forecast.monthly_stats.len() == 1 { "" } else { "s" }
    );
    println!();

    println!("📅 Monthly Totals");
    println!(
        "   {:8} │ {:>10} │ {:>10} │ {:>10}",
        "Month", "Expenses", "Income", "Cash Flow"
    );
    println!("   ─────────┼────────────┼────────────┼────────────");
    for month in &forecast.monthly_stats {
        println!(
            "   {:8} │ {:>10.2} │ {:>10.2} │ {:>10.2}",
            month.month, month.total_expenses, month.total_income, month.cash_flow
        );
    }
    println!();

    println!("📈 Biggest Changes");
    if forecast.significant_changes.is_empty() {
        println!("   Not enough history for month-over-month changes.");
    } else {
        for change in &forecast.significant_changes {
            println!(
                "   {:15} was ${:<8.0} now ${:<8.0} {}",
                change.category,
                change.previous_amount,
                change.current_amount,
                format_pct(change.percentage_change)
            );
        }
    }
    println!();
}

/// Format a percentage change with an explicit sign, e.g. "+50.0%"
pub fn format_pct(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}
