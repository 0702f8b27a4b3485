//! Pluggable narrative backends
//!
//! Turns a computed [`ForecastResult`] into a short natural-language
//! explanation via a locally hosted LLM. Narrative generation is strictly
//! best-effort: the forecast stands on its own, and a missing backend or
//! failed call degrades to a fixed fallback message instead of
//! propagating an error.
//!
//! # Architecture
//!
//! - `NarrativeBackend` trait: defines the interface for all backends
//! - `NarrativeClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `OllamaBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `AI_BACKEND`: Backend to use (ollama, mock). Default: ollama
//! - `OLLAMA_HOST`: Ollama server URL (required for ollama backend)
//! - `OLLAMA_MODEL`: Model name (default: llama3.2)

mod mock;
mod ollama;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::models::{CategoryChange, ForecastResult};

/// Fallback shown when no narrative backend is configured
pub const FALLBACK_NOT_CONFIGURED: &str =
    "Narrative insights are disabled. Set OLLAMA_HOST to enable AI explanations.";

/// Fallback shown when the backend call fails
pub const FALLBACK_CALL_FAILED: &str =
    "Sorry, a financial insight could not be generated right now due to a connection error.";

/// Fallback shown when the backend returns an empty response
pub const FALLBACK_EMPTY_RESPONSE: &str = "Could not generate an explanation.";

/// Trait defining the interface for all narrative backends
#[async_trait]
pub trait NarrativeBackend: Send + Sync {
    /// Generate a short narrative explanation of a forecast
    async fn explain_forecast(&self, forecast: &ForecastResult) -> Result<String>;

    /// Check whether the backend is reachable
    async fn health_check(&self) -> bool;

    /// Model name in use (for display)
    fn model(&self) -> &str;
}

/// Concrete narrative client wrapper
///
/// Enum dispatch keeps the client `Clone` without trait objects.
#[derive(Clone)]
pub enum NarrativeClient {
    /// Ollama backend (HTTP API)
    Ollama(OllamaBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl NarrativeClient {
    /// Create a narrative client from environment variables
    ///
    /// Checks `AI_BACKEND` to determine which backend to use:
    /// - `ollama` (default): Uses OLLAMA_HOST and OLLAMA_MODEL
    /// - `mock`: Creates a mock backend for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("AI_BACKEND").unwrap_or_else(|_| "ollama".to_string());
        match backend.as_str() {
            "mock" => Some(NarrativeClient::Mock(MockBackend::new())),
            _ => OllamaBackend::from_env().map(NarrativeClient::Ollama),
        }
    }
}

#[async_trait]
impl NarrativeBackend for NarrativeClient {
    async fn explain_forecast(&self, forecast: &ForecastResult) -> Result<String> {
        match self {
            NarrativeClient::Ollama(backend) => backend.explain_forecast(forecast).await,
            NarrativeClient::Mock(backend) => backend.explain_forecast(forecast).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            NarrativeClient::Ollama(backend) => backend.health_check().await,
            NarrativeClient::Mock(backend) => backend.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            NarrativeClient::Ollama(backend) => backend.model(),
            NarrativeClient::Mock(backend) => backend.model(),
        }
    }
}

/// Generate a narrative for a forecast, degrading to fallback text
///
/// Never fails and never touches the forecast: a missing client yields
/// the not-configured message, a backend error or empty response yields
/// a fixed fallback.
pub async fn generate_explanation(
    client: Option<&NarrativeClient>,
    forecast: &ForecastResult,
) -> String {
    let Some(client) = client else {
        return FALLBACK_NOT_CONFIGURED.to_string();
    };

    match client.explain_forecast(forecast).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => FALLBACK_EMPTY_RESPONSE.to_string(),
        Err(e) => {
            warn!("Narrative generation failed: {}", e);
            FALLBACK_CALL_FAILED.to_string()
        }
    }
}

/// Render the summary prompt sent to the narrative backend
///
/// Carries last month's totals and cash flow, both predictions, and the
/// top category changes as human-readable text.
pub fn forecast_prompt(forecast: &ForecastResult) -> String {
    let last = &forecast.last_month;

    format!(
        "You are a helpful financial assistant for a personal finance dashboard.\n\
         Analyze the following monthly expense data:\n\
         \n\
         - Last Month ({}) Total Expenses: ${:.2}\n\
         - Last Month Cash Flow: ${:.2}\n\
         - Prediction for Next Month Expenses: ${:.2}\n\
         - Prediction for Next Month Cash Flow: ${:.2}\n\
         - Significant Category Changes vs Previous Month: {}\n\
         \n\
         Task:\n\
         1. Summarize the user's spending trend briefly.\n\
         2. Explain why the forecast might look the way it does based on the data \
         provided (e.g., mentioning the increase/decrease in specific categories).\n\
         3. Give one specific, actionable tip to improve their cash flow next month.\n\
         \n\
         Tone: Friendly, encouraging, and concise (max 3-4 sentences). Avoid complex jargon.",
        last.month,
        last.total_expenses,
        last.cash_flow,
        forecast.predicted_next_month_expenses,
        forecast.predicted_next_month_cash_flow,
        changes_description(&forecast.significant_changes),
    )
}

/// Render category changes as "Food: +50.0% (from $100 to $150), ..."
pub fn changes_description(changes: &[CategoryChange]) -> String {
    if changes.is_empty() {
        return "none".to_string();
    }

    changes
        .iter()
        .map(|c| {
            format!(
                "{}: {}{:.1}% (from ${:.0} to ${:.0})",
                c.category,
                if c.percentage_change > 0.0 { "+" } else { "" },
                c.percentage_change,
                c.previous_amount,
                c.current_amount,
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::analyze;
    use crate::models::TransactionRecord;

    fn sample_forecast() -> ForecastResult {
        let records = vec![
            TransactionRecord {
                date: "2024-01-15".to_string(),
                category: "Food".to_string(),
                amount: 100.0,
            },
            TransactionRecord {
                date: "2024-01-20".to_string(),
                category: "Income".to_string(),
                amount: 2000.0,
            },
            TransactionRecord {
                date: "2024-02-10".to_string(),
                category: "Food".to_string(),
                amount: 150.0,
            },
            TransactionRecord {
                date: "2024-02-15".to_string(),
                category: "Income".to_string(),
                amount: 2000.0,
            },
        ];
        analyze(&records).unwrap()
    }

    #[test]
    fn test_changes_description() {
        let forecast = sample_forecast();
        let description = changes_description(&forecast.significant_changes);
        assert_eq!(description, "Food: +50.0% (from $100 to $150)");
        assert_eq!(changes_description(&[]), "none");
    }

    #[test]
    fn test_forecast_prompt_carries_the_numbers() {
        let forecast = sample_forecast();
        let prompt = forecast_prompt(&forecast);

        assert!(prompt.contains("2024-02"));
        assert!(prompt.contains("$150.00"));
        assert!(prompt.contains("$125.00"));
        assert!(prompt.contains("$1875.00"));
        assert!(prompt.contains("Food: +50.0%"));
    }

    #[tokio::test]
    async fn test_missing_client_yields_not_configured_fallback() {
        let forecast = sample_forecast();
        let text = generate_explanation(None, &forecast).await;
        assert_eq!(text, FALLBACK_NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn test_healthy_mock_yields_narrative() {
        let forecast = sample_forecast();
        let client = NarrativeClient::Mock(MockBackend::new());

        let text = generate_explanation(Some(&client), &forecast).await;
        assert!(text.contains("$125.00"));
        assert_ne!(text, FALLBACK_CALL_FAILED);
    }

    #[tokio::test]
    async fn test_backend_failure_yields_fallback_and_forecast_is_untouched() {
        let forecast = sample_forecast();
        let client = NarrativeClient::Mock(MockBackend::unhealthy());

        let before = forecast.clone();
        let text = generate_explanation(Some(&client), &forecast).await;

        assert_eq!(text, FALLBACK_CALL_FAILED);
        assert_eq!(forecast, before);
    }
}
