//! Mock backend for testing
//!
//! Returns a deterministic narrative derived from the forecast numbers,
//! so tests and development work without a running LLM server.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::ForecastResult;

use super::{changes_description, NarrativeBackend};

/// Mock narrative backend
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Whether calls should succeed
    pub healthy: bool,
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create a mock backend whose calls fail
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl NarrativeBackend for MockBackend {
    async fn explain_forecast(&self, forecast: &ForecastResult) -> Result<String> {
        if !self.healthy {
            return Err(Error::InvalidData("mock backend is unhealthy".to_string()));
        }

        let direction = if forecast.predicted_next_month_cash_flow >= 0.0 {
            "positive"
        } else {
            "negative"
        };

        Ok(format!(
            "Spending in {} totaled ${:.2}. Next month is expected to run about \
             ${:.2} in expenses with a {} cash flow of ${:.2}. Biggest movers: {}.",
            forecast.last_month.month,
            forecast.last_month.total_expenses,
            forecast.predicted_next_month_expenses,
            direction,
            forecast.predicted_next_month_cash_flow,
            changes_description(&forecast.significant_changes),
        ))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }
}
