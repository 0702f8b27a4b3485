//! Flowcast Core Library
//!
//! Shared functionality for the Flowcast expense forecaster:
//! - Delimited-text parsing of transaction ledgers
//! - Monthly aggregation and trailing-average expense forecasting
//! - Month-over-month category change ranking
//! - Pluggable narrative backends (Ollama, mock) for AI summaries
//!
//! The pipeline is a single linear transform over an in-memory sequence:
//! parse → bucket → sort → forecast → rank. Re-running it on the same
//! input always yields the same result.

pub mod ai;
pub mod error;
pub mod forecast;
pub mod models;
pub mod parse;

pub use ai::{
    generate_explanation, MockBackend, NarrativeBackend, NarrativeClient, OllamaBackend,
};
pub use error::{Error, Result};
pub use forecast::analyze;
pub use models::{CategoryChange, CategoryTotal, ForecastResult, MonthlyStats, TransactionRecord};
pub use parse::parse_records;
