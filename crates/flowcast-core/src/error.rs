//! Error types for Flowcast

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV format invalid: {0}")]
    Format(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
