use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationError(Vec<String>),
    /// A feasible request asked for a maturity period the rate table does not cover.
    #[error("no interest rate configured for maturity period = {0} years")]
    RateNotConfigured(u32),
    #[error("Calculation error: {0}")]
    CalculationError(String),
}

impl MortgageError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(vec![message.into()])
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;
