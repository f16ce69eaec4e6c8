use thiserror::Error;

/// Errors raised while building or exporting an amortization schedule.
#[derive(Debug, Error)]
pub enum AmortizationError {
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("Unsupported amortization method '{0}', expected 'straight' or 'annuity'")]
    UnsupportedMethod(String),
    #[error("Cannot summarize an empty schedule")]
    EmptySchedule,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AmortizationError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
