//! Error types for the remittance service.

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("minimum transfer amount is ¥100, got ¥{amount}")]
    BelowMinimum { amount: i64 },

    #[error("amount must be positive, got {amount}")]
    InvalidAmount { amount: i64 },

    #[error("validation error: {0}")]
    Validation(String),

    /// A non-positive rate is a contract violation, never user input.
    #[error("exchange rate must be positive, got {rate}")]
    InvalidRate { rate: f64 },
}

/// Store-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("database error: {0}")]
    Database(String),

    #[error("transaction not found")]
    NotFound,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            // Surfaces as 500: a broken rate can only come from misconfiguration.
            DomainError::InvalidRate { .. } => AppError::Internal(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => e.into(),
            StoreError::NotFound => AppError::NotFound("transaction not found".into()),
            StoreError::Database(e) => AppError::Internal(e),
        }
    }
}
