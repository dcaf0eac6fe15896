use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Unknown currency: {0}")]
    InvalidCurrency(String),
    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),
    #[error("Currency mismatch: expected {expected}, got {found}")]
    CurrencyMismatch { expected: String, found: String },
    #[error("Discount has not been set")]
    DiscountNotSet,
    #[error("Invalid order id: {0:?}")]
    InvalidOrderId(String),
    #[error("Invalid request id: {0:?}")]
    InvalidRequestId(String),
}
