use thiserror::Error;
use uuid::Uuid;

/// Failures raised by the backing key-value store or its JSON codec.
///
/// These never escape the adapter layer: reads fall back to a caller-supplied
/// default and writes are logged and swallowed, because the store is a local
/// device cache rather than a system of record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("stored value malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error type for the repository surface.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("account {0} not found")]
    AccountNotFound(Uuid),
    #[error("amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),
}
