//! Error types for SlotGrid

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SgError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Insufficient balance: {balance} < bet {bet}")]
    InsufficientBalance { balance: u64, bet: u64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type SgResult<T> = Result<T, SgError>;
