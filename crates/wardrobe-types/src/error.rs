use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid item id: {0}")]
    InvalidId(String),

    #[error("unknown clothing category: {0}")]
    UnknownCategory(String),
}
