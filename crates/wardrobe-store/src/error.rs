use wardrobe_types::ItemId;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    /// The document was read but could not be decoded.
    #[error("corrupt document: {0}")]
    CorruptDocument(String),

    /// No visible record has the given id.
    #[error("clothing item not found: {0}")]
    NotFound(ItemId),

    /// A record cannot be encoded into a document that would decode again.
    #[error("unencodable record {id}: {reason}")]
    Unencodable { id: ItemId, reason: String },

    /// The record exists but its state forbids the operation.
    #[error("operation rejected for {id}: {reason}")]
    Rejected { id: ItemId, reason: String },
}

impl StoreError {
    /// Returns `true` for outcomes that mean "no such visible record" at the
    /// HTTP boundary (`NotFound` and `Rejected`).
    pub fn is_not_found_like(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Rejected { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
