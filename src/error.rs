//! Error types for lookups.

use thiserror::Error;

/// Failure of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The key is not present in the structure being queried.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// A raw key value outside the dense key range.
    #[error("invalid key value {0}")]
    InvalidKey(u8),
}

impl LookupError {
    pub(crate) fn not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        LookupError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    /// Whether this is a [`LookupError::KeyNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::KeyNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
