//! Mobile-friendly error types.

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Content error: {0}")]
    ContentError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<gkisplus_core::StorageError> for MobileError {
    fn from(err: gkisplus_core::StorageError) -> Self {
        MobileError::StorageError(err.to_string())
    }
}

impl From<gkisplus_core::ContentError> for MobileError {
    fn from(err: gkisplus_core::ContentError) -> Self {
        MobileError::ContentError(err.to_string())
    }
}

impl From<gkisplus_core::GkiPlusError> for MobileError {
    fn from(err: gkisplus_core::GkiPlusError) -> Self {
        match err {
            gkisplus_core::GkiPlusError::Storage(e) => MobileError::StorageError(e.to_string()),
            gkisplus_core::GkiPlusError::Content(e) => MobileError::ContentError(e.to_string()),
            gkisplus_core::GkiPlusError::Io(e) => MobileError::Internal(e.to_string()),
        }
    }
}
