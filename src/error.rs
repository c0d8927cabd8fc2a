//! Error types shared by the state modules and the storage adapter.
//!
//! DESIGN
//! ======
//! Neither error is fatal. Validation failures become an inline status
//! message with no state change; storage failures leave the in-memory copy
//! authoritative and degrade the session to non-durable operation.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A user action was rejected before any state changed.
///
/// The `Display` text is the message shown in the view's status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both the name and the new value.")]
    MissingNameOrValue,
    #[error("Please enter a valid user ID and an amount greater than zero.")]
    MissingUserOrAmount,
}

/// The persistent key-value store refused an operation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append the non-durable notice to a status message when persistence failed.
pub fn with_storage_note(message: String, result: &Result<(), StorageError>) -> String {
    match result {
        Ok(()) => message,
        Err(e) => format!("{message} (kept in memory only: {e})"),
    }
}
