//! Contract error types for the developer registry
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Developer registry domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Requested row does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (developer, department, account)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Input failed a declared field constraint
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Store failure (constraint violation, connectivity, timeout)
    #[error("Storage error: {message}")]
    Storage {
        /// Underlying store error, for logs only
        message: String,
    },
}

impl RegistryError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(error: anyhow::Error) -> Self {
        Self::Storage {
            message: format!("{error:#}"),
        }
    }
}
