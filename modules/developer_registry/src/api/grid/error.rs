//! Plain-text error responses for the grid adapter

use crate::contract::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure of a grid data request
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Developer is null")]
    DeveloperIsNull,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for GridError {
    fn into_response(self) -> Response {
        let status = match self {
            GridError::DeveloperIsNull | GridError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GridError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Log a failed grid operation and pick its response
pub fn map_grid_error(action: &str, error: RegistryError) -> GridError {
    match error {
        RegistryError::NotFound { resource, id } => {
            tracing::error!(
                action,
                %resource,
                %id,
                "object sent from client could not be tied to an existing row"
            );
            GridError::DeveloperIsNull
        }
        RegistryError::Validation { message } => {
            tracing::warn!(action, %message, "invalid object sent from client");
            GridError::BadRequest(message)
        }
        RegistryError::Storage { message } => {
            tracing::error!(action, error = %message, "something went wrong");
            GridError::Internal
        }
    }
}
