//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error body of the developer registry JSON API.
///
/// Serialized with the RFC-9457 field names, so `type` always points at the
/// status page and `title` names the registry error kind.
#[derive(Debug, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_uri: String,

    /// "Validation Error", "Developer Not Found" and so on
    pub title: String,

    pub status: u16,

    /// Message carried by the registry error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request path of the failing developer, when the handler knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Log a failed operation and map it to HTTP Problem Details
pub fn map_domain_error(action: &str, error: RegistryError) -> Problem {
    match error {
        RegistryError::NotFound { resource, id } => {
            tracing::warn!(action, %resource, %id, "requested row not found");
            Problem::new(StatusCode::NOT_FOUND, format!("{} Not Found", resource))
                .with_detail(format!("{} with id '{}' was not found", resource, id))
        }

        RegistryError::Validation { message } => {
            tracing::warn!(action, %message, "invalid object sent from client");
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        RegistryError::Storage { message } => {
            tracing::error!(action, error = %message, "something went wrong");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("Internal server error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_problem_body() {
        let problem = map_domain_error(
            "update_developer",
            RegistryError::validation("Department is required"),
        );
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["type"], "https://httpstatuses.io/400");
        assert_eq!(json["title"], "Validation Error");
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "Department is required");
        assert!(json.get("instance").is_none());
    }

    #[test]
    fn test_storage_problem_hides_the_cause() {
        let problem = map_domain_error(
            "list_developers",
            RegistryError::storage(anyhow::anyhow!("disk I/O error")),
        )
        .with_instance("/api/developers");

        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail.as_deref(), Some("Internal server error"));
        assert_eq!(problem.instance.as_deref(), Some("/api/developers"));
    }
}
