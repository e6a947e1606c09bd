//! REST DTOs with serde derives for HTTP API
//!
//! Back-references (account → developer, department → developers) are never
//! part of a DTO.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Developer DTOs =====

/// Developer response DTO, also accepted as the update body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeveloperDto {
    /// Developer ID
    pub id: Uuid,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "1990-12-10")]
    pub date_of_birth: NaiveDate,

    #[schema(example = "12 St James's Square, London")]
    pub address: String,

    /// Accounts, present when loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<AccountDto>>,

    /// Owning department ID; on update, a nested `department` takes precedence
    #[serde(default)]
    pub department_id: Option<i32>,

    /// Owning department, present when loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentDto>,
}

/// Developer creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeveloperForCreationDto {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "1990-12-10")]
    pub date_of_birth: NaiveDate,

    pub address: String,

    pub department_id: i32,
}

// ===== Department DTOs =====

/// Department response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentDto {
    pub id: i32,

    /// Ignored when the department is nested in an update body
    #[schema(example = "Platform")]
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Department creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDepartmentRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

// ===== Account DTOs =====

/// Account response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: Uuid,

    pub date_created: DateTime<Utc>,

    #[schema(example = "github")]
    pub account_type: String,

    pub developer_id: Uuid,
}

/// Account opening request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OpenAccountRequest {
    #[schema(example = "github")]
    pub account_type: String,
}

// Note: Conversion implementations live in mapper.rs
