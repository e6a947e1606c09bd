//! HTTP request handlers - thin layer that delegates to the registry API

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{DeveloperRegistryApi, DeveloperUpdate, NewAccount, RegistryError};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

pub type SharedApi = Arc<dyn DeveloperRegistryApi>;

// ===== Developer Handlers =====

/// Query parameters for listing developers
#[derive(Debug, Deserialize)]
pub struct ListDevelopersQuery {
    /// Only developers of this department
    pub department_id: Option<i32>,
    /// Load accounts and department (default true)
    pub details: Option<bool>,
}

/// List developers, optionally restricted to one department
pub async fn list_developers(
    Extension(api): Extension<SharedApi>,
    Query(query): Query<ListDevelopersQuery>,
) -> Result<Json<Vec<DeveloperDto>>, Problem> {
    let developers = match (query.department_id, query.details.unwrap_or(true)) {
        (Some(department_id), _) => api.list_developers_by_department(department_id).await,
        (None, true) => api.list_developers_with_details().await,
        (None, false) => api.list_developers().await,
    }
    .map_err(|e| map_domain_error("list_developers", e))?;

    tracing::info!(count = developers.len(), "Returned all developers from database");
    Ok(Json(developers.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct GetDeveloperQuery {
    /// Load accounts and department (default true)
    pub details: Option<bool>,
}

/// Get a specific developer
pub async fn get_developer(
    Extension(api): Extension<SharedApi>,
    Path(developer_id): Path<Uuid>,
    Query(query): Query<GetDeveloperQuery>,
) -> Result<Json<DeveloperDto>, Problem> {
    let developer = if query.details.unwrap_or(true) {
        api.get_developer_with_details(developer_id).await
    } else {
        api.get_developer(developer_id).await
    }
    .map_err(|e| {
        map_domain_error("get_developer", e)
            .with_instance(format!("/api/developers/{developer_id}"))
    })?;

    Ok(Json(developer.into()))
}

/// Create a developer
pub async fn create_developer(
    Extension(api): Extension<SharedApi>,
    Json(req): Json<DeveloperForCreationDto>,
) -> Result<(StatusCode, Json<DeveloperDto>), Problem> {
    let developer = api
        .create_developer(req.into())
        .await
        .map_err(|e| map_domain_error("create_developer", e))?;

    tracing::info!(
        developer_id = %developer.id,
        name = %developer.name,
        "Developer was successfully created"
    );
    Ok((StatusCode::CREATED, Json(developer.into())))
}

/// Update an existing developer
pub async fn update_developer(
    Extension(api): Extension<SharedApi>,
    Path(developer_id): Path<Uuid>,
    Json(req): Json<DeveloperDto>,
) -> Result<StatusCode, Problem> {
    if req.id != developer_id {
        return Err(map_domain_error(
            "update_developer",
            RegistryError::validation("Developer id does not match the path"),
        ));
    }

    let update = DeveloperUpdate::try_from(req)
        .map_err(|e| map_domain_error("update_developer", e))?;
    let developer = api
        .update_developer(update)
        .await
        .map_err(|e| {
            map_domain_error("update_developer", e)
                .with_instance(format!("/api/developers/{developer_id}"))
        })?;

    tracing::info!(%developer_id, name = %developer.name, "Developer was successfully updated");
    Ok(StatusCode::OK)
}

/// Delete a developer
pub async fn delete_developer(
    Extension(api): Extension<SharedApi>,
    Path(developer_id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    api.delete_developer(developer_id).await.map_err(|e| {
        map_domain_error("delete_developer", e)
            .with_instance(format!("/api/developers/{developer_id}"))
    })?;

    tracing::info!(%developer_id, "Developer was successfully deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ===== Account Handlers =====

/// List accounts of a developer
pub async fn list_accounts(
    Extension(api): Extension<SharedApi>,
    Path(developer_id): Path<Uuid>,
) -> Result<Json<Vec<AccountDto>>, Problem> {
    let accounts = api
        .list_accounts(developer_id)
        .await
        .map_err(|e| map_domain_error("list_accounts", e))?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// Open an account for a developer
pub async fn open_account(
    Extension(api): Extension<SharedApi>,
    Path(developer_id): Path<Uuid>,
    Json(req): Json<OpenAccountRequest>,
) -> Result<(StatusCode, Json<AccountDto>), Problem> {
    let account = api
        .open_account(NewAccount {
            developer_id,
            account_type: req.account_type,
        })
        .await
        .map_err(|e| map_domain_error("open_account", e))?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

// ===== Department Handlers =====

/// List all departments sorted by name
pub async fn list_departments(
    Extension(api): Extension<SharedApi>,
) -> Result<Json<Vec<DepartmentDto>>, Problem> {
    let departments = api
        .list_departments()
        .await
        .map_err(|e| map_domain_error("list_departments", e))?;

    tracing::info!(count = departments.len(), "Returned all departments from database");
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// Create a department
pub async fn create_department(
    Extension(api): Extension<SharedApi>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentDto>), Problem> {
    let department = api
        .create_department(req.into())
        .await
        .map_err(|e| map_domain_error("create_department", e))?;

    Ok((StatusCode::CREATED, Json(department.into())))
}

/// Developers of one department
pub async fn list_department_developers(
    Extension(api): Extension<SharedApi>,
    Path(department_id): Path<i32>,
) -> Result<Json<Vec<DeveloperDto>>, Problem> {
    let developers = api
        .list_developers_by_department(department_id)
        .await
        .map_err(|e| map_domain_error("list_department_developers", e))?;

    Ok(Json(developers.into_iter().map(Into::into).collect()))
}
