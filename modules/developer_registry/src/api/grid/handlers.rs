//! Grid handlers - data-source reads, form-post create and row edits

use super::{
    dto::*,
    error::{map_grid_error, GridError},
    paging::to_data_source_result,
};
use crate::api::rest::{
    dto::{DepartmentDto, DeveloperDto},
    handlers::SharedApi,
};
use crate::contract::{DeveloperUpdate, NewDeveloper, RegistryError};
use axum::{
    extract::{Path, Query},
    response::{IntoResponse, Redirect, Response},
    Extension, Form, Json,
};
use chrono::NaiveDate;
use uuid::Uuid;

/// Shared state of the grid handlers
#[derive(Clone)]
pub struct GridContext {
    pub api: SharedApi,
    pub default_page_size: u64,
}

pub const INVALID_FIELDS_MESSAGE: &str = "Warning: Some required fields are not valid.";

/// Grid page state, carrying the status message of the previous post
pub async fn page(Query(query): Query<PageQuery>) -> Json<PageState> {
    Json(PageState {
        status_message: query.status,
        dev: None,
    })
}

/// One sorted page of developers with details
pub async fn list_developers(
    Extension(ctx): Extension<GridContext>,
    Query(request): Query<DataSourceRequest>,
) -> Result<Json<DataSourceResult<DeveloperDto>>, GridError> {
    let developers = ctx
        .api
        .list_developers_with_details()
        .await
        .map_err(|e| map_grid_error("list_developers", e))?;
    tracing::info!(count = developers.len(), "Returned all developers from database");

    let rows = developers.into_iter().map(Into::into).collect();
    let result =
        to_data_source_result(rows, &request, ctx.default_page_size).map_err(GridError::BadRequest)?;
    Ok(Json(result))
}

/// All departments sorted by name
pub async fn list_departments(
    Extension(ctx): Extension<GridContext>,
) -> Result<Json<Vec<DepartmentDto>>, GridError> {
    let departments = ctx
        .api
        .list_departments()
        .await
        .map_err(|e| map_grid_error("list_departments", e))?;
    tracing::info!(count = departments.len(), "Returned all departments from database");

    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// Create a developer from the page form.
///
/// Success redirects back to the page with a status message; failures
/// re-render the page state with the posted form.
pub async fn create_developer(
    Extension(ctx): Extension<GridContext>,
    Form(form): Form<DeveloperForm>,
) -> Response {
    let Some(new) = parse_form(&form) else {
        tracing::warn!("Invalid developer object sent from client");
        return rerender(INVALID_FIELDS_MESSAGE, form);
    };

    match ctx.api.create_developer(new).await {
        Ok(developer) => {
            let status = format!("Developer - {} was successfully created.", developer.name);
            tracing::info!(developer_id = %developer.id, "{status}");
            Redirect::to(&format!("/grid?status={}", urlencoding::encode(&status))).into_response()
        }
        Err(RegistryError::Validation { message }) => {
            tracing::warn!(%message, "Invalid developer object sent from client");
            rerender(INVALID_FIELDS_MESSAGE, form)
        }
        Err(e) => {
            tracing::error!(error = %e, "Something went wrong inside create_developer");
            let status = format!("Error: Could not add developer {}.", form.name);
            rerender(status, form)
        }
    }
}

/// Update a developer edited inline; echoes the grid request
pub async fn update_developer(
    Extension(ctx): Extension<GridContext>,
    Query(request): Query<DataSourceRequest>,
    Json(model): Json<DeveloperDto>,
) -> Result<Json<DataSourceRequest>, GridError> {
    let name = model.name.clone();
    let update =
        DeveloperUpdate::try_from(model).map_err(|e| map_grid_error("update_developer", e))?;
    ctx.api
        .update_developer(update)
        .await
        .map_err(|e| map_grid_error("update_developer", e))?;

    tracing::info!("Developer {name} was successfully updated.");
    Ok(Json(request))
}

/// Delete a developer row
pub async fn delete_developer(
    Extension(ctx): Extension<GridContext>,
    Path(developer_id): Path<Uuid>,
) -> Result<(), GridError> {
    ctx.api
        .delete_developer(developer_id)
        .await
        .map_err(|e| map_grid_error("delete_developer", e))?;

    tracing::info!(%developer_id, "Developer was successfully deleted.");
    Ok(())
}

fn rerender(status: impl Into<String>, form: DeveloperForm) -> Response {
    let state = PageState {
        status_message: Some(status.into()),
        dev: Some(form),
    };
    Json(state).into_response()
}

/// Bind the raw form; `None` when a field cannot be read
fn parse_form(form: &DeveloperForm) -> Option<NewDeveloper> {
    let date_of_birth = NaiveDate::parse_from_str(form.date_of_birth.trim(), "%Y-%m-%d").ok()?;
    let department_id = form.department_id.trim().parse().ok()?;

    Some(NewDeveloper {
        name: form.name.clone(),
        date_of_birth,
        address: form.address.clone(),
        department_id,
    })
}
