//! Route registration for the JSON API

use super::{dto::*, handlers};
use axum::{routing::get, Extension, Json, Router};
use utoipa::OpenApi;

/// Schema-only OpenAPI document for the JSON API DTOs
#[derive(OpenApi)]
#[openapi(
    info(title = "Developer Registry API"),
    components(schemas(
        DeveloperDto,
        DeveloperForCreationDto,
        DepartmentDto,
        CreateDepartmentRequest,
        AccountDto,
        OpenAccountRequest
    ))
)]
pub struct ApiDoc;

/// Register all JSON API routes
pub fn register_routes(router: Router, api: handlers::SharedApi) -> anyhow::Result<Router> {
    let router = router
        // Developer endpoints
        .route(
            "/api/developers",
            get(handlers::list_developers).post(handlers::create_developer),
        )
        .route(
            "/api/developers/{developer_id}",
            get(handlers::get_developer)
                .put(handlers::update_developer)
                .delete(handlers::delete_developer),
        )
        .route(
            "/api/developers/{developer_id}/accounts",
            get(handlers::list_accounts).post(handlers::open_account),
        )
        // Department endpoints
        .route(
            "/api/departments",
            get(handlers::list_departments).post(handlers::create_department),
        )
        .route(
            "/api/departments/{department_id}/developers",
            get(handlers::list_department_developers),
        )
        .route("/api/openapi.json", get(openapi_handler))
        // Registry API as extension for handlers
        .layer(Extension(api));

    Ok(router)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
