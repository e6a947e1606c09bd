//! Route registration for the server-driven grid

use super::handlers::{self, GridContext};
use axum::{
    routing::{delete, get},
    Extension, Router,
};

/// Register all grid routes
pub fn register_routes(router: Router, ctx: GridContext) -> anyhow::Result<Router> {
    let grid = Router::new()
        .route("/grid", get(handlers::page))
        .route(
            "/grid/developers",
            get(handlers::list_developers)
                .post(handlers::create_developer)
                .put(handlers::update_developer),
        )
        .route("/grid/developers/{developer_id}", delete(handlers::delete_developer))
        .route("/grid/departments", get(handlers::list_departments))
        .layer(Extension(ctx));

    Ok(router.merge(grid))
}
