use crate::AppState;
use axum::Router;

pub mod grid;
pub mod place_value;
pub mod worksheet;

/// API v1 routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/grids", grid::routes())
        .nest("/worksheets", worksheet::routes())
        .nest("/place-values", place_value::routes())
}
