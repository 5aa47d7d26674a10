use axum::{Json, Router, extract::State, routing::get};
use ganit::Operation;
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// Liveness report with the limits this server solves worksheets under
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Widest grid accepted while place-value labels are required
    pub max_columns: usize,
    pub require_place_values: bool,
    /// Operations that can be laid out in columns
    pub operations: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.app.config();
    let operations = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ]
    .into_iter()
    .filter(Operation::is_columnar)
    .map(|op| op.to_string())
    .collect();

    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_columns: config.max_columns,
        require_place_values: config.require_place_values,
        operations,
    })
}
