use axum::{Json, extract::State};
use ganit::{Grid, Operation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{ApiError, AppState};

/// Request to compute a column grid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridRequest {
    /// "addition" or "subtraction", case-insensitive
    pub operation: String,
    pub left: String,
    pub right: String,
    /// Number of digit columns; defaults to the wider operand
    pub num_cols: Option<usize>,
}

/// API representation of a grid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridDto {
    pub operation: String,
    pub num_cols: usize,
    pub total_cols: usize,
    /// Place-value abbreviations, most significant first; empty when the grid
    /// is wider than the label table
    pub header: Vec<String>,
    /// Carry/borrow, top, bottom, divider and result rows as cell text
    pub rows: Vec<Vec<String>>,
    pub result: String,
}

impl From<&Grid> for GridDto {
    fn from(grid: &Grid) -> Self {
        Self {
            operation: grid.operation().to_string(),
            num_cols: grid.num_cols(),
            total_cols: grid.total_cols(),
            header: grid
                .place_values()
                .map(|labels| {
                    labels
                        .iter()
                        .map(|p| p.abbreviation().to_string())
                        .collect()
                })
                .unwrap_or_default(),
            rows: grid.text_rows(),
            result: grid.result_text(),
        }
    }
}

pub(crate) fn parse_operation(text: &str) -> Result<Operation, ApiError> {
    text.parse()
        .map_err(|_| ApiError::BadRequest(format!("Unknown operation: {}", text)))
}

/// Compute a column grid
#[utoipa::path(
    post,
    path = "/api/v1/grids",
    request_body = GridRequest,
    responses(
        (status = 200, description = "Grid computed", body = GridDto),
        (status = 400, description = "Invalid operands or column count", body = crate::error::ErrorResponse)
    ),
    tag = "grids"
)]
pub async fn create_grid(
    State(state): State<AppState>,
    Json(request): Json<GridRequest>,
) -> Result<Json<GridDto>, ApiError> {
    let operation = parse_operation(&request.operation)?;
    let grid = state
        .app
        .grid(operation, &request.left, &request.right, request.num_cols)?;
    Ok(Json(GridDto::from(&grid)))
}

pub fn routes() -> axum::Router<AppState> {
    use axum::routing::post;

    axum::Router::new().route("/", post(create_grid))
}
