use axum::{Json, extract::State, http::StatusCode};
use ganit::worksheet::ColumnStep;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::grid::{GridDto, parse_operation};
use crate::{ApiError, AppState};

/// Request to solve a worksheet
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorksheetRequest {
    /// "addition" or "subtraction", case-insensitive
    pub operation: String,
    pub left: String,
    pub right: String,
}

/// One column of the walkthrough
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColumnStepDto {
    pub place: Option<String>,
    pub top: u8,
    pub bottom: u8,
    pub carry_in: u8,
    pub digit: u8,
    pub carry_out: u8,
    pub description: String,
}

impl From<&ColumnStep> for ColumnStepDto {
    fn from(step: &ColumnStep) -> Self {
        Self {
            place: step.place.map(|p| p.name().to_string()),
            top: step.trace.top,
            bottom: step.trace.bottom,
            carry_in: step.trace.carry_in,
            digit: step.trace.digit,
            carry_out: step.trace.carry_out,
            description: step.description.clone(),
        }
    }
}

/// API representation of a solved worksheet
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorksheetDto {
    pub operation: String,
    pub left: String,
    pub right: String,
    pub grid: GridDto,
    pub steps: Vec<String>,
    /// Ones column first
    pub walkthrough: Vec<ColumnStepDto>,
    /// Grid drawn as plain text
    pub rendered: String,
    pub answer: String,
}

/// Validate input and solve a worksheet
#[utoipa::path(
    post,
    path = "/api/v1/worksheets",
    request_body = WorksheetRequest,
    responses(
        (status = 201, description = "Worksheet solved", body = WorksheetDto),
        (status = 400, description = "Input rejected", body = crate::error::ErrorResponse)
    ),
    tag = "worksheets"
)]
pub async fn create_worksheet(
    State(state): State<AppState>,
    Json(request): Json<WorksheetRequest>,
) -> Result<(StatusCode, Json<WorksheetDto>), ApiError> {
    let operation = parse_operation(&request.operation)?;
    let worksheet = state
        .app
        .worksheet(operation, &request.left, &request.right)?;

    let dto = WorksheetDto {
        operation: worksheet.problem.operation.to_string(),
        left: worksheet.problem.left.to_string(),
        right: worksheet.problem.right.to_string(),
        grid: GridDto::from(&worksheet.grid),
        steps: worksheet.steps.clone(),
        walkthrough: worksheet
            .walkthrough
            .iter()
            .map(ColumnStepDto::from)
            .collect(),
        rendered: state.app.render(&worksheet.grid),
        answer: worksheet.answer,
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

pub fn routes() -> axum::Router<AppState> {
    use axum::routing::post;

    axum::Router::new().route("/", post(create_worksheet))
}
