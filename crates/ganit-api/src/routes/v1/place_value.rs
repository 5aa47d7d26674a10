use axum::Json;
use ganit::PlaceValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// API representation of a place value
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceValueDto {
    /// Digits left of the ones place
    pub position: usize,
    pub abbreviation: String,
    pub name: String,
}

/// Response for listing place values
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListPlaceValuesResponse {
    pub place_values: Vec<PlaceValueDto>,
    pub total: usize,
}

/// List place-value labels, ones first
#[utoipa::path(
    get,
    path = "/api/v1/place-values",
    responses(
        (status = 200, description = "Place-value labels", body = ListPlaceValuesResponse)
    ),
    tag = "place-values"
)]
pub async fn list_place_values() -> Json<ListPlaceValuesResponse> {
    let place_values: Vec<PlaceValueDto> = (0..PlaceValue::COUNT)
        .filter_map(|position| {
            PlaceValue::from_position(position).map(|place| PlaceValueDto {
                position,
                abbreviation: place.abbreviation().to_string(),
                name: place.name().to_string(),
            })
        })
        .collect();
    let total = place_values.len();

    Json(ListPlaceValuesResponse {
        place_values,
        total,
    })
}

pub fn routes() -> axum::Router<AppState> {
    use axum::routing::get;

    axum::Router::new().route("/", get(list_place_values))
}
