use axum::Router;
use axum::http::HeaderValue;
use ganit::GanitApp;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod routes;

pub use config::ApiConfig;
pub use error::ApiError;

/// Application state
#[derive(Clone, Default)]
pub struct AppState {
    pub app: GanitApp,
}

impl AppState {
    /// Create a new application state
    pub fn new(app: GanitApp) -> Self {
        Self { app }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::v1::grid::create_grid,
        crate::routes::v1::worksheet::create_worksheet,
        crate::routes::v1::place_value::list_place_values,
    ),
    components(
        schemas(
            crate::routes::health::HealthResponse,
            crate::routes::v1::grid::GridRequest,
            crate::routes::v1::grid::GridDto,
            crate::routes::v1::worksheet::WorksheetRequest,
            crate::routes::v1::worksheet::WorksheetDto,
            crate::routes::v1::worksheet::ColumnStepDto,
            crate::routes::v1::place_value::PlaceValueDto,
            crate::routes::v1::place_value::ListPlaceValuesResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "grids", description = "Column arithmetic grids"),
        (name = "worksheets", description = "Validated worksheets with explanations"),
        (name = "place-values", description = "Place-value labels")
    )
)]
pub struct ApiDoc;

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors.allow_any_origin {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build API application
pub fn build_app(state: AppState, config: &ApiConfig) -> Router {
    let mut router = Router::new().merge(routes::routes());
    if config.enable_swagger {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
