use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use ganit::{GanitApp, GanitConfig};
use ganit_api::{ApiConfig, AppState, build_app};
use serde_json::{Value, json};
use tower::util::ServiceExt;

/// Create a test application with default limits
fn create_test_app() -> axum::Router {
    build_app(AppState::default(), &ApiConfig::default())
}

/// Helper function to make JSON requests
async fn json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let request = if let Some(body) = body {
        request_builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body_value = if body_bytes.is_empty() {
        json!(null)
    } else {
        match serde_json::from_slice(&body_bytes) {
            Ok(json) => json,
            Err(_) => json!(String::from_utf8_lossy(&body_bytes).to_string()),
        }
    };

    (status, body_value)
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let (status, body) = json_request(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ganit-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["max_columns"], 9);
    assert_eq!(body["require_place_values"], true);
    assert_eq!(body["operations"], json!(["addition", "subtraction"]));
}

#[tokio::test]
async fn test_create_addition_grid() {
    let app = create_test_app();

    let request = json!({
        "operation": "addition",
        "left": "555",
        "right": "456"
    });
    let (status, body) = json_request(&app, "POST", "/api/v1/grids", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "addition");
    assert_eq!(body["num_cols"], 3);
    assert_eq!(body["total_cols"], 4);
    assert_eq!(body["header"], json!(["H", "T", "O"]));
    assert_eq!(body["rows"][0], json!(["1", "1", "1", ""]));
    assert_eq!(body["rows"][2], json!(["+", "4", "5", "6"]));
    assert_eq!(body["result"], "1011");
}

#[tokio::test]
async fn test_create_subtraction_grid_with_padding() {
    let app = create_test_app();

    let request = json!({
        "operation": "Subtraction",
        "left": "103",
        "right": "59",
        "num_cols": 3
    });
    let (status, body) = json_request(&app, "POST", "/api/v1/grids", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"][0], json!(["", "", "9", "13"]));
    assert_eq!(body["rows"][2], json!(["-", "", "5", "9"]));
    assert_eq!(body["result"], "44");
}

#[tokio::test]
async fn test_create_grid_rejects_bad_input() {
    let app = create_test_app();

    let (status, body) = json_request(
        &app,
        "POST",
        "/api/v1/grids",
        Some(json!({"operation": "addition", "left": "12a", "right": "5"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = json_request(
        &app,
        "POST",
        "/api/v1/grids",
        Some(json!({"operation": "division", "left": "12", "right": "5"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = json_request(
        &app,
        "POST",
        "/api/v1/grids",
        Some(json!({"operation": "multiplication", "left": "12", "right": "5"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_grid_rejects_too_many_columns() {
    let app = create_test_app();

    for num_cols in [json!(10), json!(u64::MAX)] {
        let request = json!({
            "operation": "addition",
            "left": "1",
            "right": "1",
            "num_cols": num_cols
        });
        let (status, body) = json_request(&app, "POST", "/api/v1/grids", Some(request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid column count")
        );
    }
}

#[tokio::test]
async fn test_create_subtraction_worksheet() {
    let app = create_test_app();

    let request = json!({
        "operation": "subtraction",
        "left": "103",
        "right": "59"
    });
    let (status, body) = json_request(&app, "POST", "/api/v1/worksheets", Some(request)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["answer"], "44");
    assert_eq!(body["steps"].as_array().unwrap().len(), 4);
    assert_eq!(body["walkthrough"].as_array().unwrap().len(), 3);
    assert_eq!(body["walkthrough"][0]["place"], "ones");
    assert_eq!(body["walkthrough"][0]["carry_out"], 1);
    assert!(body["rendered"].as_str().unwrap().contains("13"));
}

#[tokio::test]
async fn test_worksheet_rejects_underflow() {
    let app = create_test_app();

    let request = json!({
        "operation": "subtraction",
        "left": "59",
        "right": "103"
    });
    let (status, body) = json_request(&app, "POST", "/api/v1/worksheets", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "For subtraction, the first number must be greater than or equal to the second number"
    );
}

#[tokio::test]
async fn test_worksheet_respects_column_limit() {
    let ganit = GanitApp::builder()
        .config(GanitConfig {
            max_columns: 3,
            ..Default::default()
        })
        .build()
        .unwrap();
    let app = build_app(AppState::new(ganit), &ApiConfig::default());

    let request = json!({
        "operation": "addition",
        "left": "1234",
        "right": "1"
    });
    let (status, _) = json_request(&app, "POST", "/api/v1/worksheets", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_place_values() {
    let app = create_test_app();

    let (status, body) = json_request(&app, "GET", "/api/v1/place-values", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 9);
    assert_eq!(body["place_values"][0]["abbreviation"], "O");
    assert_eq!(body["place_values"][5]["name"], "lakh");
    assert_eq!(body["place_values"][8]["abbreviation"], "TC");
}

#[tokio::test]
async fn test_swagger_can_be_disabled() {
    let app = create_test_app();
    let (status, _) = json_request(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let config = ApiConfig {
        enable_swagger: false,
        ..Default::default()
    };
    let app = build_app(AppState::default(), &config);
    let (status, _) = json_request(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
