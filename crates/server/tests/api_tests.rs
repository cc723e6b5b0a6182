//! Integration tests for the logo-forge HTTP API.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use logo_forge_server::{create_router, AppState, ServerConfig};

fn app() -> Router {
    create_router(AppState::new(ServerConfig::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn post_generate(app: &Router, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn logo_count(body: &Value) -> usize {
    body["logos"].as_array().unwrap().len()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_generate_requested_count() {
    let (status, body) = post_generate(&app(), json!({ "name": "Acme", "count": 5 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Acme");
    assert_eq!(logo_count(&body), 5);
    for logo in body["logos"].as_array().unwrap() {
        assert_eq!(logo["name"], "Acme");
        assert_eq!(logo["initials"], "A");
    }
}

#[tokio::test]
async fn test_generate_clamps_count() {
    let app = app();
    let (_, body) = post_generate(&app, json!({ "name": "Acme", "count": 50 })).await;
    assert_eq!(logo_count(&body), 12);
    let (_, body) = post_generate(&app, json!({ "name": "Acme", "count": -3 })).await;
    assert_eq!(logo_count(&body), 1);
}

#[tokio::test]
async fn test_generate_default_count() {
    let app = app();
    let (_, body) = post_generate(&app, json!({ "name": "Acme", "count": 0 })).await;
    assert_eq!(logo_count(&body), 9);
    let (_, body) = post_generate(&app, json!({ "name": "Acme" })).await;
    assert_eq!(logo_count(&body), 9);
    let (_, body) = post_generate(&app, json!({ "name": "Acme", "count": "many" })).await;
    assert_eq!(logo_count(&body), 9);
}

#[tokio::test]
async fn test_generate_uses_configured_default_count() {
    let config = ServerConfig {
        default_count: 3,
        ..ServerConfig::default()
    };
    let app = create_router(AppState::new(config));
    let (_, body) = post_generate(&app, json!({ "name": "Acme" })).await;
    assert_eq!(logo_count(&body), 3);
}

#[tokio::test]
async fn test_generate_trims_and_truncates_name() {
    let long = "x".repeat(80);
    let app = app();
    let (_, body) = post_generate(&app, json!({ "name": "  Nexus Labs  ", "count": 1 })).await;
    assert_eq!(body["name"], "Nexus Labs");
    assert_eq!(body["logos"][0]["initials"], "NL");
    let (status, body) = post_generate(&app, json!({ "name": long, "count": 1 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"].as_str().unwrap().chars().count(), 50);
}

#[tokio::test]
async fn test_generate_blank_name_is_bad_request() {
    let app = app();
    for body in [json!({ "name": "   " }), json!({}), json!({ "name": 42 })] {
        let (status, body) = post_generate(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert!(body.get("logos").is_none());
    }
}

#[tokio::test]
async fn test_generate_non_json_is_bad_request() {
    let (status, body) = send(
        &app(),
        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("Content-Type", "application/json")
            .body(Body::from("name=Acme"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_generate_fixed_filters_pass_through() {
    let filters = json!({
        "paletteType": "ocean",
        "shapeStyle": "hexagon",
        "fontStyle": "mono",
        "effect": "neon",
        "layoutMode": "stacked",
        "pattern": "grid",
    });
    let (status, body) =
        post_generate(&app(), json!({ "name": "Acme", "count": 4, "filters": filters })).await;
    assert_eq!(status, StatusCode::OK);
    for logo in body["logos"].as_array().unwrap() {
        assert_eq!(logo["paletteCategory"], "ocean");
        assert_eq!(logo["shape"], "hexagon");
        assert_eq!(logo["fontStyle"], "mono");
        assert_eq!(logo["effect"], "neon");
        assert_eq!(logo["layout"], "stacked");
        assert_eq!(logo["pattern"], "grid");
    }
}

#[tokio::test]
async fn test_generate_unknown_filter_values_are_random() {
    let (status, body) = post_generate(
        &app(),
        json!({ "name": "Acme", "count": 2, "filters": { "shapeStyle": "blob", "effect": 7 } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logo_count(&body), 2);
}

#[tokio::test]
async fn test_generate_malformed_filters_is_generic_500() {
    let (status, body) =
        post_generate(&app(), json!({ "name": "Acme", "filters": "neon please" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to generate logos" }));
}

#[tokio::test]
async fn test_generate_rejects_other_methods() {
    let app = app();
    for method in ["GET", "PUT", "DELETE"] {
        let (status, body) = send(
            &app,
            Request::builder()
                .method(method)
                .uri("/api/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert!(body["error"].is_string(), "{method}");
    }
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("Origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_list_filters() {
    let (status, body) = get(&app(), "/api/filters").await;
    assert_eq!(status, StatusCode::OK);
    for key in ["palettes", "shapes", "fonts", "effects", "layouts", "patterns"] {
        assert_eq!(body[key].as_array().unwrap().len(), 8, "{key}");
    }
    assert!(body["shapes"].as_array().unwrap().contains(&json!("infinity")));
    assert!(!body["shapes"].as_array().unwrap().contains(&json!("random")));
}

#[tokio::test]
async fn test_list_palettes() {
    let (status, body) = get(&app(), "/api/palettes").await;
    assert_eq!(status, StatusCode::OK);
    let palettes = body.as_array().unwrap();
    assert_eq!(palettes.len(), 8);
    for entry in palettes {
        assert!(entry["key"].is_string());
        assert!(entry["label"].is_string());
        let primary = entry["preview"]["primary"].as_str().unwrap();
        assert!(primary.starts_with('#') && primary.len() == 7, "{primary}");
    }
}
