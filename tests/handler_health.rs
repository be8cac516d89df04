mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let pool = common::create_test_pool().await;
    common::insert_test_mapping(&pool, "hlth01", "https://example.com").await;
    let server = common::create_test_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected, 1 mappings");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
}

#[tokio::test]
async fn test_health_store_down() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server.get("/does/not/exist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["Error"], "Short URL not found");
    assert!(json["Message"].is_string());
}

#[tokio::test]
async fn test_store_down_is_500() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server.get("/urls/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["Error"],
        "A database connection error occurred"
    );
}
