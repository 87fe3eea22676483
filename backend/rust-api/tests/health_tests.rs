use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use base64::{engine::general_purpose, Engine as _};
use serial_test::serial;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn health_reports_healthy_with_a_readable_store() {
    let store = common::write_store(
        r#"[{"id": 1, "theme": "Géographie", "question": "Quelle est la capitale de la France ?",
             "answers": {"A": "Paris", "B": "Lyon"}, "correct_answer": "A"}]"#,
    );
    let app = common::create_test_app(&store);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "quizfeed-api");
    assert_eq!(json["dependencies"]["question_store"]["status"], "healthy");
}

#[tokio::test]
async fn health_degrades_when_the_store_is_missing() {
    let missing = std::env::temp_dir().join("quizfeed-health-missing.json");
    let _ = std::fs::remove_file(&missing);
    let app = common::create_test_app(&missing);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(
        json["dependencies"]["question_store"]["status"],
        "unhealthy"
    );
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_requires_basic_auth() {
    std::env::set_var("METRICS_AUTH", "admin:changeme");
    let store = common::write_store("[]");
    let app = common::create_test_app(&store);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_renders_with_valid_credentials() {
    std::env::set_var("METRICS_AUTH", "admin:changeme");
    let store = common::write_store("[]");
    let app = common::create_test_app(&store);

    let credentials = general_purpose::STANDARD.encode("admin:changeme");

    // Two requests: the first primes the HTTP counters, the second must
    // see them in the rendered output.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/metrics")
                    .header("authorization", format!("Basic {}", credentials))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        if text.contains("http_requests_total") {
            return;
        }
    }

    panic!("http_requests_total never showed up in the metrics output");
}
