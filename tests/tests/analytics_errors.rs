//! Tests for the upstream-failure contract.
//!
//! Every analytics endpoint must answer a failing fetch with HTTP 500
//! and a bare `{ "error": string }` body; no partial results.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::setup::TestContext;

const ENDPOINTS: [&str; 5] = [
    "/analytics/funnel",
    "/analytics/revenue",
    "/analytics/channels",
    "/analytics/time-insights",
    "/analytics/digest",
];

#[tokio::test]
async fn test_all_endpoints_return_500_on_fetch_failure() {
    let router = TestContext::failing("sheet unreachable");
    let server = TestServer::new(router).expect("Failed to create test server");

    for endpoint in ENDPOINTS {
        let response = server.get(endpoint).await;
        assert_eq!(
            response.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{endpoint} should return 500"
        );

        let body: serde_json::Value = response.json();
        let error = body["error"].as_str().unwrap_or_default();
        assert!(
            error.contains("sheet unreachable"),
            "{endpoint} error body should carry the upstream message, got {body}"
        );
        // Exactly the documented shape: a single error field.
        assert_eq!(body.as_object().unwrap().len(), 1, "{endpoint} body: {body}");
    }
}

#[tokio::test]
async fn test_health_endpoints_unaffected_by_failing_source() {
    let router = TestContext::failing("sheet unreachable");
    let server = TestServer::new(router).expect("Failed to create test server");

    // Liveness never depends on the data source.
    let response = server.get("/health/live").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // The full health report still answers 200 with a status body.
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
