//! Tests for the funnel endpoint.

use axum_test::TestServer;
use integration_tests::setup::TestContext;

const STAGES: [&str; 5] = ["New", "Contacted", "Qualified", "Booked", "Completed"];

#[tokio::test]
async fn test_funnel_always_has_five_stages_in_order() {
    let ctx = TestContext::empty();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/analytics/funnel").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let funnel = body["funnel"].as_array().expect("funnel array");
    assert_eq!(funnel.len(), 5);
    for (stage, expected) in funnel.iter().zip(STAGES) {
        assert_eq!(stage["stage"], expected);
        assert_eq!(stage["count"], 0);
        assert_eq!(stage["percentage"], 0.0);
        assert_eq!(stage["dropoff"], 0.0);
        assert_eq!(stage["revenue"], 0.0);
    }
}

#[tokio::test]
async fn test_funnel_over_sample_dataset() {
    let ctx = TestContext::with_sample_data();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/analytics/funnel").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let funnel = body["funnel"].as_array().expect("funnel array");

    // Jen Wu is the only New lead.
    assert_eq!(funnel[0]["count"], 1);
    assert_eq!(funnel[0]["percentage"], 100.0);
    assert_eq!(funnel[0]["dropoff"], 0.0);

    // Mo Adler by status, Sarah Hartley by interaction match.
    assert_eq!(funnel[1]["count"], 2);
    // Contacted outgrows New: dropoff goes negative and is reported
    // as-is. Literal inherited behavior, not a bug.
    assert_eq!(funnel[1]["dropoff"], -100.0);
    assert_eq!(funnel[1]["percentage"], 200.0);

    assert_eq!(funnel[2]["count"], 1);

    // Sarah and Mo both have bookings on record.
    assert_eq!(funnel[3]["count"], 2);

    // Completed counts confirmed bookings directly: Sarah's wedding and
    // the walk-in meeting, which has no lead at all. The stage-4/stage-5
    // asymmetry is intentional.
    assert_eq!(funnel[4]["count"], 2);
    assert_eq!(funnel[4]["revenue"], 5000.0 + 1000.0);
}

#[tokio::test]
async fn test_funnel_is_idempotent() {
    let ctx = TestContext::with_sample_data();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let first: serde_json::Value = server.get("/analytics/funnel").await.json();
    let second: serde_json::Value = server.get("/analytics/funnel").await.json();
    assert_eq!(first, second);
}
