//! Tests for the monthly revenue endpoint.

use axum_test::TestServer;
use crm_core::BookingStatus;
use integration_tests::fixtures::booking;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn test_single_month_example() {
    let ctx = TestContext::empty();
    ctx.source.set_bookings(vec![
        booking("Ann", "Wedding", "2024-07-01", BookingStatus::Confirmed),
        booking("Bob", "Meeting", "2024-07-15", BookingStatus::Pending),
    ]);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/analytics/revenue").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let months = body["monthlyRevenue"].as_array().expect("monthlyRevenue array");
    assert_eq!(months.len(), 1);

    let july = &months[0];
    assert_eq!(july["month"], "Jul 2024");
    assert_eq!(july["monthNum"], 7);
    assert_eq!(july["year"], 2024);
    assert_eq!(july["confirmed"], 5000.0);
    assert_eq!(july["pending"], 1000.0);
    assert_eq!(july["total"], 6000.0);
}

#[tokio::test]
async fn test_months_sorted_ascending() {
    let ctx = TestContext::with_sample_data();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/analytics/revenue").await.json();
    let months = body["monthlyRevenue"].as_array().expect("monthlyRevenue array");
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["month"], "Jul 2024");
    assert_eq!(months[1]["month"], "Aug 2024");

    // July: confirmed wedding + pending corporate.
    assert_eq!(months[0]["confirmed"], 5000.0);
    assert_eq!(months[0]["pending"], 3000.0);
    assert_eq!(months[0]["total"], 8000.0);
}

#[tokio::test]
async fn test_cancelled_inflates_total_only() {
    let ctx = TestContext::empty();
    ctx.source.set_bookings(vec![
        booking("Ann", "Wedding", "2024-07-01", BookingStatus::Confirmed),
        booking("Bob", "Conference", "2024-07-02", BookingStatus::Cancelled),
    ]);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/analytics/revenue").await.json();
    let july = &body["monthlyRevenue"][0];
    assert_eq!(july["confirmed"], 5000.0);
    assert_eq!(july["pending"], 0.0);
    // Cancelled bookings still count toward projected/total.
    assert_eq!(july["total"], 9000.0);
}

#[tokio::test]
async fn test_no_bookings_yields_empty_list() {
    let ctx = TestContext::empty();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/analytics/revenue").await.json();
    assert_eq!(body["monthlyRevenue"].as_array().unwrap().len(), 0);
}
