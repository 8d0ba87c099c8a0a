//! Tests for the channel performance endpoint.

use axum_test::TestServer;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn test_zero_interactions_zeroed_channels() {
    let ctx = TestContext::empty();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/analytics/channels").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let channels = body["channelPerformance"]
        .as_array()
        .expect("channelPerformance array");
    assert_eq!(channels.len(), 3);

    let names: Vec<&str> = channels
        .iter()
        .map(|c| c["channel"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Call", "Chat", "Web Form"]);

    for channel in channels {
        assert_eq!(channel["total"], 0);
        assert_eq!(channel["converted"], 0);
        assert_eq!(channel["conversionRate"], 0.0);
        assert_eq!(channel["avgRevenue"], 0.0);
        assert_eq!(channel["totalRevenue"], 0.0);
    }
}

#[tokio::test]
async fn test_conversions_over_sample_dataset() {
    let ctx = TestContext::with_sample_data();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/analytics/channels").await.json();
    let channels = body["channelPerformance"].as_array().unwrap();

    // Sarah called twice and converted (wedding booking); Mo chatted
    // once and converted (pending corporate booking still counts).
    let call = &channels[0];
    assert_eq!(call["total"], 2);
    assert_eq!(call["converted"], 1);
    assert_eq!(call["conversionRate"], 50.0);
    assert_eq!(call["totalRevenue"], 5000.0);
    assert_eq!(call["avgRevenue"], 5000.0);

    let chat = &channels[1];
    assert_eq!(chat["total"], 1);
    assert_eq!(chat["converted"], 1);
    assert_eq!(chat["conversionRate"], 100.0);
    assert_eq!(chat["totalRevenue"], 3000.0);

    // Web Form row is present even with no traffic.
    assert_eq!(channels[2]["channel"], "Web Form");
    assert_eq!(channels[2]["total"], 0);
}
