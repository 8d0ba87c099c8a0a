//! Tests for the time insights endpoint.

use axum_test::TestServer;
use crm_core::Channel;
use integration_tests::fixtures::interaction;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn test_empty_data_yields_no_insights() {
    let ctx = TestContext::empty();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/analytics/time-insights").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["insights"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_sample_dataset_patterns() {
    let ctx = TestContext::with_sample_data();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/analytics/time-insights").await.json();
    let insights = body["insights"].as_array().unwrap();

    assert!(insights.len() <= 5);

    // Both of Sarah's wedding calls landed Friday 14:00: the busiest-day
    // pass, the peak-hour pass, and the day+hour pass all see them.
    let patterns: Vec<&str> = insights
        .iter()
        .map(|i| i["pattern"].as_str().unwrap())
        .collect();
    assert!(patterns.contains(&"Friday"));
    assert!(patterns.contains(&"14:00"));
    assert!(patterns.contains(&"Friday 14:00"));

    let friday = insights
        .iter()
        .find(|i| i["pattern"] == "Friday")
        .unwrap();
    assert_eq!(friday["frequency"], 2);
    assert!(friday["description"].as_str().unwrap().contains("Wedding"));
    // 2 of 3 dated interactions.
    let pct = friday["percentage"].as_f64().unwrap();
    assert!((pct - 200.0 / 3.0).abs() < 1e-9);

    // Ranked descending by frequency.
    let freqs: Vec<u64> = insights
        .iter()
        .map(|i| i["frequency"].as_u64().unwrap())
        .collect();
    let mut sorted = freqs.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(freqs, sorted);
}

#[tokio::test]
async fn test_never_more_than_five_insights() {
    let ctx = TestContext::empty();
    let mut interactions = Vec::new();
    for day in 1..=7 {
        for hour in [9, 12, 15, 18] {
            for n in 0..2 {
                let mut i = interaction(
                    &format!("c{day}-{hour}-{n}"),
                    &format!("2024-07-{day:02}T{hour:02}:00:00Z"),
                    Channel::Call,
                );
                i.event_type = Some("Meeting".into());
                interactions.push(i);
            }
        }
    }
    ctx.source.set_interactions(interactions);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/analytics/time-insights").await.json();
    let insights = body["insights"].as_array().unwrap();
    assert!(insights.len() <= 5);
    assert!(!insights.is_empty());
}

#[tokio::test]
async fn test_singleton_slots_never_reported() {
    let ctx = TestContext::empty();
    let mut a = interaction("Ann", "2024-07-05T10:00:00Z", Channel::Call);
    a.event_type = Some("Wedding".into());
    let mut b = interaction("Bob", "2024-07-06T11:00:00Z", Channel::Chat);
    b.event_type = Some("Meeting".into());
    ctx.source.set_interactions(vec![a, b]);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body: serde_json::Value = server.get("/analytics/time-insights").await.json();
    for insight in body["insights"].as_array().unwrap() {
        let pattern = insight["pattern"].as_str().unwrap();
        // Slot patterns look like "Friday 10:00"; none should appear
        // when every slot has a single interaction.
        assert!(
            !(pattern.contains(' ') && pattern.contains(':')),
            "unexpected slot insight: {pattern}"
        );
    }
}
