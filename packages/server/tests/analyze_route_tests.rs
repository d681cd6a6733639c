//! HTTP-level tests for the analyze and health endpoints.

mod common;

use axum::http::StatusCode;
use bias_radar_core::kernel::{
    MockNewsSource, MockSentimentScorer, NewsQuery, NewsSourceError, TestDependencies,
};
use serde_json::json;

use common::*;

#[tokio::test]
async fn health_reports_ok() {
    let harness = TestHarness::new(&TestDependencies::new());

    let (status, body) = harness.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn empty_result_returns_empty_sources() {
    let deps = TestDependencies::new().mock_news(MockNewsSource::new().with_articles(vec![]));
    let harness = TestHarness::new(&deps);

    let (status, body) = harness
        .post_json("/api/analyze", json!({ "topic": "  quantum widgets  " }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "topic": "quantum widgets", "language": "en", "sources": [] })
    );
}

#[tokio::test]
async fn blank_topic_is_rejected() {
    let deps = TestDependencies::new();
    let harness = TestHarness::new(&deps);

    let (status, body) = harness
        .post_json("/api/analyze", json!({ "topic": "   " }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Topic is required");
    assert!(deps.news_source.calls().is_empty());
}

#[tokio::test]
async fn query_is_trimmed_and_page_size_clamped() {
    let deps = TestDependencies::new();
    let harness = TestHarness::new(&deps);

    harness
        .post_json(
            "/api/analyze",
            json!({ "topic": " elections ", "language": "fr", "page_size": 1000 }),
        )
        .await;
    harness
        .post_json("/api/analyze", json!({ "topic": "elections", "page_size": 2 }))
        .await;
    harness
        .post_json("/api/analyze", json!({ "topic": "elections" }))
        .await;

    assert_eq!(
        deps.news_source.calls(),
        vec![
            NewsQuery {
                topic: "elections".into(),
                language: "fr".into(),
                page_size: 100,
            },
            NewsQuery {
                topic: "elections".into(),
                language: "en".into(),
                page_size: 5,
            },
            NewsQuery {
                topic: "elections".into(),
                language: "en".into(),
                page_size: 40,
            },
        ]
    );
}

#[tokio::test]
async fn sources_ranked_with_summary_fields() {
    let news = MockNewsSource::new().with_articles(vec![
        article("reuters", "Reuters", "Growth and progress"),
        article("bbc-news", "BBC News", "Worry over risk"),
        article("bbc-news", "BBC News", "Panic spreads"),
        anonymous_article("Council schedules vote"),
    ]);
    let scorer = MockSentimentScorer::new()
        .with_score("Worry over risk", -0.5)
        .with_score("Panic spreads", -0.3)
        .with_default(0.4);
    let deps = TestDependencies::new()
        .mock_news(news)
        .mock_sentiment(scorer);
    let harness = TestHarness::new(&deps);

    let (status, body) = harness
        .post_json("/api/analyze", json!({ "topic": "economy" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["topic"], "economy");

    let sources = body["sources"].as_array().unwrap();
    let ids: Vec<&str> = sources.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["bbc-news", "reuters", "unknown"]);

    let bbc = &sources[0];
    assert_eq!(bbc["name"], "BBC News");
    assert_eq!(bbc["political_lean"], "center");
    assert_eq!(bbc["article_count"], 2);
    assert!((bbc["avg_sentiment"].as_f64().unwrap() - -0.4).abs() < 1e-9);
    assert_eq!(bbc["dominant_emotion"], "fear");
    assert_eq!(bbc["emotion_intensity"], 1.0);

    let reuters = &sources[1];
    assert_eq!(reuters["dominant_emotion"], "joy");
    assert_eq!(reuters["avg_sentiment"], 0.4);

    let unknown = &sources[2];
    assert_eq!(unknown["political_lean"], "unknown");
    assert_eq!(unknown["dominant_emotion"], "neutral");
    assert_eq!(unknown["emotion_intensity"], 0.0);
}

#[tokio::test]
async fn unreachable_provider_maps_to_503() {
    let deps = TestDependencies::new().mock_news(
        MockNewsSource::new().with_error(NewsSourceError::Unreachable("connect timeout".into())),
    );
    let harness = TestHarness::new(&deps);

    let (status, body) = harness
        .post_json("/api/analyze", json!({ "topic": "economy" }))
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "Failed to reach NewsAPI");
}

#[tokio::test]
async fn provider_http_error_passes_status_through() {
    let deps = TestDependencies::new().mock_news(MockNewsSource::new().with_error(
        NewsSourceError::Http {
            status: 401,
            message: Some("Your API key is invalid or incorrect.".into()),
        },
    ));
    let harness = TestHarness::new(&deps);

    let (status, body) = harness
        .post_json("/api/analyze", json!({ "topic": "economy" }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["detail"],
        "NewsAPI error: Your API key is invalid or incorrect."
    );
}

#[tokio::test]
async fn provider_status_error_maps_to_502() {
    let deps = TestDependencies::new().mock_news(
        MockNewsSource::new().with_error(NewsSourceError::Provider("rate limited".into())),
    );
    let harness = TestHarness::new(&deps);

    let (status, body) = harness
        .post_json("/api/analyze", json!({ "topic": "economy" }))
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["detail"], "NewsAPI error: rate limited");
}

#[tokio::test]
async fn concurrent_requests_do_not_share_accumulators() {
    let news = MockNewsSource::new()
        .with_articles(vec![article("cnn", "CNN", "One"), article("cnn", "CNN", "Two")])
        .with_articles(vec![article("cnn", "CNN", "Three")]);
    let deps = TestDependencies::new().mock_news(news);
    let harness = TestHarness::new(&deps);

    let (first, second) = tokio::join!(
        harness.post_json("/api/analyze", json!({ "topic": "a" })),
        harness.post_json("/api/analyze", json!({ "topic": "b" })),
    );

    let mut counts = vec![
        first.1["sources"][0]["article_count"].as_u64().unwrap(),
        second.1["sources"][0]["article_count"].as_u64().unwrap(),
    ];
    counts.sort();
    assert_eq!(counts, vec![1, 2]);
}
