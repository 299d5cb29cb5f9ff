//! End-to-end tests driving the router with stubbed pipeline components.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use review_sentiment_api::api::{self, AppState};
use review_sentiment_api::corpus::{RawReview, ReviewSource, SampleCorpus};
use review_sentiment_api::sentiment::label_for;
use review_sentiment_api::sheets::{ReviewSink, SinkOutcome};

/// Sink stub: never configured, never persists, never touches the network.
struct NoopSink;

#[async_trait]
impl ReviewSink for NoopSink {
    fn is_configured(&self) -> bool {
        false
    }

    async fn persist(&self, _records: &[review_sentiment_api::ReviewRecord]) -> SinkOutcome {
        SinkOutcome::skipped()
    }
}

/// Corpus stub returning a canned batch.
struct StubSource(Vec<RawReview>);

impl ReviewSource for StubSource {
    fn fetch(&self, _product_url: &str) -> Vec<RawReview> {
        self.0.clone()
    }

    fn product_name(&self) -> &str {
        "Stub Product"
    }
}

fn app_with(source: impl ReviewSource + 'static) -> axum::Router {
    let state = Arc::new(AppState {
        source: Arc::new(source),
        sink: Arc::new(NoopSink),
    });
    api::router(state)
}

fn scrape_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/scrape")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn test_scrape_returns_full_corpus_batch() {
    let app = app_with(SampleCorpus);

    let response = app
        .oneshot(scrape_request(json!({ "product_url": "https://example.com/x" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["success"], json!(true));
    // The static corpus contains no all-punctuation entries, so every entry
    // survives cleaning.
    assert_eq!(body["total_reviews"], json!(50));
    assert_eq!(body["data"].as_array().unwrap().len(), 50);
    assert_eq!(body["google_sheets_saved"], json!(false));
    assert_eq!(body["sheet_url"], Value::Null);
    assert_eq!(
        body["message"],
        json!("Successfully scraped and processed 50 reviews")
    );

    let first = &body["data"][0];
    assert_eq!(first["product_name"], json!("Sample Electronics Product"));
    assert_eq!(first["rating"], json!(5.0));
    assert!(first["review_text"].as_str().unwrap().starts_with("Excellent"));

    // Every returned label must match its score per the threshold partition.
    for record in body["data"].as_array().unwrap() {
        let score = record["sentiment_score"].as_f64().unwrap();
        let label = record["sentiment_label"].as_str().unwrap();
        assert_eq!(label, label_for(score).to_string());
        assert!((-1.0..=1.0).contains(&score));
    }
}

#[tokio::test]
async fn test_scrape_with_empty_product_url_is_bad_request() {
    let app = app_with(SampleCorpus);

    let response = app
        .oneshot(scrape_request(json!({ "product_url": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], json!("Invalid product URL provided"));
}

#[tokio::test]
async fn test_scrape_with_blank_product_url_is_bad_request() {
    let app = app_with(SampleCorpus);

    let response = app
        .oneshot(scrape_request(json!({ "product_url": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_scrape_with_empty_source_is_not_found() {
    let app = app_with(StubSource(Vec::new()));

    let response = app
        .oneshot(scrape_request(json!({ "product_url": "https://example.com/x" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["detail"], json!("No reviews found for the provided URL"));
}

#[tokio::test]
async fn test_scrape_with_all_entries_failing_is_server_error() {
    // Non-empty fetch where every entry cleans to empty: distinct from the
    // empty-source 404.
    let entries = vec![
        RawReview {
            text: "@@@".to_string(),
            rating: 3,
        },
        RawReview {
            text: "***".to_string(),
            rating: 4,
        },
    ];
    let app = app_with(StubSource(entries));

    let response = app
        .oneshot(scrape_request(json!({ "product_url": "https://example.com/x" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["detail"], json!("Failed to process any reviews"));
}

#[tokio::test]
async fn test_scrape_drops_unclean_entries_but_keeps_order() {
    let entries = vec![
        RawReview {
            text: "Excellent product, love it!".to_string(),
            rating: 5,
        },
        RawReview {
            text: "@#$%".to_string(),
            rating: 3,
        },
        RawReview {
            text: "Terrible quality, very disappointed.".to_string(),
            rating: 1,
        },
    ];
    let app = app_with(StubSource(entries));

    let response = app
        .oneshot(scrape_request(json!({ "product_url": "https://example.com/x" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total_reviews"], json!(2));
    let data = body["data"].as_array().unwrap();
    assert!(data[0]["review_text"].as_str().unwrap().starts_with("Excellent"));
    assert!(data[1]["review_text"].as_str().unwrap().starts_with("Terrible"));
    assert_eq!(data[0]["product_name"], json!("Stub Product"));
}

#[tokio::test]
async fn test_health_reports_sink_state() {
    let app = app_with(SampleCorpus);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["google_sheets"], json!("not_configured"));
    assert_eq!(body["service"], json!("Product Review Sentiment Scraper"));
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_root_reports_service_metadata() {
    let app = app_with(SampleCorpus);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("active"));
    assert_eq!(body["google_sheets_configured"], json!(false));
    assert_eq!(body["endpoints"]["scrape"], json!("/scrape"));
    assert_eq!(body["endpoints"]["health"], json!("/health"));
}
