//! HTTP boundary: request/response envelopes and route handlers.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::{OpenApi, ToSchema};

use crate::assembler::{self, ReviewRecord};
use crate::corpus::ReviewSource;
use crate::error::ApiError;
use crate::sheets::ReviewSink;

pub const SERVICE_NAME: &str = "Product Review Sentiment Scraper";

/// Shared service context. Components sit behind trait objects so tests can
/// substitute a corpus stub or a no-op sink.
pub struct AppState {
    pub source: Arc<dyn ReviewSource>,
    pub sink: Arc<dyn ReviewSink>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScrapeRequest {
    pub product_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScrapeResponse {
    pub success: bool,
    pub data: Vec<ReviewRecord>,
    pub message: String,
    pub total_reviews: usize,
    pub google_sheets_saved: bool,
    pub sheet_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
    pub google_sheets: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub google_sheets_configured: bool,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointIndex {
    pub scrape: String,
    pub health: String,
    pub docs: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(scrape_reviews, health_check, root),
    components(schemas(
        ScrapeRequest,
        ScrapeResponse,
        HealthResponse,
        ServiceInfo,
        EndpointIndex,
        crate::assembler::ReviewRecord,
        crate::sentiment::SentimentLabel
    )),
    tags(
        (name = "reviews", description = "Review scraping and sentiment analysis"),
        (name = "service", description = "Service metadata and health")
    )
)]
pub struct ApiDoc;

/// Builds the service router. Swagger UI is mounted separately in `main`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/scrape", post(scrape_reviews))
        .route("/health", get(health_check))
        .route("/", get(root))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Scrapes (from the static corpus), scores and returns a review batch, then
/// best-effort persists it to Google Sheets. Sink failure never fails the
/// request; it only flips `google_sheets_saved`.
#[utoipa::path(
    post,
    path = "/scrape",
    request_body = ScrapeRequest,
    responses(
        (status = 200, description = "Reviews scraped and scored", body = ScrapeResponse),
        (status = 400, description = "Invalid product URL"),
        (status = 404, description = "No reviews found"),
        (status = 500, description = "Failed to process any reviews")
    ),
    tag = "reviews"
)]
pub async fn scrape_reviews(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    tracing::info!("Starting scrape for URL: {}", request.product_url);

    if request.product_url.trim().is_empty() {
        return Err(ApiError::InvalidProductUrl);
    }

    let raw_reviews = state.source.fetch(&request.product_url);
    if raw_reviews.is_empty() {
        return Err(ApiError::NoReviewsFound);
    }

    let records = assembler::assemble(raw_reviews, state.source.product_name());
    if records.is_empty() {
        // Fetch was non-empty, so every single entry was dropped.
        return Err(ApiError::ProcessingFailed);
    }

    let outcome = state.sink.persist(&records).await;

    let total_reviews = records.len();
    tracing::info!("Successfully processed {total_reviews} reviews");

    Ok(Json(ScrapeResponse {
        success: true,
        message: format!("Successfully scraped and processed {total_reviews} reviews"),
        total_reviews,
        google_sheets_saved: outcome.persisted,
        sheet_url: outcome.locator,
        data: records,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health", body = HealthResponse)),
    tag = "service"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let google_sheets = if state.sink.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        google_sheets: google_sheets.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service metadata", body = ServiceInfo)),
    tag = "service"
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: format!("{SERVICE_NAME} API"),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "active".to_string(),
        google_sheets_configured: state.sink.is_configured(),
        endpoints: EndpointIndex {
            scrape: "/scrape".to_string(),
            health: "/health".to_string(),
            docs: "/docs".to_string(),
        },
    })
}
