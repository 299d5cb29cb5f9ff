use std::sync::Arc;

use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use review_sentiment_api::api::{self, AppState};
use review_sentiment_api::config::Config;
use review_sentiment_api::corpus::SampleCorpus;
use review_sentiment_api::sheets::GoogleSheetsSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let sink = GoogleSheetsSink::from_config(&config);

    let state = Arc::new(AppState {
        source: Arc::new(SampleCorpus),
        sink: Arc::new(sink),
    });

    let app = api::router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
