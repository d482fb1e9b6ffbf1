use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scamshield::classifier::{Pipeline, TrainOptions};
use scamshield::config::Config;
use scamshield::{create_router, dataset, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scamshield=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("ScamShield server starting...");
    tracing::info!(
        "Datasets: {} + {}",
        config.safe_data_path,
        config.scam_data_path
    );

    // Load the labeled corpus; a missing or malformed dataset is fatal.
    let corpus = dataset::load_corpus(&config.safe_data_path, &config.scam_data_path)
        .context("Failed to load training data")?;

    // Fit the classifier once; it stays frozen for the process lifetime.
    let pipeline =
        Pipeline::fit(&corpus, &TrainOptions::default()).context("Failed to train classifier")?;

    let summary = pipeline.summary();
    tracing::info!(
        "Classifier trained: {} examples ({} train / {} holdout), {} features",
        summary.corpus_size,
        summary.training_size,
        summary.holdout_size,
        summary.vocabulary_size,
    );
    if let Some(accuracy) = summary.holdout_accuracy {
        tracing::info!("Holdout accuracy: {:.1}%", accuracy * 100.0);
    }

    // Build application state
    let state = AppState {
        pipeline: Arc::new(pipeline),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
