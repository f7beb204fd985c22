//! Process entry point: load, fit, assemble, serve.

use anyhow::Context;
use clap::Parser;
use rent_estimator::dataset::RentalDataset;
use rent_estimator::model::{Estimator, LinearEstimator};
use rent_estimator::pipeline::RentPipeline;
use rent_estimator::preprocessing::{FeatureTransformer, FittedTransformer, Transformer};
use rent_estimator::server::{self, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rent-estimator", about = "Monthly rent estimator web UI")]
struct Args {
    /// Historical rental dataset (CSV).
    #[arg(long, default_value = "House_Rent_Dataset.csv")]
    dataset: PathBuf,

    /// Pre-trained estimator artifact.
    #[arg(long, default_value = "rent_model.bin")]
    model: PathBuf,

    /// Address to serve the web UI on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let dataset = RentalDataset::from_csv(&args.dataset)
        .with_context(|| format!("loading dataset from {}", args.dataset.display()))?;
    info!(rows = dataset.len(), cities = dataset.cities().len(), "dataset loaded");

    let features = FeatureTransformer::new()
        .fit(&dataset)
        .context("fitting feature transformer")?;
    info!(width = features.n_features_out(), "feature transformer fitted");

    let estimator = LinearEstimator::load_from_file(&args.model)
        .with_context(|| format!("loading estimator artifact from {}", args.model.display()))?;
    info!(width = estimator.n_features(), "estimator artifact loaded");

    let pipeline =
        RentPipeline::new(features, estimator).context("assembling prediction pipeline")?;

    let state = Arc::new(AppState {
        dataset: Arc::new(dataset),
        pipeline: Arc::new(pipeline),
    });

    let app = server::router(state);
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    info!(addr = %args.listen, "serving rent estimator");

    axum::serve(listener, app).await?;
    Ok(())
}
