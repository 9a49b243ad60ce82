use anyhow::{Context, Result};
use tracing::info;

use server::config::Config;
use server::{loader, router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = Config::from_env()?;

    let dataset = loader::load_dataset(&cfg.dataset_path)
        .with_context(|| format!("failed to load {}", cfg.dataset_path.display()))?;
    info!(
        records = dataset.len(),
        path = %cfg.dataset_path.display(),
        "dataset loaded"
    );

    let app = router(AppState::new(dataset, cfg.message.clone()).shared());

    let addr = cfg.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("unable to bind {addr}"))?;
    info!("gitscope-server listening on http://{addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
