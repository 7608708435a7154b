use anyhow::Context;

use spicerack_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spicerack_observability::init();

    let config = AppConfig::from_env().context("failed to read configuration")?;
    tracing::info!(data_path = %config.data_path.display(), shelves = %config.shelf_count, "starting");

    let app = spicerack_api::app::build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
