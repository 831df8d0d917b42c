use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use talks_api::config::Config;
use talks_api::modules::talks::adapters::outbound::catalog_in_memory::InMemoryTalkCatalog;
use talks_api::modules::talks::core::catalog;
use talks_api::shell::http::router;
use talks_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();
    let talks = catalog::load(&config.data_path);
    tracing::info!(
        count = talks.len(),
        path = %config.data_path.display(),
        "talk catalog loaded"
    );

    let state = AppState {
        talks: Arc::new(InMemoryTalkCatalog::new(talks)),
    };
    let app = router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
