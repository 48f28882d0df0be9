use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{Level, info};

use server::config::AppConfig;
use server::state::AppState;
use server::store::SubmissionStore;
use server::uploads::UploadSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let store = SubmissionStore::open(&config.storage.store_file)?;
    let state = AppState {
        store: Arc::new(store),
        uploads: Arc::new(UploadSink::new(&config.storage.upload_dir)),
        config: config.clone(),
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = server::build_router(state);

    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
