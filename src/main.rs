use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use pixelbin::{
    api::{create_router, AppState},
    application::{
        ports::{ImageCodec, ImageStore},
        use_cases::{IngestImageUseCase, ServeImageUseCase},
    },
    infrastructure::{codec::JpegCodec, storage::FilesystemStore},
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    info!("Starting pixelbin service");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    // Initialize infrastructure layer
    let store = Arc::new(FilesystemStore::new(config.storage_root.clone()));
    store.init().await?;
    let store: Arc<dyn ImageStore> = store;

    let codec: Arc<dyn ImageCodec> = Arc::new(JpegCodec::new());
    info!("Infrastructure layer initialized");

    // Initialize use cases (application layer)
    let ingest_use_case = Arc::new(IngestImageUseCase::new(
        Arc::clone(&codec),
        Arc::clone(&store),
    ));
    let serve_use_case = Arc::new(ServeImageUseCase::new(
        Arc::clone(&codec),
        Arc::clone(&store),
    ));
    info!("Application layer initialized");

    // Create router
    let state = AppState {
        ingest_use_case,
        serve_use_case,
        max_upload_bytes: config.max_upload_bytes,
    };
    let app = create_router(state);

    // Start server
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
