use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    health_handler, image_handler, upload_form_handler, upload_handler, view_handler,
};
use crate::application::use_cases::{IngestImageUseCase, ServeImageUseCase};

/// Application state container
pub struct AppState {
    pub ingest_use_case: Arc<IngestImageUseCase>,
    pub serve_use_case: Arc<ServeImageUseCase>,
    pub max_upload_bytes: usize,
}

/// Create router with all routes and the upload size limit.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/",
            get(upload_form_handler)
                .post(upload_handler)
                .with_state(Arc::clone(&state.ingest_use_case)),
        )
        .route("/view", get(view_handler))
        .route(
            "/img",
            get(image_handler).with_state(Arc::clone(&state.serve_use_case)),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.max_upload_bytes))
}
