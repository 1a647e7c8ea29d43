use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::use_cases::ServeImageUseCase;
use crate::domain::value_objects::ContentKey;

#[derive(Deserialize)]
pub struct ImageQuery {
    id: String,
}

/// GET /img?id={key}
/// Serve the stored image re-encoded as canonical JPEG.
pub async fn image_handler(
    State(use_case): State<Arc<ServeImageUseCase>>,
    Query(query): Query<ImageQuery>,
) -> Result<Response, ApiError> {
    let key = ContentKey::from_hex(&query.id)?;

    let bytes = use_case.render(&key).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(header::CONTENT_LENGTH, bytes.len().to_string())
        .body(Body::from(bytes))
        .map_err(|e| ApiError::internal_error(format!("failed to build response: {}", e)))
}
