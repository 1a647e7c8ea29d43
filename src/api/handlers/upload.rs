use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use bytes::Bytes;
use maud::Markup;
use std::sync::Arc;
use tracing::info;

use crate::api::errors::ApiError;
use crate::api::pages;
use crate::application::use_cases::IngestImageUseCase;

/// GET /
/// Show the upload form.
pub async fn upload_form_handler() -> Markup {
    pages::upload_page()
}

/// POST /
/// Ingest a multipart upload (`image` file field, `message` text field)
/// and redirect to the view page for the resulting content key.
pub async fn upload_handler(
    State(use_case): State<Arc<IngestImageUseCase>>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut image_bytes: Option<Bytes> = None;
    let mut message = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("unreadable upload: {}", e)))?;
                image_bytes = Some(bytes);
            }
            Some("message") => {
                message = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("unreadable message: {}", e)))?;
            }
            _ => {}
        }
    }

    let bytes = image_bytes.ok_or_else(|| ApiError::bad_request("missing image field"))?;
    if bytes.is_empty() {
        return Err(ApiError::bad_request("empty image upload"));
    }

    let key = use_case.execute(bytes.to_vec(), message).await?;
    info!(%key, "upload ingested");

    Ok(Redirect::to(&format!("/view?id={}", key)))
}
