use axum::extract::Query;
use maud::Markup;
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::pages;
use crate::domain::value_objects::ContentKey;

#[derive(Deserialize)]
pub struct ViewQuery {
    id: String,
}

/// GET /view?id={key}
/// HTML page embedding the stored image. The store is not consulted
/// here; an unknown key surfaces when the browser requests /img.
pub async fn view_handler(Query(query): Query<ViewQuery>) -> Result<Markup, ApiError> {
    let key = ContentKey::from_hex(&query.id)?;
    Ok(pages::view_page(key.as_str()))
}
