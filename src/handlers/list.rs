use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use crate::views::{self, HOMEPAGE_TITLE};
use axum::{extract::State, response::Html};

/// GET / handler - Render all custom object records as a table
///
/// Fetches every record from HubSpot with the fixed property selection. No
/// pagination or filtering.
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "HTML table of custom object records", content_type = "text/html", body = String),
        (status = 500, description = "HubSpot request failed", content_type = "text/plain", body = String)
    ),
    tag = "pages"
)]
pub async fn list_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let records = state
        .crm
        .list_records()
        .await
        .map_err(ApiError::ListRecords)?;

    tracing::info!(
        "Listed {} {} records",
        records.len(),
        state.config.hubspot_object_type
    );

    Ok(Html(views::render_homepage(HOMEPAGE_TITLE, &records)))
}
