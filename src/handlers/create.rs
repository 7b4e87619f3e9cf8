use crate::error::ApiError;
use crate::models::RecordProperties;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

/// POST /update-cobj handler - Create a custom object record from the form
///
/// Form values are forwarded as-is; HubSpot enforces its own schema. Identical
/// submissions create separate records.
#[utoipa::path(
    post,
    path = routes::UPDATE_COBJ,
    request_body(content = RecordProperties, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Record created, redirect to the record table"),
        (status = 500, description = "HubSpot request failed", content_type = "text/plain", body = String)
    ),
    tag = "pages"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Form(properties): Form<RecordProperties>,
) -> Result<Response, ApiError> {
    let record = state
        .crm
        .create_record(&properties)
        .await
        .map_err(ApiError::CreateRecord)?;

    tracing::info!(
        "Custom object record created successfully with id: {}",
        record.id
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, routes::HOME)]).into_response())
}
