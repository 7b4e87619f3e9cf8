use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::hubspot::RemoteError;

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Error type for the page routes
///
/// Upstream detail is logged here and never shown to the caller; every variant
/// becomes an opaque plain-text 500.
#[derive(Debug)]
pub enum ApiError {
    /// Listing records from HubSpot failed
    ListRecords(RemoteError),
    /// Creating a record in HubSpot failed
    CreateRecord(RemoteError),
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::ListRecords(_) => "Error fetching custom object records.",
            ApiError::CreateRecord(_) => "Error creating custom object record.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.public_message();

        match &self {
            ApiError::ListRecords(RemoteError::Api { status, body })
            | ApiError::CreateRecord(RemoteError::Api { status, body }) => {
                tracing::error!(upstream_status = status, upstream_body = %body, "{}", message);
            }
            ApiError::ListRecords(err) | ApiError::CreateRecord(err) => {
                tracing::error!(error = %err, "{}", message);
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
