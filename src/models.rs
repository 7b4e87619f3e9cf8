use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Internal names of the custom object properties this app reads and writes
pub const RECORD_PROPERTIES: [&str; 4] = ["name", "species", "bio", "dog"];

/// Custom object properties, used both as the submitted form and the create payload
///
/// Fields absent from the form are left out of the JSON body instead of being sent as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecordProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog: Option<String>,
}

/// A custom object record as returned by the CRM objects API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObjectRecord {
    pub id: String,
    pub properties: RecordProperties,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
}

/// Envelope of the list endpoint; `paging` and other keys are ignored
#[derive(Debug, Deserialize)]
pub struct ListRecordsResponse {
    pub results: Vec<CustomObjectRecord>,
}

/// Body of the create endpoint
#[derive(Debug, Serialize)]
pub struct CreateRecordRequest<'a> {
    pub properties: &'a RecordProperties,
}
