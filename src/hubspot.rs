use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::models::{
    CreateRecordRequest, CustomObjectRecord, ListRecordsResponse, RECORD_PROPERTIES,
    RecordProperties,
};

/// Any failure talking to the HubSpot API
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HubSpot API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Operations the front end needs from the CRM
#[async_trait]
pub trait CrmClient: Send + Sync {
    /// Fetch all custom object records with the fixed property selection
    async fn list_records(&self) -> Result<Vec<CustomObjectRecord>, RemoteError>;

    /// Create a custom object record from the given properties
    async fn create_record(
        &self,
        properties: &RecordProperties,
    ) -> Result<CustomObjectRecord, RemoteError>;
}

/// Shareable HubSpot CRM objects client
#[derive(Clone)]
pub struct HubSpotClient {
    http: Client,
    base_url: String,
    access_token: String,
    object_type: String,
}

impl HubSpotClient {
    /// Create a new client from configuration
    ///
    /// The underlying connection pool is built once and reused by every request.
    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::info!(
            "HubSpot client ready for object type {} at {}",
            config.hubspot_object_type,
            config.hubspot_api_base_url
        );

        Ok(Self {
            http,
            base_url: config.hubspot_api_base_url.trim_end_matches('/').to_string(),
            access_token: config.hubspot_access_token.clone(),
            object_type: config.hubspot_object_type.clone(),
        })
    }

    fn objects_url(&self) -> String {
        format!("{}/crm/v3/objects/{}", self.base_url, self.object_type)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RemoteError> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            serde_json::from_slice(&bytes).map_err(|e| RemoteError::Deserialization(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RemoteError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl CrmClient for HubSpotClient {
    async fn list_records(&self) -> Result<Vec<CustomObjectRecord>, RemoteError> {
        let response = self
            .http
            .get(self.objects_url())
            .query(&[("properties", RECORD_PROPERTIES.join(","))])
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let list: ListRecordsResponse = self.handle_response(response).await?;

        tracing::debug!("Fetched {} {} records", list.results.len(), self.object_type);
        Ok(list.results)
    }

    async fn create_record(
        &self,
        properties: &RecordProperties,
    ) -> Result<CustomObjectRecord, RemoteError> {
        let response = self
            .http
            .post(self.objects_url())
            .bearer_auth(&self.access_token)
            .json(&CreateRecordRequest { properties })
            .send()
            .await?;

        let record: CustomObjectRecord = self.handle_response(response).await?;

        tracing::debug!("Created {} record with id: {}", self.object_type, record.id);
        Ok(record)
    }
}
