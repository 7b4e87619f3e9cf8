use crate::config::Config;
use crate::hubspot::CrmClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub crm: Arc<dyn CrmClient>,
    pub config: Arc<Config>,
}
