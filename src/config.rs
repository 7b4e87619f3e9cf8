use std::env;
use std::fmt;
use anyhow::{Context, Result, bail};

pub const DEFAULT_API_BASE_URL: &str = "https://api.hubapi.com";
pub const DEFAULT_OBJECT_NAME: &str = "pets";

#[derive(Clone)]
pub struct Config {
    pub hubspot_access_token: String,
    pub hubspot_api_base_url: String,
    /// Fully qualified custom object type, e.g. `p50294925_pets`
    pub hubspot_object_type: String,
    pub service_port: u16,
    pub service_host: String,
    pub static_dir: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("hubspot_access_token", &"<redacted>")
            .field("hubspot_api_base_url", &self.hubspot_api_base_url)
            .field("hubspot_object_type", &self.hubspot_object_type)
            .field("service_port", &self.service_port)
            .field("service_host", &self.service_host)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    fn from_source<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hubspot_access_token = var("HUBSPOT_ACCESS_TOKEN")
            .context("HUBSPOT_ACCESS_TOKEN environment variable is required")?;

        let hubspot_api_base_url = var("HUBSPOT_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let hubspot_object_type = match var("HUBSPOT_OBJECT_TYPE") {
            Some(object_type) => object_type,
            None => {
                let portal_id = var("HUBSPOT_PORTAL_ID").context(
                    "HUBSPOT_PORTAL_ID environment variable is required when HUBSPOT_OBJECT_TYPE is not set",
                )?;
                let object_name = var("HUBSPOT_OBJECT_NAME")
                    .unwrap_or_else(|| DEFAULT_OBJECT_NAME.to_string());
                qualified_object_type(&portal_id, &object_name)?
            }
        };

        let service_port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let static_dir = var("STATIC_DIR")
            .unwrap_or_else(|| "public".to_string());

        Ok(Config {
            hubspot_access_token,
            hubspot_api_base_url,
            hubspot_object_type,
            service_port,
            service_host,
            static_dir,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  HubSpot API: {}", self.hubspot_api_base_url);
        tracing::info!("  HubSpot object type: {}", self.hubspot_object_type);
        tracing::info!("  Static assets: {}", self.static_dir);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

/// HubSpot names portal-scoped custom objects `p<portal id>_<internal name>`
fn qualified_object_type(portal_id: &str, object_name: &str) -> Result<String> {
    let portal_id = portal_id.trim().trim_start_matches('p');
    if portal_id.is_empty() || !portal_id.chars().all(|c| c.is_ascii_digit()) {
        bail!("HUBSPOT_PORTAL_ID must be numeric, got '{}'", portal_id);
    }
    Ok(format!("p{}_{}", portal_id, object_name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("HUBSPOT_ACCESS_TOKEN", "pat-na1-test"),
        ("HUBSPOT_PORTAL_ID", "50294925"),
    ];

    #[test]
    fn test_config_with_defaults() {
        let config = load(&REQUIRED).unwrap();

        assert_eq!(config.hubspot_access_token, "pat-na1-test");
        assert_eq!(config.hubspot_api_base_url, "https://api.hubapi.com");
        assert_eq!(config.hubspot_object_type, "p50294925_pets");
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.static_dir, "public");
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = load(&[
            ("HUBSPOT_ACCESS_TOKEN", "pat-na1-test"),
            ("HUBSPOT_PORTAL_ID", "123"),
            ("HUBSPOT_OBJECT_NAME", "cars"),
            ("HUBSPOT_API_BASE_URL", "http://localhost:9000/"),
            ("PORT", "8080"),
            ("SERVICE_HOST", "127.0.0.1"),
            ("STATIC_DIR", "assets"),
        ])
        .unwrap();

        assert_eq!(config.hubspot_object_type, "p123_cars");
        assert_eq!(config.hubspot_api_base_url, "http://localhost:9000");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.static_dir, "assets");
    }

    #[test]
    fn test_object_type_override_skips_portal_id() {
        let config = load(&[
            ("HUBSPOT_ACCESS_TOKEN", "pat-na1-test"),
            ("HUBSPOT_OBJECT_TYPE", "2-1234567"),
        ])
        .unwrap();

        assert_eq!(config.hubspot_object_type, "2-1234567");
    }

    #[test]
    fn test_missing_access_token() {
        let result = load(&[("HUBSPOT_PORTAL_ID", "50294925")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HUBSPOT_ACCESS_TOKEN"));
    }

    #[test]
    fn test_missing_portal_id() {
        let result = load(&[("HUBSPOT_ACCESS_TOKEN", "pat-na1-test")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HUBSPOT_PORTAL_ID"));
    }

    #[test]
    fn test_non_numeric_portal_id() {
        let result = load(&[
            ("HUBSPOT_ACCESS_TOKEN", "pat-na1-test"),
            ("HUBSPOT_PORTAL_ID", "acme"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "not-a-number"));

        let result = load(&vars);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "99999"));

        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&REQUIRED).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("pat-na1-test"));
        assert!(debug.contains("<redacted>"));
    }
}
