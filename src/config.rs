//! Runtime settings shared with every view through context
//!
//! The server binary parses them from the command line and installs them with
//! [`install`]; the browser client fetches the same values through the
//! [`portal_config`] server function, so both sides render one configuration.

use crate::money::Currency;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Brand shown in the header and on marketing pages
    pub bank_name: String,
    /// Currency preselected on the transfer form
    pub currency: Currency,
    /// Email of a user whose session is resumed on start-up
    pub demo_user: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bank_name: String::from("SecureBank"),
            currency: Currency::Usd,
            demo_user: None,
        }
    }
}

// Singleton
#[cfg(feature = "server")]
lazy_static::lazy_static! {
    static ref SERVED_CONFIG: std::sync::RwLock<PortalConfig> =
        std::sync::RwLock::new(PortalConfig::default());
}

/// Makes `config` the one handed out by [`portal_config`]
#[cfg(feature = "server")]
pub fn install(config: PortalConfig) {
    match SERVED_CONFIG.write() {
        Ok(mut slot) => *slot = config,
        Err(e) => log::error!("Could not install portal config: {}", e),
    }
}

#[cfg(feature = "server")]
fn served() -> Result<PortalConfig, String> {
    SERVED_CONFIG
        .read()
        .map(|config| config.clone())
        .map_err(|e| e.to_string())
}

#[server(PortalConfigFn)]
pub async fn portal_config() -> Result<PortalConfig, ServerFnError> {
    served().map_err(ServerFnError::new)
}

/// Current configuration; re-renders the caller once the server's copy arrives
pub fn use_config() -> PortalConfig {
    use_context::<Signal<PortalConfig>>().read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "server")]
    #[test]
    fn test_installed_config_is_served() {
        let config = PortalConfig {
            bank_name: "Harbor Bank".to_string(),
            currency: Currency::Eur,
            demo_user: Some("jane@harbor.test".to_string()),
        };
        install(config.clone());
        assert_eq!(served(), Ok(config));
    }

    #[test]
    fn test_config_survives_the_wire() {
        let config = PortalConfig {
            demo_user: Some("admin@securebank.test".to_string()),
            ..PortalConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"currency\":\"USD\""));
        let decoded: PortalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }
}
