use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_REDIRECT_ROUTE: &str = "/chat";

/// Provider error codes that mean the user simply closed or superseded the popup.
pub const DEFAULT_BENIGN_ERROR_CODES: &[&str] =
    &["auth/cancelled-popup-request", "auth/popup-closed-by-user"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateConfig {
    /// Where signed-in users are sent.
    #[serde(default = "default_redirect_route")]
    pub redirect_route: String,
    /// Failure codes that return to the sign-in button without a message.
    #[serde(default = "default_benign_error_codes")]
    pub benign_error_codes: Vec<String>,
}

fn default_redirect_route() -> String {
    DEFAULT_REDIRECT_ROUTE.to_string()
}

fn default_benign_error_codes() -> Vec<String> {
    DEFAULT_BENIGN_ERROR_CODES
        .iter()
        .map(|code| code.to_string())
        .collect()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            redirect_route: default_redirect_route(),
            benign_error_codes: default_benign_error_codes(),
        }
    }
}

impl GateConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GateConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.redirect_route.starts_with('/') {
            return Err(ConfigError::InvalidRoute(self.redirect_route.clone()));
        }
        Ok(())
    }

    pub fn is_benign(&self, code: &str) -> bool {
        self.benign_error_codes.iter().any(|benign| benign == code)
    }
}
