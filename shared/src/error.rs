use thiserror::Error;

use crate::config::GateConfig;

/// Failure reported by the identity provider's interactive sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code})")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// How a failed sign-in attempt is presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInFailure {
    /// The user dismissed the popup; nothing is shown.
    UserCancelled,
    /// Any other provider failure; the message is shown verbatim.
    ProviderFailure(String),
}

impl SignInFailure {
    pub fn classify(error: &ProviderError, config: &GateConfig) -> Self {
        if config.is_benign(&error.code) {
            SignInFailure::UserCancelled
        } else {
            SignInFailure::ProviderFailure(error.message.clone())
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SignInFailure::UserCancelled => None,
            SignInFailure::ProviderFailure(message) => Some(message),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gate config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("redirect route must be an absolute path, got {0:?}")]
    InvalidRoute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_popup_is_suppressed() {
        let error = ProviderError::new("auth/cancelled-popup-request", "Popup request cancelled");
        let failure = SignInFailure::classify(&error, &GateConfig::default());
        assert_eq!(failure, SignInFailure::UserCancelled);
        assert_eq!(failure.message(), None);
    }

    #[test]
    fn other_codes_surface_provider_message() {
        let error = ProviderError::new("auth/network-request-failed", "Network error");
        let failure = SignInFailure::classify(&error, &GateConfig::default());
        assert_eq!(failure.message(), Some("Network error"));
    }

    #[test]
    fn benign_codes_follow_config() {
        let config = GateConfig {
            benign_error_codes: vec!["auth/user-cancelled".to_string()],
            ..GateConfig::default()
        };
        let cancelled = ProviderError::new("auth/cancelled-popup-request", "cancelled");
        assert_eq!(
            SignInFailure::classify(&cancelled, &config),
            SignInFailure::ProviderFailure("cancelled".to_string())
        );
        let custom = ProviderError::new("auth/user-cancelled", "closed");
        assert_eq!(SignInFailure::classify(&custom, &config), SignInFailure::UserCancelled);
    }

    #[test]
    fn provider_error_display_includes_code() {
        let error = ProviderError::new("auth/internal-error", "boom");
        assert_eq!(error.to_string(), "boom (auth/internal-error)");
    }
}
