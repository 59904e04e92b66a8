use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Cookie session configuration
///
/// Sessions are stored entirely in a signed+encrypted cookie; the server
/// keeps no session state. An empty `secret` means a fresh random key is
/// generated at startup, which invalidates sessions across restarts and is
/// only acceptable for development.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cookie name
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Key material for signing and encrypting the cookie; at least 32
    /// characters when set
    #[serde(default)]
    pub secret: String,
    /// Send the cookie only over HTTPS
    #[serde(default)]
    pub cookie_secure: bool,
    /// Session lifetime in seconds
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_ttl_seconds() -> u64 {
    7200 // 2 hours
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secret: String::new(),
            cookie_secure: false,
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::Validation(
                "session.cookie_name cannot be empty".into(),
            ));
        }
        if !self.secret.is_empty() && self.secret.len() < 32 {
            return Err(ConfigError::Validation(
                "session.secret must be at least 32 characters when set".into(),
            ));
        }
        if self.ttl_seconds == 0 {
            return Err(ConfigError::Validation(
                "session.ttl_seconds must be > 0".into(),
            ));
        }
        Ok(())
    }
}
