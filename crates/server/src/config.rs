//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `COURSEHUB_SESSION_SECRET` - Session signing secret (min 32 chars)
//!
//! ## Optional
//! - `COURSEHUB_HOST` - Bind address (default: 127.0.0.1)
//! - `COURSEHUB_PORT` - Listen port (default: 3000)
//! - `COURSEHUB_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `COURSEHUB_STORE_PATH` - Store file path (default: data/store.json)
//! - `PAYMENT_KEY_ID` / `PAYMENT_KEY_SECRET` - Gateway credentials; the
//!   gateway client only exists when both are set
//! - `PAYMENT_API_BASE` - Gateway API base URL (default: https://api.razorpay.com)
//! - `PAYMENT_CURRENCY` - Order currency (default: INR)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use coursehub_core::CurrencyCode;

const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Path to the store file
    pub store_path: PathBuf,
    /// Payment gateway configuration; `None` when credentials are absent
    pub gateway: Option<GatewayConfig>,
}

/// Payment gateway configuration.
///
/// Implements `Debug` manually to redact the key secret.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Gateway API base URL
    pub api_base: String,
    /// Public key id (safe to expose to the checkout page)
    pub key_id: String,
    /// Key secret, used for API auth and callback signature verification
    pub key_secret: SecretString,
    /// Currency for created orders
    pub currency: CurrencyCode,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_base", &self.api_base)
            .field("key_id", &self.key_id)
            .field("key_secret", &"[REDACTED]")
            .field("currency", &self.currency)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the session secret fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("COURSEHUB_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("COURSEHUB_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("COURSEHUB_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("COURSEHUB_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("COURSEHUB_BASE_URL", "http://localhost:3000");
        let session_secret = get_required_secret("COURSEHUB_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "COURSEHUB_SESSION_SECRET")?;
        let store_path = PathBuf::from(get_env_or_default("COURSEHUB_STORE_PATH", "data/store.json"));

        let gateway = GatewayConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            session_secret,
            store_path,
            gateway,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GatewayConfig {
    /// Load gateway configuration if credentials are present.
    ///
    /// Mirrors the deployment contract: the gateway is optional, and the
    /// client exists only when both halves of the credential pair are set.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let key_id = get_optional_env("PAYMENT_KEY_ID");
        let key_secret = get_optional_env("PAYMENT_KEY_SECRET");

        let (Some(key_id), Some(key_secret)) = (key_id, key_secret) else {
            return Ok(None);
        };

        let currency = get_env_or_default("PAYMENT_CURRENCY", "INR")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("PAYMENT_CURRENCY".to_string(), e))?;

        Ok(Some(Self {
            api_base: get_env_or_default("PAYMENT_API_BASE", "https://api.razorpay.com"),
            key_id,
            key_secret: SecretString::from(key_secret),
            currency,
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    use secrecy::ExposeSecret;

    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_session_secret_too_short() {
        let secret = SecretString::from("short");
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(32));
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            store_path: PathBuf::from("data/store.json"),
            gateway: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_gateway_config_debug_redacts_secret() {
        let config = GatewayConfig {
            api_base: "https://api.razorpay.com".to_string(),
            key_id: "rzp_test_key".to_string(),
            key_secret: SecretString::from("super_secret_value"),
            currency: CurrencyCode::Inr,
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("rzp_test_key"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_value"));
    }
}
