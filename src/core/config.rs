//! Configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Public endpoint of the translation service
pub const DEFAULT_ENDPOINT: &str = "https://translate.api.cloud.yandex.net";

/// Environment variable holding the bearer token
pub const ENV_API_TOKEN: &str = "YC_API_TOKEN";
/// Environment variable holding the folder identifier
pub const ENV_FOLDER_ID: &str = "YC_FOLDER_ID";
/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "TRANSLATE_ENDPOINT";
/// Environment variable setting the transport timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "TRANSLATE_TIMEOUT_MS";
/// Environment variable enabling the translation count check
pub const ENV_VERIFY_COUNT: &str = "TRANSLATE_VERIFY_COUNT";

/// Client configuration, immutable once handed to a client
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub credential: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub folder_id: String,
    /// Transport timeout. `None` leaves the request unbounded.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Reject responses whose translation count differs from the input count
    #[serde(default)]
    pub verify_count: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credential", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("folder_id", &self.folder_id)
            .field("timeout_ms", &self.timeout_ms)
            .field("verify_count", &self.verify_count)
            .finish()
    }
}

impl ClientConfig {
    /// Config against the default endpoint
    pub fn new(credential: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            endpoint: default_endpoint(),
            folder_id: folder_id.into(),
            timeout_ms: None,
            verify_count: false,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_verify_count(mut self, verify_count: bool) -> Self {
        self.verify_count = verify_count;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = lookup(ENV_API_TOKEN)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                TranslationError::config(format!("{} environment variable is required", ENV_API_TOKEN))
            })?;

        let folder_id = lookup(ENV_FOLDER_ID).unwrap_or_default();
        let endpoint = lookup(ENV_ENDPOINT).unwrap_or_else(default_endpoint);

        let timeout_ms = match lookup(ENV_TIMEOUT_MS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                TranslationError::config(format!("{}={:?} is not a number: {}", ENV_TIMEOUT_MS, raw, e))
            })?),
            None => None,
        };

        let verify_count = match lookup(ENV_VERIFY_COUNT) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                TranslationError::config(format!("{}={:?} is not a boolean", ENV_VERIFY_COUNT, raw))
            })?,
            None => false,
        };

        let config = Self {
            credential,
            endpoint,
            folder_id,
            timeout_ms,
            verify_count,
        };
        debug!(?config, "Loaded configuration from environment");

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranslationError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            TranslationError::config(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(TranslationError::Encoding)?;
        std::fs::write(path, content).map_err(|e| {
            TranslationError::config(format!("cannot write {}: {}", path.display(), e))
        })
    }

    /// Validate configuration.
    ///
    /// The endpoint is only checked for presence here; it is parsed when a
    /// request URL is built.
    pub fn validate(&self) -> Result<()> {
        if self.credential.is_empty() {
            return Err(TranslationError::config("API credential is required"));
        }

        if self.endpoint.is_empty() {
            return Err(TranslationError::config("API endpoint is required"));
        }

        if self.timeout_ms == Some(0) {
            return Err(TranslationError::config("timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
