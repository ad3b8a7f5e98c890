//! HTTP translation client

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslateResponseBody, TranslationRequest, TranslationResponse};

/// Path of the translate operation, appended to the endpoint
const TRANSLATE_PATH: [&str; 3] = ["translate", "v2", "translate"];

/// Batch translation capability.
///
/// `TranslationClient` is the HTTP implementation; tests and callers can
/// substitute their own.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `texts` into `target_language_code`.
    ///
    /// Entry `i` of the result corresponds to `texts[i]`.
    async fn translate(
        &self,
        target_language_code: &str,
        texts: &[String],
    ) -> Result<Vec<TranslationResponse>>;
}

/// Translation client backed by a single REST call per batch
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl TranslationClient {
    /// Create a client with its own HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build().map_err(TranslationError::Transport)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create a client on top of a caller-supplied transport.
    ///
    /// `timeout_ms` is ignored here; timeouts belong to `client`.
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[instrument(
        name = "translate",
        skip_all,
        fields(target_language = %target_language_code, texts = texts.len())
    )]
    async fn send_request(
        &self,
        target_language_code: &str,
        texts: &[String],
    ) -> Result<Vec<TranslationResponse>> {
        let url = build_url(&self.config.endpoint)?;

        let request = TranslationRequest::new(
            self.config.folder_id.clone(),
            texts.to_vec(),
            target_language_code,
        );
        let body = serde_json::to_vec(&request).map_err(TranslationError::Encoding)?;

        debug!(%url, bytes = body.len(), "Sending translate request");

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.credential))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(TranslationError::Transport)?;

        let status = response.status();
        let payload = response
            .bytes()
            .await
            .map_err(TranslationError::Transport)?;

        debug!(status = status.as_u16(), bytes = payload.len(), "Received response");

        if status != StatusCode::OK {
            return Err(TranslationError::Remote {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&payload).into_owned(),
            });
        }

        let parsed: TranslateResponseBody =
            serde_json::from_slice(&payload).map_err(TranslationError::Decoding)?;

        if self.config.verify_count && parsed.translations.len() != texts.len() {
            return Err(TranslationError::CountMismatch {
                expected: texts.len(),
                actual: parsed.translations.len(),
            });
        }

        trace!(translations = parsed.translations.len(), "Decoded response");

        Ok(parsed.translations)
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(
        &self,
        target_language_code: &str,
        texts: &[String],
    ) -> Result<Vec<TranslationResponse>> {
        self.send_request(target_language_code, texts).await
    }
}

/// Append the translate path to `endpoint`, keeping any path prefix it has
fn build_url(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| {
        TranslationError::config(format!("invalid endpoint {:?}: {}", endpoint, e))
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            TranslationError::config(format!("endpoint {:?} cannot carry a path", endpoint))
        })?
        .pop_if_empty()
        .extend(TRANSLATE_PATH);

    Ok(url)
}
