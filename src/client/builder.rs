use super::core::{RoraimaClient, USER_AGENT};
use super::validation;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use reqwest::header::HeaderValue;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
pub struct RoraimaClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl RoraimaClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            transport: None,
        }
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let timeout = config.timeout();
        Self::new()
            .api_key(config.api_key)
            .base_url(config.base_url)
            .timeout(timeout)
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Defaults to [`DEFAULT_BASE_URL`]. A trailing `/` is removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-call timeout of the default HTTP transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the HTTP transport. The timeout setting is then up to it.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<RoraimaClient> {
        let api_key = self.api_key.unwrap_or_default();
        validation::validate_api_key(&api_key)?;

        let base_url = validation::normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "Timeout must be greater than zero",
                ErrorContext::new()
                    .with_field_path("timeout")
                    .with_source("builder"),
            ));
        }

        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            Error::configuration_with_context(
                "API key contains characters that are not allowed in an HTTP header",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("builder"),
            )
        })?;
        auth_header.set_sensitive(true);

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(self.timeout)?),
        };

        let config = ClientConfig {
            api_key,
            base_url,
            timeout_secs: self.timeout.as_secs(),
        };

        Ok(RoraimaClient {
            config: Arc::new(config),
            transport,
            auth_header,
            user_agent: HeaderValue::from_static(USER_AGENT),
        })
    }
}

impl Default for RoraimaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
