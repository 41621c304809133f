use crate::attachment::{AttachmentKind, AttachmentSource};
use crate::config::{redact, ClientConfig};
use crate::transport::{ApiRequest, ApiResponse, MultipartPayload, RequestBody, Transport};
use crate::types::StatsPeriod;
use crate::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT as USER_AGENT_HEADER};
use reqwest::Method;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use super::builder::RoraimaClientBuilder;
use super::validation;

/// Sent on every request.
pub const USER_AGENT: &str = concat!("roraima-ai-sdk-rust/", env!("CARGO_PKG_VERSION"));

const PROCESS_PATH: &str = "/api/ai/process";
const INFO_PATH: &str = "/api/ai/info";
const STATS_PATH: &str = "/api/ai/stats";
const HEALTH_PATH: &str = "/api/ai/health";

/// Client for the Roraima AI API.
///
/// Configuration is fixed at construction; the client is cheap to clone and
/// every call is an independent request/response cycle, so it can be shared
/// freely across tasks. Nothing is retried.
#[derive(Clone)]
pub struct RoraimaClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) auth_header: HeaderValue,
    pub(crate) user_agent: HeaderValue,
}

impl RoraimaClient {
    /// Client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        RoraimaClientBuilder::new().api_key(api_key).build()
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        RoraimaClientBuilder::new()
            .api_key(api_key)
            .base_url(base_url)
            .build()
    }

    pub fn builder() -> RoraimaClientBuilder {
        RoraimaClientBuilder::new()
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Effective base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run a text prompt.
    pub async fn process_text(&self, prompt: &str) -> Result<Value> {
        let prompt = validation::require_prompt(prompt, "process_text")?;
        let body = RequestBody::Multipart(MultipartPayload::text(prompt));
        self.dispatch(Method::POST, PROCESS_PATH, None, true, body)
            .await
    }

    /// Ask about an image given as a path, a buffer or a stream.
    pub async fn process_image(
        &self,
        prompt: &str,
        image: impl Into<AttachmentSource>,
    ) -> Result<Value> {
        self.process_media(AttachmentKind::Image, prompt, image.into())
            .await
    }

    /// Run an instruction over audio given as a path, a buffer or a stream.
    pub async fn process_audio(
        &self,
        prompt: &str,
        audio: impl Into<AttachmentSource>,
    ) -> Result<Value> {
        self.process_media(AttachmentKind::Audio, prompt, audio.into())
            .await
    }

    async fn process_media(
        &self,
        kind: AttachmentKind,
        prompt: &str,
        source: AttachmentSource,
    ) -> Result<Value> {
        let prompt = validation::require_prompt(prompt, kind.operation())?;
        let attachment = source.resolve(kind).await?;
        let body = RequestBody::Multipart(MultipartPayload::with_attachment(prompt, attachment));
        // Same endpoint as text; the server tells requests apart by their fields.
        self.dispatch(Method::POST, PROCESS_PATH, None, true, body)
            .await
    }

    /// Account metadata and API capability description.
    pub async fn get_info(&self) -> Result<Value> {
        self.dispatch(Method::GET, INFO_PATH, None, true, RequestBody::Empty)
            .await
    }

    /// Usage statistics. `None` means `"30d"`; anything outside
    /// `24h, 7d, 30d, 90d, all` fails before a request is made.
    pub async fn get_stats(&self, period: Option<&str>) -> Result<Value> {
        let period = match period {
            Some(p) => p.parse::<StatsPeriod>()?,
            None => StatsPeriod::default(),
        };
        self.get_stats_for(period).await
    }

    pub async fn get_stats_for(&self, period: StatsPeriod) -> Result<Value> {
        self.dispatch(
            Method::GET,
            STATS_PATH,
            Some(("period", period.as_str())),
            true,
            RequestBody::Empty,
        )
        .await
    }

    /// Service status. Sent without credentials.
    pub async fn get_health(&self) -> Result<Value> {
        self.dispatch(Method::GET, HEALTH_PATH, None, false, RequestBody::Empty)
            .await
    }

    /// `user.balance` from [`get_info`](Self::get_info). Errors from that
    /// call are returned as they are.
    pub async fn get_balance(&self) -> Result<f64> {
        let info = self.get_info().await?;
        let balance = info.pointer("/user/balance").and_then(Value::as_f64);
        match balance {
            Some(balance) => Ok(balance),
            None => Err(ClientError::new("Info response has no numeric user.balance", 0, info).into()),
        }
    }

    fn endpoint_url(&self, path: &str, query: Option<(&str, &str)>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url, path))
            .map_err(|e| ClientError::local(format!("Invalid request URL: {}", e)))?;
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: Option<(&str, &str)>,
        authenticated: bool,
        body: RequestBody,
    ) -> Result<Value> {
        let url = self.endpoint_url(path, query)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT_HEADER, self.user_agent.clone());
        if authenticated {
            headers.insert(AUTHORIZATION, self.auth_header.clone());
        }

        debug!(method = %method, url = %url, authenticated, "dispatching request");
        let request = ApiRequest {
            method,
            url,
            headers,
            body,
        };

        match self.transport.send(request).await {
            Ok(response) if response.is_success() => parse_success(response),
            Ok(response) => {
                let err = ClientError::from_response(response.status, &response.body);
                warn!(status = err.status, class = %err.class(), message = %err.message, "API error response");
                Err(err.into())
            }
            Err(e) => {
                warn!(error = %e, "request failed before a response was received");
                Err(ClientError::from(e).into())
            }
        }
    }
}

fn parse_success(response: ApiResponse) -> Result<Value> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        ClientError::new(
            format!("Invalid JSON in response: {}", e),
            0,
            serde_json::json!({
                "originalError": e.to_string(),
                "status": response.status,
                "body": String::from_utf8_lossy(&response.body),
            }),
        )
        .into()
    })
}

impl fmt::Debug for RoraimaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoraimaClient")
            .field("api_key", &redact(&self.config.api_key))
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
