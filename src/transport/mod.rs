//! Request dispatch seam.
//!
//! The client builds an [`ApiRequest`] (method, absolute URL, headers, body)
//! and hands it to a [`Transport`]. [`HttpTransport`] is the reqwest-backed
//! implementation used in production; anything else implementing the trait
//! can be injected through [`crate::RoraimaClientBuilder::transport`].

mod http;

pub use http::HttpTransport;

use crate::attachment::Attachment;
use crate::ClientError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

/// One fully-assembled HTTP request.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Multipart(MultipartPayload),
}

/// Multipart form: a `prompt` text field plus at most one file field.
#[derive(Debug)]
pub struct MultipartPayload {
    pub prompt: String,
    pub attachment: Option<Attachment>,
}

impl MultipartPayload {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(prompt: impl Into<String>, attachment: Attachment) -> Self {
        Self {
            prompt: prompt.into(),
            attachment: Some(attachment),
        }
    }
}

/// Status and raw body of a received response, whatever the status.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. `Ok` means a response was received, including
    /// error statuses; `Err` means no response came back.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_builder() {
            TransportError::Other(e.to_string())
        } else {
            TransportError::Http(e)
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(e: TransportError) -> Self {
        match e {
            // The request never left: report the failure itself.
            TransportError::Other(message) => ClientError::local(message),
            e => ClientError::unreachable(e),
        }
    }
}
