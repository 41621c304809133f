use super::{ApiRequest, ApiResponse, MultipartPayload, RequestBody, Transport, TransportError};
use crate::attachment::AttachmentBody;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use std::time::Duration;
use tokio_util::io::ReaderStream;
use tracing::debug;

/// reqwest-backed transport with a fixed per-call timeout.
///
/// Connection pooling is whatever `reqwest::Client` does by default.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn into_form(payload: MultipartPayload) -> std::result::Result<Form, TransportError> {
    let mut form = Form::new().text("prompt", payload.prompt);
    if let Some(attachment) = payload.attachment {
        let part = match attachment.body {
            AttachmentBody::Bytes(bytes) => {
                let len = bytes.len() as u64;
                Part::stream_with_length(Body::from(bytes), len)
            }
            AttachmentBody::File { file, len } => {
                Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), len)
            }
            AttachmentBody::Stream(stream) => Part::stream(Body::wrap_stream(stream)),
        };
        let part = part
            .file_name(attachment.file_name)
            .mime_str(attachment.content_type)
            .map_err(|e| TransportError::Other(format!("Invalid mime: {}", e)))?;
        form = form.part(attachment.kind.field_name(), part);
    }
    Ok(form)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut req = self.client.request(method, url).headers(headers);
        if let RequestBody::Multipart(payload) = body {
            req = req.multipart(into_form(payload)?);
        }

        let response = req.send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(TransportError::from_reqwest)?;
        debug!(status, bytes = body.len(), "response received");

        Ok(ApiResponse { status, body })
    }
}
