use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Fallback message when the server reports an error without `detail` or `message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido";

/// Message used for every failure where no HTTP response was received.
pub const UNREACHABLE_MESSAGE: &str = "No se pudo conectar con el servidor de Roraima AI";

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Argument or configuration key that caused the error (e.g., "api_key", "period")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected values)
    pub details: Option<String>,
    /// Operation that raised the error (e.g., "process_image", "builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the SDK.
///
/// `Configuration`, `Validation` and `NotFound` are raised locally before any
/// request is sent. Everything that comes out of the network exchange is a
/// [`ClientError`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("File not found: {}{}", .path.display(), format_context(.context))]
    NotFound { path: PathBuf, context: ErrorContext },

    #[error(transparent)]
    Client(#[from] ClientError),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn not_found_with_context(path: impl Into<PathBuf>, context: ErrorContext) -> Self {
        Error::NotFound {
            path: path.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::NotFound { context, .. } => Some(context),
            Error::Client(_) => None,
        }
    }

    /// The network-level error, if this failure came from the HTTP exchange.
    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            Error::Client(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status carried by a [`ClientError`]; `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        self.as_client_error().map(|e| e.status)
    }
}

/// Failure originating from the request/response exchange.
///
/// `status == 0` means no HTTP response was received (connection refused,
/// timeout, DNS failure, unreadable body). Any other value is the literal
/// HTTP status returned by the server and `data` holds its raw error body.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ClientError {
    pub message: String,
    pub status: u16,
    pub data: Value,
}

impl ClientError {
    pub fn new(message: impl Into<String>, status: u16, data: Value) -> Self {
        Self {
            message: message.into(),
            status,
            data,
        }
    }

    /// Build the error for a received non-success response.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
        };
        let message = server_message(&data).unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        Self::new(message, status, data)
    }

    /// Build the error for a request that never produced a response.
    pub fn unreachable(original: impl fmt::Display) -> Self {
        Self::new(UNREACHABLE_MESSAGE, 0, original_error(original))
    }

    /// Build a local failure of the exchange itself (request assembly, body decoding).
    pub fn local(message: impl Into<String>) -> Self {
        let message = message.into();
        let data = original_error(&message);
        Self::new(message, 0, data)
    }

    pub fn class(&self) -> ErrorClass {
        ErrorClass::from_status(self.status)
    }

    pub fn is_transport(&self) -> bool {
        self.status == 0
    }
}

fn original_error(original: impl fmt::Display) -> Value {
    serde_json::json!({ "originalError": original.to_string() })
}

fn server_message(data: &Value) -> Option<String> {
    ["detail", "message"].iter().find_map(|key| match data.get(*key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}

/// Coarse classification of a [`ClientError`] by status code.
///
/// This is a hint for the caller's own remediation; the client never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// No HTTP response was received (status 0)
    Transport,
    /// 401: invalid, expired or missing API key
    Authentication,
    /// 402: the account balance cannot cover the request
    InsufficientBalance,
    /// 403: valid credentials without access to the resource
    PermissionDenied,
    /// 404: endpoint or resource does not exist
    NotFound,
    /// 413: payload exceeds the server's upload limit
    RequestTooLarge,
    /// 400 / 422: the server rejected the request parameters
    InvalidRequest,
    /// 429: request rate limit exceeded
    RateLimited,
    /// 5xx: server-side fault
    ServerError,
    /// Anything else
    Other,
}

impl ErrorClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            0 => Self::Transport,
            400 | 422 => Self::InvalidRequest,
            401 => Self::Authentication,
            402 => Self::InsufficientBalance,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }

    /// Returns the standard name (e.g., `"insufficient_balance"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Authentication => "authentication",
            Self::InsufficientBalance => "insufficient_balance",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::InvalidRequest => "invalid_request",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_takes_precedence() {
        let err = ClientError::from_response(401, br#"{"detail":"invalid key","message":"other"}"#);
        assert_eq!(err.status, 401);
        assert_eq!(err.message, "invalid key");
        assert_eq!(err.data, json!({"detail": "invalid key", "message": "other"}));
    }

    #[test]
    fn test_message_used_without_detail() {
        let err = ClientError::from_response(402, br#"{"message":"Saldo insuficiente"}"#);
        assert_eq!(err.message, "Saldo insuficiente");
        assert_eq!(err.class(), ErrorClass::InsufficientBalance);
    }

    #[test]
    fn test_structured_detail_is_serialized() {
        let err = ClientError::from_response(422, br#"{"detail":[{"loc":["prompt"],"msg":"field required"}]}"#);
        assert_eq!(err.message, r#"[{"loc":["prompt"],"msg":"field required"}]"#);
        assert_eq!(err.class(), ErrorClass::InvalidRequest);
    }

    #[test]
    fn test_unknown_fallback() {
        let err = ClientError::from_response(500, br#"{"error":true}"#);
        assert_eq!(err.message, UNKNOWN_ERROR_MESSAGE);

        let err = ClientError::from_response(502, b"");
        assert_eq!(err.message, UNKNOWN_ERROR_MESSAGE);
        assert_eq!(err.data, Value::Null);
    }

    #[test]
    fn test_non_json_body_kept_raw() {
        let err = ClientError::from_response(503, b"<html>Service Unavailable</html>");
        assert_eq!(err.message, UNKNOWN_ERROR_MESSAGE);
        assert_eq!(err.data, json!("<html>Service Unavailable</html>"));
        assert_eq!(err.class(), ErrorClass::ServerError);
    }

    #[test]
    fn test_unreachable_wraps_original() {
        let err = ClientError::unreachable("connection refused");
        assert_eq!(err.status, 0);
        assert_eq!(err.message, UNREACHABLE_MESSAGE);
        assert_eq!(err.data, json!({"originalError": "connection refused"}));
        assert!(err.is_transport());
    }

    #[test]
    fn test_error_class_mapping() {
        assert_eq!(ErrorClass::from_status(0), ErrorClass::Transport);
        assert_eq!(ErrorClass::from_status(401), ErrorClass::Authentication);
        assert_eq!(ErrorClass::from_status(404), ErrorClass::NotFound);
        assert_eq!(ErrorClass::from_status(429), ErrorClass::RateLimited);
        assert_eq!(ErrorClass::from_status(599), ErrorClass::ServerError);
        assert_eq!(ErrorClass::from_status(418), ErrorClass::Other);
        assert_eq!(ErrorClass::InsufficientBalance.to_string(), "insufficient_balance");
    }

    #[test]
    fn test_context_display() {
        let err = Error::validation_with_context(
            "prompt is required",
            ErrorContext::new().with_field_path("prompt").with_source("process_text"),
        );
        assert_eq!(
            err.to_string(),
            "Validation error: prompt is required (field: prompt, source: process_text)"
        );
        assert!(err.status().is_none());
    }
}
