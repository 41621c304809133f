//! Argument checks run before any request is built.

use crate::{Error, ErrorContext, Result};
use url::Url;

const API_KEY_PREFIX: &str = "sk-";

pub(crate) fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        return Err(Error::configuration_with_context(
            "API key is required",
            ErrorContext::new()
                .with_field_path("api_key")
                .with_source("builder"),
        ));
    }
    if !api_key.starts_with(API_KEY_PREFIX) {
        return Err(Error::configuration_with_context(
            format!("API key must start with \"{}\"", API_KEY_PREFIX),
            ErrorContext::new()
                .with_field_path("api_key")
                .with_source("builder"),
        ));
    }
    Ok(())
}

/// Strip one trailing slash and require an absolute http(s) URL.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String> {
    let normalized = base_url.strip_suffix('/').unwrap_or(base_url);
    let context = || {
        ErrorContext::new()
            .with_field_path("base_url")
            .with_details(format!("got {:?}", base_url))
            .with_source("builder")
    };
    let parsed = Url::parse(normalized).map_err(|e| {
        Error::configuration_with_context(format!("Invalid base URL: {}", e), context())
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            "Base URL must use http or https",
            context(),
        ));
    }
    Ok(normalized.to_string())
}

pub(crate) fn require_prompt<'a>(prompt: &'a str, operation: &str) -> Result<&'a str> {
    if prompt.is_empty() {
        return Err(Error::validation_with_context(
            "prompt is required",
            ErrorContext::new()
                .with_field_path("prompt")
                .with_source(operation),
        ));
    }
    Ok(prompt)
}
