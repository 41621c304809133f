//! Client configuration.
//!
//! The crate never reads environment variables; embedding applications pass
//! values in directly or load them from YAML:
//!
//! ```yaml
//! api_key: sk-...
//! base_url: https://roraima.ai   # optional
//! timeout_secs: 300              # optional
//! ```

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Production endpoint used when no base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://roraima.ai";

/// Per-call timeout; media uploads can be large.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid client configuration: {}", e),
                ErrorContext::new().with_source("config"),
            )
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new().with_source("config");
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::not_found_with_context(path, context())
            } else {
                Error::configuration_with_context(
                    format!("Failed to read {}: {}", path.display(), e),
                    context(),
                )
            }
        })?;
        Self::from_yaml_str(&raw)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Keep the `sk-` prefix and the last four characters.
pub(crate) fn redact(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        return "sk-****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("sk-****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_defaults() {
        let cfg = ClientConfig::from_yaml_str("api_key: sk-test\n").unwrap();
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(300));
    }

    #[test]
    fn test_yaml_overrides() {
        let cfg = ClientConfig::from_yaml_str(
            "api_key: sk-test\nbase_url: http://localhost:8000/\ntimeout_secs: 20\n",
        )
        .unwrap();
        assert_eq!(cfg.base_url, "http://localhost:8000/");
        assert_eq!(cfg.timeout_secs, 20);
    }

    #[test]
    fn test_yaml_missing_key_is_configuration_error() {
        let err = ClientConfig::from_yaml_str("base_url: https://roraima.ai\n").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: sk-from-file").unwrap();
        let cfg = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.api_key, "sk-from-file");

        let err = ClientConfig::from_file("/nonexistent/roraima.yaml").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let cfg = ClientConfig::new("sk-1234567890abcd");
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("1234567890"));
        assert!(dbg.contains("sk-****abcd"));
    }
}
