//! Documented response shapes.
//!
//! The client hands back `serde_json::Value` untouched. These types are a
//! lenient typed view for callers who want one: every field defaults when
//! missing and unknown fields are kept in `extra`.
//!
//! ```rust
//! use roraima_ai::types::InfoResponse;
//!
//! let raw = serde_json::json!({"api_name": "Roraima AI", "user": {"balance": 12.5}});
//! let info: InfoResponse = serde_json::from_value(raw).unwrap();
//! assert_eq!(info.user.balance, 12.5);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of `process_text` / `process_image` / `process_audio`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProcessMetrics>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessMetrics {
    pub cost_estimate: Option<f64>,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub service: Option<String>,
    pub latency: Option<String>,
    pub processing_time: Option<String>,
    pub audio_duration_seconds: Option<f64>,
    pub tokens_per_second: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub balance: f64,
    pub total_spent: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `get_info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoResponse {
    pub api_name: String,
    pub version: String,
    pub token_valid: bool,
    pub user: UserInfo,
    pub endpoint: Option<EndpointInfo>,
    pub pricing: Map<String, Value>,
    pub examples: Map<String, Value>,
    pub limits: Option<Limits>,
    pub documentation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
    pub accepts: Vec<String>,
    pub authentication: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_file_size: String,
    pub supported_image_formats: Vec<String>,
    pub supported_audio_formats: Vec<String>,
    pub timeout: String,
}

/// Result of `get_stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    pub user: UserInfo,
    pub period: String,
    pub period_description: String,
    pub summary: StatsSummary,
    pub service_breakdown: Vec<ServiceUsage>,
    pub daily_usage: Vec<Value>,
    pub timestamp: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSummary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub success_rate: String,
    pub total_cost: f64,
    pub average_cost_per_request: f64,
    pub max_cost_per_request: f64,
    pub total_tokens: u64,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceUsage {
    pub service: String,
    pub description: Option<String>,
    pub requests: u64,
    pub total_cost: f64,
    pub total_tokens: u64,
}

/// Result of `get_health`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
