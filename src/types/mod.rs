//! # Types Module
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StatsPeriod`] | Reporting window for usage statistics |
//! | [`ProcessResponse`] | Inference result with cost/token metrics |
//! | [`InfoResponse`] | Account and API capability description |
//! | [`StatsResponse`] | Usage summary and per-service breakdown |
//! | [`HealthResponse`] | Service status |

pub mod period;
pub mod response;

pub use period::StatsPeriod;
pub use response::{
    EndpointInfo, HealthResponse, InfoResponse, Limits, ProcessMetrics, ProcessResponse,
    ServiceUsage, StatsResponse, StatsSummary, UserInfo,
};
