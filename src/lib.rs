//! # roraima-ai
//!
//! Async client for the Roraima AI processing API: text, image and audio
//! inference, account info, usage statistics and health checks.
//!
//! The client builds each request (bearer credentials, multipart payloads,
//! a fixed `User-Agent`), sends it once, and maps every failure of the
//! exchange to a single [`ClientError`] carrying the HTTP status (or `0` when
//! no response arrived) and the raw error payload. Responses are returned as
//! `serde_json::Value`, unmodified.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roraima_ai::RoraimaClient;
//!
//! #[tokio::main]
//! async fn main() -> roraima_ai::Result<()> {
//!     let client = RoraimaClient::new("sk-your-key")?;
//!
//!     let answer = client.process_text("Explain AI in two lines").await?;
//!     println!("{}", answer["content"]);
//!
//!     let described = client.process_image("What is in this picture?", "photo.jpg").await?;
//!     println!("{}", described["content"]);
//!
//!     println!("balance: {}", client.get_balance().await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`RoraimaClient`] and its builder |
//! | [`attachment`] | Image/audio sources for multipart uploads |
//! | [`transport`] | The [`Transport`](transport::Transport) seam and the reqwest implementation |
//! | [`config`] | [`ClientConfig`] and YAML loading |
//! | [`types`] | Stats period and documented response shapes |
//! | [`error`] | [`Error`], [`ClientError`], [`ErrorClass`] |

pub mod attachment;
pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use attachment::{AttachmentKind, AttachmentSource, ByteStream};
pub use client::{RoraimaClient, RoraimaClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use types::StatsPeriod;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{
    ClientError, Error, ErrorClass, ErrorContext, UNKNOWN_ERROR_MESSAGE, UNREACHABLE_MESSAGE,
};
