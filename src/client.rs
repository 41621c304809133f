//! Client for the Roraima AI API.
//!
//! Construction and argument checks live in `builder` and `validation`;
//! request assembly and error mapping in `core`.

pub mod builder;
pub mod core;
mod validation;

pub use builder::RoraimaClientBuilder;
pub use core::{RoraimaClient, USER_AGENT};
