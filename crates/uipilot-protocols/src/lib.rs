//! # UIPilot Protocols
//!
//! Shared vocabulary for the UIPilot workspace: the conversation types
//! exchanged with vision-language providers, the [`VisionModel`] trait,
//! and the error enums. Contains no provider implementations.

pub mod error;
pub mod provider;
pub mod types;

pub use error::{PointError, ProviderError, VisionError};
pub use provider::VisionModel;
pub use types::*;
