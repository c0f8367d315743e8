//! # Localpilot Configuration Library
//!
//! Typed configuration for the Localpilot editor assistant. The host
//! extension hands us its current configuration object; we hand back a
//! replacement populated with local-only Ollama models, context providers,
//! and slash commands.
//!
//! Everything here points at a loopback Ollama endpoint. No descriptor in
//! any built-in profile references a remote host, and telemetry is always
//! disabled.
//!
//! ## Quick Start
//!
//! ```rust
//! use localpilot_config::{AssistantConfig, Profile};
//!
//! let config = Profile::Workstation.modify(AssistantConfig::default());
//! assert_eq!(config.models.len(), 3);
//! assert!(!config.allow_anonymous_telemetry);
//! assert!(config.references_only_loopback());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod components;
mod config;
mod profiles;

pub use components::*;
pub use config::*;
pub use profiles::*;
