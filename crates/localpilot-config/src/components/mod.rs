//! Configuration components for the assistant config object
//!
//! Small, focused descriptor types for the pieces the host assembles into
//! its runtime configuration.

pub mod commands;
pub mod context;
pub mod embedding;
pub mod model;

// Re-export component types
pub use commands::*;
pub use context::*;
pub use embedding::*;
pub use model::*;
