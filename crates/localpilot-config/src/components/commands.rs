//! Slash command descriptors
//!
//! Built-in slash commands are interpreted by the host; custom commands
//! carry a literal prompt the host forwards verbatim to the active model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A built-in slash command the host executes itself
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct SlashCommandConfig {
    /// Command name, invoked as `/name`
    pub name: String,
    /// Short description shown in the command palette
    pub description: String,
}

impl SlashCommandConfig {
    /// Create a slash command descriptor
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A user-defined slash command backed by a fixed prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct CustomCommandConfig {
    /// Command name, invoked as `/name`
    pub name: String,
    /// Prompt forwarded verbatim to the model
    pub prompt: String,
    /// Short description shown in the command palette
    pub description: String,
}

impl CustomCommandConfig {
    /// Create a custom command descriptor
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            description: description.into(),
        }
    }
}
