//! Built-in configuration profiles
//!
//! A profile is a complete, self-contained assistant configuration. Applying
//! one replaces whatever the host passed in; profiles are mutually exclusive
//! presets, never composed or merged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::components::{
    ContextProviderConfig, ContextProviderKind, CustomCommandConfig, EmbeddingsProviderConfig,
    ModelConfig, SlashCommandConfig,
};
use crate::config::AssistantConfig;

/// Error returned when a profile name does not match a known profile
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile '{0}', expected 'workstation' or 'minimal'")]
pub struct UnknownProfileError(pub String);

/// A built-in configuration preset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Full setup: three chat models, custom commands, indexed docs
    #[default]
    Workstation,
    /// Reduced setup: two chat models, built-in commands only
    Minimal,
}

impl Profile {
    /// Get the profile name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workstation => "workstation",
            Self::Minimal => "minimal",
        }
    }

    /// Replace the host's configuration with this profile
    ///
    /// The prior contents of `base` are discarded, not inspected or merged,
    /// so the result is identical for every input. Applying a profile to its
    /// own output is a no-op.
    pub fn modify(self, _base: AssistantConfig) -> AssistantConfig {
        debug!(profile = self.as_str(), "applying configuration profile");
        match self {
            Self::Workstation => workstation(),
            Self::Minimal => minimal(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = UnknownProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workstation" => Ok(Self::Workstation),
            "minimal" => Ok(Self::Minimal),
            other => Err(UnknownProfileError(other.to_string())),
        }
    }
}

/// All seven context providers, enabled with empty parameters
fn all_context_providers() -> Vec<ContextProviderConfig> {
    ContextProviderKind::all()
        .into_iter()
        .map(ContextProviderConfig::new)
        .collect()
}

/// The full workstation preset
fn workstation() -> AssistantConfig {
    AssistantConfig {
        models: vec![
            // DeepSeek for coding (primary)
            ModelConfig::new("DeepSeek Coder (Code)", "deepseek-coder:6.7b"),
            // Llama for general questions
            ModelConfig::new("Llama 3.2 3B (Chat)", "llama3.2:3b"),
            ModelConfig::new("Llama 3.1 8B (Local)", "llama3.1:8b"),
        ],
        tab_autocomplete_model: Some(ModelConfig::new(
            "DeepSeek Autocomplete",
            "deepseek-coder:6.7b",
        )),
        embeddings_provider: Some(EmbeddingsProviderConfig::default()),
        context_providers: all_context_providers(),
        slash_commands: vec![
            SlashCommandConfig::new("edit", "Edit selected code"),
            SlashCommandConfig::new("comment", "Write comments for code"),
            SlashCommandConfig::new("share", "Export chat to markdown"),
            SlashCommandConfig::new("cmd", "Generate a shell command"),
            SlashCommandConfig::new("commit", "Generate git commit message"),
        ],
        custom_commands: vec![
            CustomCommandConfig::new(
                "test",
                "Write comprehensive unit tests for the selected code using pytest. \
                 Include edge cases and docstrings.",
                "Generate unit tests",
            ),
            CustomCommandConfig::new(
                "docstring",
                "Add a Google-style docstring to this function/class with Args, Returns, \
                 and Examples sections.",
                "Add docstring",
            ),
            CustomCommandConfig::new(
                "optimize",
                "Analyze this code for performance issues and suggest optimizations. \
                 Consider time complexity, space complexity, and Python best practices.",
                "Optimize code",
            ),
            CustomCommandConfig::new(
                "explain",
                "Explain what this code does in detail, including algorithms, data \
                 structures, and design patterns used.",
                "Explain code",
            ),
            CustomCommandConfig::new(
                "snowflake",
                "Convert this code to work with Snowflake using snowflake-ml-python or \
                 snowflake-connector-python.",
                "Snowflake integration",
            ),
        ],
        allow_anonymous_telemetry: false,
        docs: vec![
            "https://docs.snowflake.com/".to_string(),
            "https://scikit-learn.org/stable/".to_string(),
            "https://fastapi.tiangolo.com/".to_string(),
            "https://pandas.pydata.org/docs/".to_string(),
        ],
    }
}

/// The reduced preset: same local-only policy, fewer entries
fn minimal() -> AssistantConfig {
    AssistantConfig {
        models: vec![
            ModelConfig::new("DeepSeek Coder (Code)", "deepseek-coder:6.7b"),
            ModelConfig::new("Llama 3.2 3B (Chat)", "llama3.2:3b"),
        ],
        tab_autocomplete_model: Some(ModelConfig::new(
            "DeepSeek Autocomplete",
            "deepseek-coder:6.7b",
        )),
        embeddings_provider: Some(EmbeddingsProviderConfig::default()),
        context_providers: all_context_providers(),
        slash_commands: vec![
            SlashCommandConfig::new("edit", "Edit selected code"),
            SlashCommandConfig::new("comment", "Write comments for code"),
            SlashCommandConfig::new("cmd", "Generate a shell command"),
            SlashCommandConfig::new("commit", "Generate git commit message"),
        ],
        custom_commands: Vec::new(),
        allow_anonymous_telemetry: false,
        docs: Vec::new(),
    }
}
