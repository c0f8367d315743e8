//! Model descriptors for chat and autocomplete

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base URL of the local Ollama server.
///
/// Every built-in profile points at this endpoint; prompts and code never
/// leave the machine.
pub const OLLAMA_API_BASE: &str = "http://localhost:11434";

/// Inference provider backing a model descriptor.
///
/// Only the local Ollama server is supported. Keeping this an enum (rather
/// than a free-form string) means a remote provider cannot be configured by
/// accident.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    /// Local Ollama server
    #[default]
    Ollama,
}

impl ModelProvider {
    /// Get the provider identifier as the host expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
        }
    }

    /// Default API base URL for this provider
    pub fn default_api_base(&self) -> &'static str {
        match self {
            Self::Ollama => OLLAMA_API_BASE,
        }
    }
}

/// A model the host can route chat or autocomplete requests to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    /// Display name shown in the model picker
    pub title: String,
    /// Inference provider
    #[serde(default)]
    pub provider: ModelProvider,
    /// Model identifier, e.g. `deepseek-coder:6.7b`
    pub model: String,
    /// Base URL of the inference server
    pub api_base: String,
    /// Context window override in tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u32>,
}

impl ModelConfig {
    /// Create a model descriptor pointing at the local Ollama server
    pub fn new(title: impl Into<String>, model: impl Into<String>) -> Self {
        let provider = ModelProvider::default();
        Self {
            title: title.into(),
            provider,
            model: model.into(),
            api_base: provider.default_api_base().to_string(),
            context_length: None,
        }
    }

    /// Set the context window size
    pub fn with_context_length(mut self, tokens: u32) -> Self {
        self.context_length = Some(tokens);
        self
    }

    /// Check whether the API base is a loopback address
    pub fn is_local(&self) -> bool {
        is_loopback_url(&self.api_base)
    }
}

/// Check whether a URL points at the local machine
pub(crate) fn is_loopback_url(url: &str) -> bool {
    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    host.starts_with("localhost") || host.starts_with("127.0.0.1") || host.starts_with("[::1]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_points_at_local_ollama() {
        let model = ModelConfig::new("DeepSeek Coder (Code)", "deepseek-coder:6.7b");
        assert_eq!(model.provider, ModelProvider::Ollama);
        assert_eq!(model.api_base, OLLAMA_API_BASE);
        assert!(model.is_local());
        assert!(model.context_length.is_none());
    }

    #[test]
    fn test_provider_as_str() {
        assert_eq!(ModelProvider::Ollama.as_str(), "ollama");
    }

    #[test]
    fn test_context_length_omitted_when_unset() {
        let model = ModelConfig::new("Llama 3.2 3B (Chat)", "llama3.2:3b");
        let json = serde_json::to_string(&model).unwrap();
        assert!(!json.contains("contextLength"));

        let model = model.with_context_length(8192);
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"contextLength\":8192"));
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let model = ModelConfig::new("Llama 3.1 8B (Local)", "llama3.1:8b");
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["provider"], "ollama");
        assert_eq!(value["apiBase"], OLLAMA_API_BASE);
    }

    #[test]
    fn test_toml_roundtrip() {
        let model = ModelConfig::new("DeepSeek Autocomplete", "deepseek-coder:6.7b")
            .with_context_length(4096);
        let serialized = toml::to_string(&model).unwrap();
        let deserialized: ModelConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(model, deserialized);
    }

    #[test]
    fn test_loopback_detection() {
        assert!(is_loopback_url("http://localhost:11434"));
        assert!(is_loopback_url("http://127.0.0.1:11434"));
        assert!(!is_loopback_url("https://api.example.com/v1"));
    }
}
