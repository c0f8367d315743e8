//! Top-level assistant configuration object
//!
//! This is the shape the host extension passes in and expects back. Field
//! names serialize in the host's camelCase wire format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::{
    ContextProviderConfig, CustomCommandConfig, EmbeddingsProviderConfig, ModelConfig,
    SlashCommandConfig,
};

/// The assistant configuration handed to and returned from a profile
///
/// All fields default to empty, so an arbitrary placeholder object (`{}`)
/// deserializes cleanly. Profiles replace the whole value; they never merge
/// with what the host passed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    /// Models available in the chat model picker
    #[serde(default)]
    pub models: Vec<ModelConfig>,
    /// Model used for inline tab autocomplete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_autocomplete_model: Option<ModelConfig>,
    /// Provider used to embed code for semantic search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings_provider: Option<EmbeddingsProviderConfig>,
    /// Context sources the model may draw on
    #[serde(default)]
    pub context_providers: Vec<ContextProviderConfig>,
    /// Built-in slash commands
    #[serde(default)]
    pub slash_commands: Vec<SlashCommandConfig>,
    /// User-defined slash commands with fixed prompts
    #[serde(default)]
    pub custom_commands: Vec<CustomCommandConfig>,
    /// Whether anonymous usage telemetry may be sent
    #[serde(default)]
    pub allow_anonymous_telemetry: bool,
    /// Documentation sites to index for the docs context provider
    #[serde(default)]
    pub docs: Vec<String>,
}

impl AssistantConfig {
    /// Check that every model and embeddings endpoint is a loopback address
    ///
    /// Holds for every built-in profile: nothing in the configuration may
    /// send code off the machine.
    pub fn references_only_loopback(&self) -> bool {
        self.models.iter().all(ModelConfig::is_local)
            && self.tab_autocomplete_model.iter().all(ModelConfig::is_local)
            && self
                .embeddings_provider
                .iter()
                .all(EmbeddingsProviderConfig::is_local)
    }

    /// Serialize to the host's JSON wire format
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from the host's JSON wire format
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_with_telemetry_off() {
        let config = AssistantConfig::default();
        assert!(config.models.is_empty());
        assert!(config.tab_autocomplete_model.is_none());
        assert!(config.embeddings_provider.is_none());
        assert!(config.context_providers.is_empty());
        assert!(!config.allow_anonymous_telemetry);
    }

    #[test]
    fn test_placeholder_object_deserializes() {
        let config = AssistantConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_empty_config_is_vacuously_loopback_only() {
        assert!(AssistantConfig::default().references_only_loopback());
    }

    #[test]
    fn test_remote_model_fails_loopback_audit() {
        let mut config = AssistantConfig::default();
        let mut model = ModelConfig::new("Remote", "gpt-4o");
        model.api_base = "https://api.example.com/v1".to_string();
        config.models.push(model);
        assert!(!config.references_only_loopback());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = AssistantConfig::default();
        config.models.push(ModelConfig::new("Llama 3.2 3B (Chat)", "llama3.2:3b"));
        config.docs.push("https://pandas.pydata.org/docs/".to_string());

        let json = config.to_json_string().unwrap();
        let parsed = AssistantConfig::from_json_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
