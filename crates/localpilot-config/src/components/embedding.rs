//! Embeddings provider descriptor for semantic code search

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::model::{is_loopback_url, ModelProvider};

/// Provider used to embed code for semantic search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingsProviderConfig {
    /// Inference provider
    #[serde(default)]
    pub provider: ModelProvider,
    /// Embedding model identifier
    #[serde(default = "default_embedding_model")]
    pub model: String,
    /// Base URL of the inference server
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_embedding_model() -> String {
    "nomic-embed-text".to_string()
}

fn default_api_base() -> String {
    ModelProvider::default().default_api_base().to_string()
}

impl Default for EmbeddingsProviderConfig {
    fn default() -> Self {
        Self {
            provider: ModelProvider::Ollama,
            model: default_embedding_model(),
            api_base: default_api_base(),
        }
    }
}

impl EmbeddingsProviderConfig {
    /// Check whether the API base is a loopback address
    pub fn is_local(&self) -> bool {
        is_loopback_url(&self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::model::OLLAMA_API_BASE;

    #[test]
    fn test_default_is_local_nomic_embed() {
        let config = EmbeddingsProviderConfig::default();
        assert_eq!(config.model, "nomic-embed-text");
        assert_eq!(config.api_base, OLLAMA_API_BASE);
        assert!(config.is_local());
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: EmbeddingsProviderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EmbeddingsProviderConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EmbeddingsProviderConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: EmbeddingsProviderConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
