//! Context provider descriptors
//!
//! Context providers are sources of information the host may attach to a
//! prompt: the open file, the git diff, terminal output, and so on. We only
//! name them; retrieval itself happens in the host.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The context sources the host knows how to retrieve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContextProviderKind {
    /// Specific files or symbols referenced in chat
    Code,
    /// The current git diff
    Diff,
    /// A folder's contents
    Folder,
    /// Semantic search over the indexed codebase
    Codebase,
    /// Recent terminal output
    Terminal,
    /// Diagnostics from the editor's problems pane
    Problems,
    /// Indexed documentation sites
    Docs,
}

impl ContextProviderKind {
    /// All known context providers, in the order profiles enable them
    pub fn all() -> [ContextProviderKind; 7] {
        [
            Self::Code,
            Self::Diff,
            Self::Folder,
            Self::Codebase,
            Self::Terminal,
            Self::Problems,
            Self::Docs,
        ]
    }

    /// Get the provider name as the host expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Diff => "diff",
            Self::Folder => "folder",
            Self::Codebase => "codebase",
            Self::Terminal => "terminal",
            Self::Problems => "problems",
            Self::Docs => "docs",
        }
    }
}

/// A context provider entry in the assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ContextProviderConfig {
    /// Which provider to enable
    pub name: ContextProviderKind,
    /// Provider-specific parameters; empty for all built-in profiles
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

impl ContextProviderConfig {
    /// Enable a context provider with no parameters
    pub fn new(name: ContextProviderKind) -> Self {
        Self {
            name,
            params: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_seven_providers() {
        let all = ContextProviderKind::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], ContextProviderKind::Code);
        assert_eq!(all[6], ContextProviderKind::Docs);
    }

    #[test]
    fn test_name_serializes_lowercase() {
        let config = ContextProviderConfig::new(ContextProviderKind::Codebase);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["name"], "codebase");
        assert_eq!(value["params"], serde_json::json!({}));
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for kind in ContextProviderKind::all() {
            let value = serde_json::to_value(kind).unwrap();
            assert_eq!(value, kind.as_str());
        }
    }

    #[test]
    fn test_deserialize_without_params() {
        let config: ContextProviderConfig =
            serde_json::from_str(r#"{"name": "terminal"}"#).unwrap();
        assert_eq!(config.name, ContextProviderKind::Terminal);
        assert!(config.params.is_empty());
    }
}
