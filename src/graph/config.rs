//! Graph construction settings
//!
//! A `GraphConfig` is fixed when a graph is built. It can be assembled in
//! code or loaded from a YAML or JSON document:
//!
//! ```yaml
//! directed: true
//! weight_key: capacity
//! auto_create_nodes: false
//! name: supply-chain
//! ```

use super::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Graph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Directed graphs keep separate successor and predecessor indices
    pub directed: bool,
    /// Edge attribute summed by `degree` instead of counting neighbors
    pub weight_key: Option<String>,
    /// Adding an edge creates missing endpoints (otherwise `NodeNotFound`)
    pub auto_create_nodes: bool,
    /// Stored as the `name` graph attribute at construction
    pub name: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weight_key: None,
            auto_create_nodes: true,
            name: None,
        }
    }
}

impl GraphConfig {
    /// Default settings for a directed graph
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    pub fn with_weight_key(mut self, key: impl Into<String>) -> Self {
        self.weight_key = Some(key.into());
        self
    }

    pub fn with_auto_create_nodes(mut self, enabled: bool) -> Self {
        self.auto_create_nodes = enabled;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn from_yaml_str(s: &str) -> GraphResult<Self> {
        serde_yaml::from_str(s).map_err(|e| GraphError::Config(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> GraphResult<Self> {
        serde_json::from_str(s).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Load from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GraphError::Config(format!("{}: {}", path.display(), e)))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_yaml_str(&text)?,
        };
        info!("Loaded graph config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert!(!config.directed);
        assert!(config.auto_create_nodes);
        assert_eq!(config.weight_key, None);
        assert!(GraphConfig::directed().directed);
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::directed()
            .with_weight_key("w")
            .with_auto_create_nodes(false)
            .with_name("g");
        assert_eq!(config.weight_key.as_deref(), Some("w"));
        assert!(!config.auto_create_nodes);
        assert_eq!(config.name.as_deref(), Some("g"));
    }

    #[test]
    fn test_yaml_partial_document() {
        let config = GraphConfig::from_yaml_str("directed: true\nweight_key: capacity\n").unwrap();
        assert!(config.directed);
        assert_eq!(config.weight_key.as_deref(), Some("capacity"));
        // unspecified fields keep their defaults
        assert!(config.auto_create_nodes);
    }

    #[test]
    fn test_json_document() {
        let config =
            GraphConfig::from_json_str(r#"{"auto_create_nodes": false, "name": "roads"}"#).unwrap();
        assert!(!config.directed);
        assert!(!config.auto_create_nodes);
        assert_eq!(config.name.as_deref(), Some("roads"));
    }

    #[test]
    fn test_invalid_document() {
        let err = GraphConfig::from_yaml_str("directed: [1, 2").unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"directed": true}}"#).unwrap();

        let config = GraphConfig::from_path(file.path()).unwrap();
        assert!(config.directed);

        let missing = GraphConfig::from_path("/definitely/not/here.yaml");
        assert!(matches!(missing, Err(GraphError::Config(_))));
    }
}
