//! Tool registry.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::r#trait::{Tool, ToolError, ToolSchema};

/// Registry of callable tools, keyed by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        debug!("Registered tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Schemas of all tools, sorted by name.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|tool| tool.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Call a tool by name.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call(arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct EchoTool(&'static str);

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "Echo arguments"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object"})
        }

        async fn call(&self, arguments: Value) -> Result<String, ToolError> {
            Ok(arguments.to_string())
        }
    }

    #[tokio::test]
    async fn test_register_and_call() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool("echo"));

        let out = registry.call("echo", json!({"a": 1})).await.unwrap();
        assert_eq!(out, "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let registry = ToolRegistry::new();
        let result = registry.call("missing", Value::Null).await;
        assert!(matches!(result, Err(ToolError::UnknownTool(name)) if name == "missing"));
    }

    #[test]
    fn test_names_and_schemas_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool("zeta"));
        registry.register(EchoTool("alpha"));

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
        let schemas = registry.schemas();
        assert_eq!(schemas[0].name, "alpha");
        assert_eq!(schemas[1].description, "Echo arguments");
    }
}
