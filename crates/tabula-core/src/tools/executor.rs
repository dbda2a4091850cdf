//! Tool execution engine

use crate::tools::base::{Tool, ToolError};
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::time::timeout;

/// Tool executor that dispatches named tool calls
pub struct ToolExecutor {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Register multiple tools
    pub fn register_tools(&mut self, tools: Vec<Arc<dyn Tool>>) {
        for tool in tools {
            self.register_tool(tool);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get all registered tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Schemas of every registered tool, sorted by name
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tool_names()
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.schema())
            .collect()
    }

    /// Execute a single tool call
    ///
    /// The call runs under the tool's own execution budget.
    pub async fn execute_tool(&self, call: &ToolCall) -> ToolResult {
        let tool = match self.tools.get(&call.name) {
            Some(tool) => tool,
            None => {
                return ToolResult::from_error(
                    &call.id,
                    &call.name,
                    &ToolError::NotFound(call.name.clone()),
                );
            }
        };

        tracing::debug!("Executing tool call {}", tool.render_call(call));

        let Some(limit) = tool.max_execution_duration() else {
            return tool.execute_with_timing(call).await;
        };
        match timeout(limit, tool.execute_with_timing(call)).await {
            Ok(result) => result,
            Err(_) => ToolResult::from_error(&call.id, &call.name, &ToolError::Timeout(limit)),
        }
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    struct SlowTool;

    #[async_trait]
    impl Tool for SlowTool {
        fn name(&self) -> &str {
            "slow"
        }

        fn description(&self) -> &str {
            "Sleeps longer than its budget"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new(self.name(), self.description(), vec![])
        }

        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(ToolResult::success(&call.id, self.name(), "late"))
        }

        fn max_execution_duration(&self) -> Option<Duration> {
            Some(Duration::from_millis(10))
        }
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let executor = ToolExecutor::new();
        let call = ToolCall::new("c1", "missing", HashMap::new());

        let result = executor.execute_tool(&call).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Tool 'missing' not found"));
        assert_eq!(
            result.metadata.get("error_code"),
            Some(&serde_json::json!("TOOL_NOT_FOUND"))
        );
    }

    #[tokio::test]
    async fn test_timeout() {
        let mut executor = ToolExecutor::new();
        executor.register_tool(Arc::new(SlowTool));
        assert!(executor.has_tool("slow"));

        let call = ToolCall::new("c1", "slow", HashMap::new());
        let result = executor.execute_tool(&call).await;
        assert!(!result.success);
        assert_eq!(
            result.metadata.get("error_code"),
            Some(&serde_json::json!("TOOL_TIMEOUT"))
        );
        assert!(result.error.unwrap().contains("timed out after 10ms"));
    }

    #[test]
    fn test_schemas_sorted() {
        let mut executor = ToolExecutor::new();
        executor.register_tools(vec![Arc::new(SlowTool)]);
        let schemas = executor.schemas();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name, "slow");
        assert_eq!(executor.tool_names(), vec!["slow".to_string()]);
    }
}
