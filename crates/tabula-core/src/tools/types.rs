//! Tool call, result, and schema types

use super::base::ToolError;
use crate::error::UnifiedError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A tool call from the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// Arguments to pass to the tool
    pub arguments: HashMap<String, serde_json::Value>,
    /// Optional call ID for tracking
    pub call_id: Option<String>,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new<S: Into<String>>(
        id: S,
        name: S,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
            call_id: None,
        }
    }

    /// Build a tool call from a JSON object of arguments
    ///
    /// Non-object values produce a call without arguments.
    pub fn from_json(id: impl Into<String>, name: impl Into<String>, args: serde_json::Value) -> Self {
        let arguments = match args {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };

        Self {
            id: id.into(),
            name: name.into(),
            arguments,
            call_id: None,
        }
    }

    /// Create a tool call with call ID
    pub fn with_call_id<S: Into<String>>(mut self, call_id: S) -> Self {
        self.call_id = Some(call_id.into());
        self
    }

    /// Whether an argument was supplied at all (including `null`)
    pub fn has_argument(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }

    /// Get a typed argument value
    pub fn get_argument<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.arguments
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_argument::<String>(key)
    }

    /// Get an integer argument
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_argument::<i64>(key)
    }

    /// Get a JSON object argument
    pub fn get_object(&self, key: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
        self.get_argument(key)
    }

    /// Require a string argument, returning error if missing
    pub fn require_string(&self, key: &str) -> Result<String, ToolError> {
        self.get_string(key).ok_or_else(|| {
            ToolError::InvalidArguments(format!("Missing required parameter '{}'", key))
        })
    }

    /// Require an integer argument, returning error if missing or not integral
    pub fn require_i64(&self, key: &str) -> Result<i64, ToolError> {
        self.get_i64(key).ok_or_else(|| {
            ToolError::InvalidArguments(format!("Missing or non-integer parameter '{}'", key))
        })
    }

    /// Require a JSON object argument, returning error if missing
    pub fn require_object(
        &self,
        key: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>, ToolError> {
        self.get_object(key).ok_or_else(|| {
            ToolError::InvalidArguments(format!("Missing or non-object parameter '{}'", key))
        })
    }
}

/// Result of a tool execution
///
/// - `success`: bool - Whether the tool execution succeeded
/// - `output`: Option<String> - The primary output text
/// - `error`: Option<String> - Error message (present on failure)
/// - `metadata`: HashMap<String, serde_json::Value> - Additional structured data
/// - `execution_time_ms`: Option<u64> - Execution duration in milliseconds
///
/// ```rust
/// use tabula_core::tools::types::ToolResult;
///
/// let result = ToolResult::success("call-1", "query_table", "{}")
///     .with_metadata("operation", "query_recent")
///     .with_execution_time(3);
/// assert!(result.success);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool call ID this result corresponds to
    pub call_id: String,
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the tool execution was successful
    pub success: bool,
    /// Output from the tool
    pub output: Option<String>,
    /// Error message (if failed)
    pub error: Option<String>,
    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,
    /// Additional metadata
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            execution_time_ms: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a failed tool result
    pub fn error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error.into()),
            execution_time_ms: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a failed tool result from a tool error, tagged with its code
    pub fn from_error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        error: &ToolError,
    ) -> Self {
        Self::error(call_id, tool_name, error.to_string())
            .with_metadata("error_code", error.error_code())
    }

        /// Attach output text (also allowed on failed results)
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Add execution time
    pub fn with_execution_time(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = Some(time_ms);
        self
    }

    /// Add metadata
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Parameter definition for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Parameter type (string, integer, number, object)
    pub param_type: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Default value (if any)
    pub default: Option<serde_json::Value>,
}

impl ToolParameter {
    fn typed<S: Into<String>>(name: S, description: S, param_type: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type: param_type.to_string(),
            required: true,
            default: None,
        }
    }

    /// Create a required string parameter
    pub fn string<S: Into<String>>(name: S, description: S) -> Self {
        Self::typed(name, description, "string")
    }

    /// Create a required integer parameter
    pub fn integer<S: Into<String>>(name: S, description: S) -> Self {
        Self::typed(name, description, "integer")
    }

    /// Create a required object parameter
    pub fn object<S: Into<String>>(name: S, description: S) -> Self {
        Self::typed(name, description, "object")
    }

    /// Make parameter optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set default value
    pub fn with_default<V: Into<serde_json::Value>>(mut self, default: V) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// JSON schema for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input parameters schema
    pub parameters: serde_json::Value,
}

impl ToolSchema {
    /// Create a new tool schema
    pub fn new<S: Into<String>>(name: S, description: S, parameters: Vec<ToolParameter>) -> Self {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in parameters {
            if param.required {
                required.push(param.name.clone());
            }

            let mut param_schema = serde_json::Map::new();
            param_schema.insert("type".to_string(), param.param_type.into());
            param_schema.insert("description".to_string(), param.description.into());

            if let Some(default) = param.default {
                param_schema.insert("default".to_string(), default);
            }

            properties.insert(param.name, param_schema.into());
        }

        let parameters_schema = serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required
        });

        Self {
            name: name.into(),
            description: description.into(),
            parameters: parameters_schema,
        }
    }
}
