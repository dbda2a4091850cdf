//! Call command implementation

use anyhow::Context;
use tabula_core::store::TableStore;
use tabula_core::tools::{ToolCall, ToolExecutor, ToolResult};
use tabula_tools::get_table_tools;

/// Invoke one tool and print its output
pub async fn run(store: TableStore, tool: &str, args: &str) -> anyhow::Result<bool> {
    let arguments: serde_json::Value =
        serde_json::from_str(args).context("tool arguments must be valid JSON")?;
    if !arguments.is_object() {
        anyhow::bail!("tool arguments must be a JSON object");
    }

    let mut executor = ToolExecutor::new();
    executor.register_tools(get_table_tools(store));

    let call = ToolCall::from_json(format!("cli-{}", uuid::Uuid::new_v4()), tool, arguments);
    let result = executor.execute_tool(&call).await;
    tracing::debug!(
        call_id = %result.call_id,
        success = result.success,
        execution_time_ms = ?result.execution_time_ms,
        "Tool call finished"
    );

    println!("{}", render(&result)?);
    Ok(result.success)
}

/// Tool output, or a failure object when the call never reached the store
fn render(result: &ToolResult) -> anyhow::Result<String> {
    match &result.output {
        Some(output) => Ok(output.clone()),
        None => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "success": false,
            "error": result.error.as_deref().unwrap_or("tool produced no output"),
        }))?),
    }
}
