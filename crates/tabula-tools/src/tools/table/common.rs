//! Shared plumbing for the table tools

use tabula_core::store::{
    FieldMap, OperationResult, StoreError, TableRequest, TableStore, fields_from_json,
};
use tabula_core::tools::base::ToolError;
use tabula_core::tools::types::{ToolCall, ToolResult};

pub(super) const TABLE_NAME: &str = "table_name";
pub(super) const RECORD_ID: &str = "record_id";
pub(super) const DATA: &str = "data";

/// Run a request on a blocking thread and wrap its outcome
pub(super) async fn run_request(
    store: &TableStore,
    call: &ToolCall,
    tool_name: &str,
    request: TableRequest,
) -> Result<ToolResult, ToolError> {
    let operation = request.operation();
    let store = store.clone();
    let outcome = tokio::task::spawn_blocking(move || store.handle(request))
        .await
        .map_err(|e| ToolError::ExecutionFailed(format!("{} task failed: {}", operation, e)))?;

    Ok(to_tool_result(call, tool_name, operation, &outcome))
}

/// Render an operation result as a tool result
///
/// The JSON rendering is the output either way; failures also carry the
/// message in `error`.
pub(super) fn to_tool_result(
    call: &ToolCall,
    tool_name: &str,
    operation: &str,
    outcome: &OperationResult,
) -> ToolResult {
    let output = outcome.to_json_pretty();
    let result = match outcome.failure_ref() {
        None => ToolResult::success(&call.id, tool_name, output),
        Some(failure) => ToolResult::error(&call.id, tool_name, failure.message.clone())
            .with_output(output)
            .with_metadata("error_code", failure.kind.code()),
    };
    result.with_metadata("operation", operation)
}

/// Failed tool result for arguments the store would reject anyway
pub(super) fn rejected(
    call: &ToolCall,
    tool_name: &str,
    operation: &str,
    error: StoreError,
) -> ToolResult {
    to_tool_result(call, tool_name, operation, &OperationResult::Failure(error.into()))
}

/// Read the `data` argument as bindable fields
///
/// Only the argument's shape is a tool error; unbindable values are a store
/// validation failure.
pub(super) fn read_fields(call: &ToolCall) -> Result<Result<FieldMap, StoreError>, ToolError> {
    let object = call.require_object(DATA)?;
    Ok(fields_from_json(object))
}
