//! Delete tool

use super::common::{RECORD_ID, TABLE_NAME, run_request};
use async_trait::async_trait;
use tabula_core::store::{TableRequest, TableStore};
use tabula_core::tools::base::{ConcurrencyMode, Tool, ToolError};
use tabula_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};

/// Tool that deletes one record by id
pub struct DeleteRecordTool {
    store: TableStore,
}

impl DeleteRecordTool {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for DeleteRecordTool {
    fn name(&self) -> &str {
        "delete_record"
    }

    fn description(&self) -> &str {
        "Deletes the record with the given id from a table. Reports 'not found' when no record has that id."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string(TABLE_NAME, "Table to delete from"),
                ToolParameter::integer(RECORD_ID, "Id of the record to delete"),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let table = call.require_string(TABLE_NAME)?;
        let id = call.require_i64(RECORD_ID)?;

        tracing::info!("Deleting record {} from table: {}", id, table);
        run_request(
            &self.store,
            call,
            self.name(),
            TableRequest::DeleteRecord { table, id },
        )
        .await
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string(TABLE_NAME)?;
        call.require_i64(RECORD_ID)?;
        Ok(())
    }

    fn concurrency_mode(&self) -> ConcurrencyMode {
        ConcurrencyMode::Sequential
    }
}
