//! Update tool

use super::common::{DATA, RECORD_ID, TABLE_NAME, read_fields, rejected, run_request};
use async_trait::async_trait;
use tabula_core::store::{TableRequest, TableStore};
use tabula_core::tools::base::{ConcurrencyMode, Tool, ToolError};
use tabula_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};

const DESCRIPTION: &str = r#"Updates the given columns of one record; other columns keep their values.

Usage:
- record_id is the id of the record to change
- data maps column names to new values, e.g. {"profession": "Doctor"}
- The id column itself cannot be changed
- Reports 'not found' when no record has that id"#;

/// Tool that partially updates one record by id
pub struct UpdateRecordTool {
    store: TableStore,
}

impl UpdateRecordTool {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for UpdateRecordTool {
    fn name(&self) -> &str {
        "update_record"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string(TABLE_NAME, "Table containing the record"),
                ToolParameter::integer(RECORD_ID, "Id of the record to update"),
                ToolParameter::object(DATA, "Column name to new value mapping"),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let table = call.require_string(TABLE_NAME)?;
        let id = call.require_i64(RECORD_ID)?;
        let fields = match read_fields(call)? {
            Ok(fields) => fields,
            Err(error) => return Ok(rejected(call, self.name(), "update_record", error)),
        };

        tracing::info!("Updating record {} in table: {}", id, table);
        run_request(
            &self.store,
            call,
            self.name(),
            TableRequest::UpdateRecord { table, id, fields },
        )
        .await
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string(TABLE_NAME)?;
        call.require_i64(RECORD_ID)?;
        call.require_object(DATA)?;
        Ok(())
    }

    fn concurrency_mode(&self) -> ConcurrencyMode {
        ConcurrencyMode::Sequential
    }
}
