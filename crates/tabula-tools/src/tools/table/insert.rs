//! Insert tool

use super::common::{DATA, TABLE_NAME, read_fields, rejected, run_request};
use async_trait::async_trait;
use tabula_core::store::{TableRequest, TableStore};
use tabula_core::tools::base::{ConcurrencyMode, Tool, ToolError};
use tabula_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};

const DESCRIPTION: &str = r#"Inserts one record into an existing table.

Usage:
- table_name must name an existing table (e.g. students, teachers, products, employees)
- data maps column names to values, e.g. {"name": "Enes", "parent_name": "Gönül", "profession": "Engineer"}
- Values may be strings, numbers, booleans or null
- The generated record id is returned as row_id"#;

/// Tool that inserts a record and reports its generated id
pub struct InsertToTableTool {
    store: TableStore,
}

impl InsertToTableTool {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for InsertToTableTool {
    fn name(&self) -> &str {
        "insert_to_table"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string(TABLE_NAME, "Table to insert into"),
                ToolParameter::object(DATA, "Column name to value mapping for the new record"),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let table = call.require_string(TABLE_NAME)?;
        let fields = match read_fields(call)? {
            Ok(fields) => fields,
            Err(error) => return Ok(rejected(call, self.name(), "insert", error)),
        };

        tracing::info!("Inserting into table: {}", table);
        run_request(&self.store, call, self.name(), TableRequest::Insert { table, fields }).await
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string(TABLE_NAME)?;
        call.require_object(DATA)?;
        Ok(())
    }

    fn concurrency_mode(&self) -> ConcurrencyMode {
        ConcurrencyMode::Sequential
    }
}
