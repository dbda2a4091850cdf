//! Catalog tools: table description and table listing

use super::common::{TABLE_NAME, run_request};
use async_trait::async_trait;
use tabula_core::store::{TableRequest, TableStore};
use tabula_core::tools::base::{Tool, ToolError};
use tabula_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};

/// Tool that describes a table's columns
pub struct GetTableInfoTool {
    store: TableStore,
}

impl GetTableInfoTool {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetTableInfoTool {
    fn name(&self) -> &str {
        "get_table_info"
    }

    fn description(&self) -> &str {
        "Returns the columns of a table (name, type, not_null, primary_key) in declaration order"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![ToolParameter::string(TABLE_NAME, "Table to describe")],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let table = call.require_string(TABLE_NAME)?;
        run_request(
            &self.store,
            call,
            self.name(),
            TableRequest::DescribeSchema { table },
        )
        .await
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string(TABLE_NAME).map(|_| ())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

/// Tool that lists every user table
pub struct ListAllTablesTool {
    store: TableStore,
}

impl ListAllTablesTool {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ListAllTablesTool {
    fn name(&self) -> &str {
        "list_all_tables"
    }

    fn description(&self) -> &str {
        "Lists all tables in the database together with their count"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), vec![])
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        run_request(&self.store, call, self.name(), TableRequest::ListTables).await
    }

    fn is_read_only(&self) -> bool {
        true
    }
}
