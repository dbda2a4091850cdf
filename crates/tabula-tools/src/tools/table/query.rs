//! Recent-records query tool

use super::common::{TABLE_NAME, run_request};
use async_trait::async_trait;
use tabula_core::store::{TableRequest, TableStore};
use tabula_core::tools::base::{Tool, ToolError};
use tabula_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};

const LIMIT: &str = "limit";

/// Tool that fetches the most recently inserted records of a table
pub struct QueryTableTool {
    store: TableStore,
}

impl QueryTableTool {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }

    fn default_limit(&self) -> i64 {
        self.store.config().default_query_limit
    }

    /// `limit` when given; the store applies its configured default otherwise
    fn limit(&self, call: &ToolCall) -> Result<Option<i64>, ToolError> {
        match call.arguments.get(LIMIT) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(_) => call.require_i64(LIMIT).map(Some),
        }
    }
}

#[async_trait]
impl Tool for QueryTableTool {
    fn name(&self) -> &str {
        "query_table"
    }

    fn description(&self) -> &str {
        "Returns the most recent records of a table, newest id first. A limit of zero or less returns no records."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string(TABLE_NAME, "Table to query"),
                ToolParameter::integer(LIMIT, "Maximum number of records to return")
                    .optional()
                    .with_default(self.default_limit()),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let table = call.require_string(TABLE_NAME)?;
        let limit = self.limit(call)?;
        run_request(
            &self.store,
            call,
            self.name(),
            TableRequest::QueryRecent { table, limit },
        )
        .await
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string(TABLE_NAME)?;
        self.limit(call)?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}
