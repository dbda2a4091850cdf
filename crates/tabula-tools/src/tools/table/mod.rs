//! Table tools
//!
//! One tool per table store operation. Each tool turns its arguments into a
//! [`TableRequest`](tabula_core::store::TableRequest), runs it on a blocking
//! thread, and publishes the JSON-rendered operation result as its output.

mod common;
mod delete;
mod insert;
mod query;
mod schema;
mod update;

#[cfg(test)]
mod tests;

pub use delete::DeleteRecordTool;
pub use insert::InsertToTableTool;
pub use query::QueryTableTool;
pub use schema::{GetTableInfoTool, ListAllTablesTool};
pub use update::UpdateRecordTool;

use std::sync::Arc;
use tabula_core::store::TableStore;
use tabula_core::tools::Tool;

/// Get all table tools bound to one store
pub fn get_table_tools(store: TableStore) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(InsertToTableTool::new(store.clone())),
        Arc::new(GetTableInfoTool::new(store.clone())),
        Arc::new(ListAllTablesTool::new(store.clone())),
        Arc::new(QueryTableTool::new(store.clone())),
        Arc::new(DeleteRecordTool::new(store.clone())),
        Arc::new(UpdateRecordTool::new(store)),
    ]
}
