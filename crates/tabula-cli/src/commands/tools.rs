//! Tools command implementation

use tabula_core::store::TableStore;
use tabula_core::tools::ToolExecutor;
use tabula_tools::get_table_tools;

/// Print the schema of every registered tool
pub fn show_tools(store: &TableStore) -> anyhow::Result<bool> {
    let mut executor = ToolExecutor::new();
    executor.register_tools(get_table_tools(store.clone()));

    println!("{}", serde_json::to_string_pretty(&executor.schemas())?);
    Ok(true)
}
