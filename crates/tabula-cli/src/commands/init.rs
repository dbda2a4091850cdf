//! Init command implementation

use tabula_core::store::{OperationResult, TableStore};

/// Print every table after bootstrap has run
pub fn run(store: &TableStore) -> anyhow::Result<bool> {
    tracing::info!(db_path = %store.config().db_path.display(), "Store initialized");

    let outcome = OperationResult::from_result(store.list_tables());
    println!("{}", outcome.to_json_pretty());
    Ok(outcome.is_success())
}
