//! Request command implementation

use anyhow::Context;
use tabula_core::store::{TableRequest, TableStore};

/// Run one raw store request and print the operation result
pub async fn run(store: TableStore, request: &str) -> anyhow::Result<bool> {
    let request: TableRequest =
        serde_json::from_str(request).context("request must be a JSON object tagged by \"operation\"")?;
    tracing::debug!(operation = request.operation(), "Running store request");

    let outcome = tokio::task::spawn_blocking(move || store.handle(request)).await?;
    println!("{}", outcome.to_json_pretty());
    Ok(outcome.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::config::StoreConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_request_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = TableStore::new(StoreConfig::new(temp_dir.path().join("cli.db")));
        store.bootstrap().unwrap();

        let inserted = run(
            store.clone(),
            r#"{"operation": "insert", "table": "products", "fields": {"name": "Pen", "price": 1.5}}"#,
        )
        .await
        .unwrap();
        assert!(inserted);

        let missing = run(
            store.clone(),
            r#"{"operation": "delete_record", "table": "products", "id": 999}"#,
        )
        .await
        .unwrap();
        assert!(!missing);

        assert!(run(store, r#"{"operation": "drop_everything"}"#).await.is_err());
    }
}
