//! Logical requests accepted by the facade

use super::value::FieldMap;
use serde::{Deserialize, Serialize};

/// One table operation with its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum TableRequest {
    Insert {
        table: String,
        fields: FieldMap,
    },
    DescribeSchema {
        table: String,
    },
    ListTables,
    QueryRecent {
        table: String,
        /// Falls back to the store's configured default when absent
        #[serde(default)]
        limit: Option<i64>,
    },
    DeleteRecord {
        table: String,
        id: i64,
    },
    UpdateRecord {
        table: String,
        id: i64,
        fields: FieldMap,
    },
}

impl TableRequest {
    /// Operation name as it appears on the wire
    pub fn operation(&self) -> &'static str {
        match self {
            TableRequest::Insert { .. } => "insert",
            TableRequest::DescribeSchema { .. } => "describe_schema",
            TableRequest::ListTables => "list_tables",
            TableRequest::QueryRecent { .. } => "query_recent",
            TableRequest::DeleteRecord { .. } => "delete_record",
            TableRequest::UpdateRecord { .. } => "update_record",
        }
    }

    /// Whether the operation changes stored data
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            TableRequest::Insert { .. }
                | TableRequest::DeleteRecord { .. }
                | TableRequest::UpdateRecord { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqlValue;
    use serde_json::json;

    #[test]
    fn test_deserialize_query_recent_default_limit() {
        let request: TableRequest =
            serde_json::from_value(json!({"operation": "query_recent", "table": "students"}))
                .unwrap();
        assert_eq!(
            request,
            TableRequest::QueryRecent {
                table: "students".to_string(),
                limit: None
            }
        );
        assert!(!request.is_mutating());

        let request: TableRequest = serde_json::from_value(
            json!({"operation": "query_recent", "table": "students", "limit": 3}),
        )
        .unwrap();
        assert_eq!(
            request,
            TableRequest::QueryRecent {
                table: "students".to_string(),
                limit: Some(3)
            }
        );
    }

    #[test]
    fn test_deserialize_insert() {
        let request: TableRequest = serde_json::from_value(json!({
            "operation": "insert",
            "table": "products",
            "fields": {"name": "pen", "price": 1.25}
        }))
        .unwrap();

        let TableRequest::Insert { table, fields } = &request else {
            panic!("expected insert, got {:?}", request);
        };
        assert_eq!(table, "products");
        assert_eq!(fields.get("price"), Some(&SqlValue::Real(1.25)));
        assert_eq!(request.operation(), "insert");
        assert!(request.is_mutating());
    }

    #[test]
    fn test_deserialize_rejects_nested_field_values() {
        let result = serde_json::from_value::<TableRequest>(json!({
            "operation": "update_record",
            "table": "products",
            "id": 1,
            "fields": {"name": {"nested": true}}
        }));
        assert!(result.is_err());
    }
}
