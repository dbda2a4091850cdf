//! Operation outcomes and their uniform wire shape

use super::error::{StoreError, StoreResult};
use super::record::{ColumnDescriptor, Record};
use super::value::FieldMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Payload of a successful insert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertOutcome {
    pub message: String,
    pub row_id: i64,
    pub inserted_data: FieldMap,
}

/// Payload of a successful schema description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// Payload of a table listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableList {
    pub tables: Vec<String>,
    pub count: usize,
}

/// Payload of a recent-records query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRecords {
    pub table: String,
    pub count: usize,
    pub records: Vec<Record>,
}

/// Payload of a successful delete
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub message: String,
}

/// Payload of a successful update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOutcome {
    pub message: String,
    pub updated_fields: FieldMap,
}

/// Category of a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Store,
}

impl FailureKind {
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::Validation => "VALIDATION_ERROR",
            FailureKind::NotFound => "NOT_FOUND",
            FailureKind::Store => "STORE_ERROR",
        }
    }

    /// Key the message is published under
    fn message_key(&self) -> &'static str {
        match self {
            FailureKind::NotFound => "message",
            FailureKind::Validation | FailureKind::Store => "error",
        }
    }
}

/// A failed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<StoreError> for Failure {
    fn from(error: StoreError) -> Self {
        let kind = match &error {
            StoreError::Validation(_) => FailureKind::Validation,
            StoreError::NotFound { .. } => FailureKind::NotFound,
            StoreError::Sqlite(_) => FailureKind::Store,
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}

/// Outcome of one table operation, serialized uniformly
///
/// ```json
/// {"success": true, "row_id": 3, "message": "...", "inserted_data": {...}}
/// {"success": false, "error_code": "NOT_FOUND", "message": "record with id 9 not found ..."}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Success(serde_json::Map<String, serde_json::Value>),
    Failure(Failure),
}

impl OperationResult {
    /// Build a success from a serializable payload
    pub fn success<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(serde_json::Value::Object(map)) => OperationResult::Success(map),
            Ok(other) => {
                let mut map = serde_json::Map::new();
                map.insert("result".to_string(), other);
                OperationResult::Success(map)
            }
            Err(e) => OperationResult::failure(
                FailureKind::Store,
                format!("failed to serialize result: {}", e),
            ),
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        OperationResult::Failure(Failure {
            kind,
            message: message.into(),
        })
    }

    pub fn from_result<T: Serialize>(result: StoreResult<T>) -> Self {
        match result {
            Ok(payload) => OperationResult::success(&payload),
            Err(error) => OperationResult::Failure(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    pub fn payload(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            OperationResult::Success(map) => Some(map),
            OperationResult::Failure(_) => None,
        }
    }

    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Failure(failure) => Some(failure),
        }
    }

    /// Human-readable message: the payload's `message` or the failure text
    pub fn message(&self) -> Option<&str> {
        match self {
            OperationResult::Success(map) => map.get("message").and_then(|v| v.as_str()),
            OperationResult::Failure(failure) => Some(&failure.message),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for OperationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OperationResult::Success(payload) => {
                let mut map = serializer.serialize_map(Some(payload.len() + 1))?;
                map.serialize_entry("success", &true)?;
                for (key, value) in payload {
                    if key != "success" {
                        map.serialize_entry(key, value)?;
                    }
                }
                map.end()
            }
            OperationResult::Failure(failure) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error_code", failure.kind.code())?;
                map.serialize_entry(failure.kind.message_key(), &failure.message)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_flattens_payload() {
        let result = OperationResult::success(&TableList {
            tables: vec!["students".to_string()],
            count: 1,
        });
        assert_eq!(
            result.to_json(),
            json!({"success": true, "tables": ["students"], "count": 1})
        );
    }

    #[test]
    fn test_not_found_uses_message_key() {
        let result = OperationResult::from_result::<DeleteOutcome>(Err(StoreError::NotFound {
            table: "students".to_string(),
            id: 9,
        }));
        assert_eq!(
            result.to_json(),
            json!({
                "success": false,
                "error_code": "NOT_FOUND",
                "message": "record with id 9 not found in table 'students'"
            })
        );
    }

    #[test]
    fn test_validation_uses_error_key() {
        let result =
            OperationResult::from_result::<TableSchema>(Err(StoreError::validation("table 'x' not found")));
        let json = result.to_json();
        assert_eq!(json["error"], json!("table 'x' not found"));
        assert_eq!(json["error_code"], json!("VALIDATION_ERROR"));
        assert_eq!(result.message(), Some("table 'x' not found"));
    }

    #[test]
    fn test_sqlite_fault_is_store_failure() {
        let error = StoreError::from(rusqlite::Error::InvalidQuery);
        let result = OperationResult::from_result::<DeleteOutcome>(Err(error));
        assert_eq!(result.failure_ref().map(|f| f.kind), Some(FailureKind::Store));
    }
}
