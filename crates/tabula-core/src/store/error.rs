//! Store error taxonomy

/// Result type for facade operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A fault raised while executing one table operation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unknown table or column, empty field set, or an unbindable value
    #[error("{0}")]
    Validation(String),

    /// The target record of a delete/update does not exist
    #[error("record with id {id} not found in table '{table}'")]
    NotFound { table: String, id: i64 },

    /// Connection, syntax, constraint or locking fault from SQLite
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether SQLite reported the database as busy or locked
    pub fn is_busy(&self) -> bool {
        match self {
            StoreError::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}
