//! The table store facade

use super::bootstrap::ensure_demo_schema;
use super::catalog::{self, quote_identifier};
use super::error::{StoreError, StoreResult};
use super::record::Record;
use super::request::TableRequest;
use super::result::{
    DeleteOutcome, InsertOutcome, OperationResult, RecentRecords, TableList, TableSchema,
    UpdateOutcome,
};
use super::value::{FieldMap, SqlValue};
use crate::config::StoreConfig;
use rusqlite::{Connection, ToSql, params};
use tracing::{debug, info, warn};

/// Single access point for table operations
///
/// Holds only the store configuration; each call opens a fresh connection
/// and drops it before returning.
#[derive(Debug, Clone)]
pub struct TableStore {
    config: StoreConfig,
}

impl TableStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.config.db_path)?;
        conn.busy_timeout(self.config.busy_timeout)?;
        Ok(conn)
    }

    /// Idempotently create the demonstration tables
    pub fn bootstrap(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        ensure_demo_schema(&conn)?;
        info!(
            "Demonstration schema ensured at {}",
            self.config.db_path.display()
        );
        Ok(())
    }

    /// Execute a logical request, converting every fault into a failure
    pub fn handle(&self, request: TableRequest) -> OperationResult {
        let operation = request.operation();
        let result = match request {
            TableRequest::Insert { table, fields } => {
                OperationResult::from_result(self.insert(&table, &fields))
            }
            TableRequest::DescribeSchema { table } => {
                OperationResult::from_result(self.describe_schema(&table))
            }
            TableRequest::ListTables => OperationResult::from_result(self.list_tables()),
            TableRequest::QueryRecent { table, limit } => {
                let limit = limit.unwrap_or(self.config.default_query_limit);
                OperationResult::from_result(self.query_recent(&table, limit))
            }
            TableRequest::DeleteRecord { table, id } => {
                OperationResult::from_result(self.delete_record(&table, id))
            }
            TableRequest::UpdateRecord { table, id, fields } => {
                OperationResult::from_result(self.update_record(&table, id, &fields))
            }
        };

        if let Some(failure) = result.failure_ref() {
            warn!(
                operation,
                code = failure.kind.code(),
                "Table operation failed: {}",
                failure.message
            );
        }
        result
    }

    /// Insert one record and return its generated id
    pub fn insert(&self, table: &str, fields: &FieldMap) -> StoreResult<InsertOutcome> {
        let conn = self.connect()?;
        let info = catalog::resolve_table(&conn, table)?;
        let columns = info.resolve_fields(fields)?;

        let column_list = columns
            .iter()
            .map(|(name, _)| quote_identifier(name))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=columns.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            info.quoted_name(),
            column_list,
            placeholders
        );
        debug!(%sql, "Built insert statement");

        conn.execute(
            &sql,
            rusqlite::params_from_iter(columns.iter().map(|(_, value)| *value)),
        )?;
        let row_id = conn.last_insert_rowid();
        info!(table = %info.name, row_id, "Record inserted");

        Ok(InsertOutcome {
            message: format!("Record inserted into '{}' with id {}", info.name, row_id),
            row_id,
            inserted_data: fields.clone(),
        })
    }

    /// Describe a table's columns in declaration order
    pub fn describe_schema(&self, table: &str) -> StoreResult<TableSchema> {
        let conn = self.connect()?;
        let info = catalog::resolve_table(&conn, table)?;
        if info.columns.is_empty() {
            return Err(StoreError::validation(format!("table '{}' not found", table)));
        }

        Ok(TableSchema {
            table: info.name,
            columns: info.columns,
        })
    }

    /// Enumerate user tables
    pub fn list_tables(&self) -> StoreResult<TableList> {
        let conn = self.connect()?;
        let tables = catalog::list_tables(&conn)?;
        Ok(TableList {
            count: tables.len(),
            tables,
        })
    }

    /// Fetch up to `limit` records, most recent id first
    ///
    /// A non-positive `limit` yields zero records.
    pub fn query_recent(&self, table: &str, limit: i64) -> StoreResult<RecentRecords> {
        let conn = self.connect()?;
        let info = catalog::resolve_table(&conn, table)?;
        let id_column = info.quoted_id_column()?;

        if limit <= 0 {
            return Ok(RecentRecords {
                table: info.name,
                count: 0,
                records: Vec::new(),
            });
        }

        let sql = format!(
            "SELECT * FROM {} ORDER BY {} DESC LIMIT ?1",
            info.quoted_name(),
            id_column
        );
        debug!(%sql, limit, "Built query statement");

        let mut stmt = conn.prepare(&sql)?;
        let names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let records = stmt
            .query_map(params![limit], |row| {
                let mut record = Record::with_capacity(names.len());
                for (idx, name) in names.iter().enumerate() {
                    record.push(name.clone(), SqlValue::from(row.get_ref(idx)?));
                }
                Ok(record)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(RecentRecords {
            table: info.name,
            count: records.len(),
            records,
        })
    }

    /// Delete the record with the given id
    pub fn delete_record(&self, table: &str, id: i64) -> StoreResult<DeleteOutcome> {
        let conn = self.connect()?;
        let info = catalog::resolve_table(&conn, table)?;
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1",
            info.quoted_name(),
            info.quoted_id_column()?
        );
        debug!(%sql, id, "Built delete statement");

        let deleted = conn.execute(&sql, params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound {
                table: info.name,
                id,
            });
        }
        info!(table = %info.name, id, "Record deleted");

        Ok(DeleteOutcome {
            message: format!("Record {} deleted from '{}'", id, info.name),
        })
    }

    /// Update only the supplied columns of one record
    pub fn update_record(
        &self,
        table: &str,
        id: i64,
        fields: &FieldMap,
    ) -> StoreResult<UpdateOutcome> {
        let conn = self.connect()?;
        let info = catalog::resolve_table(&conn, table)?;
        let id_column = info.quoted_id_column()?;
        let columns = info.resolve_fields(fields)?;

        if columns.iter().any(|(name, _)| name.eq_ignore_ascii_case("id")) {
            return Err(StoreError::validation("the 'id' column cannot be updated"));
        }

        let set_clause = columns
            .iter()
            .enumerate()
            .map(|(i, (name, _))| format!("{} = ?{}", quote_identifier(name), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            info.quoted_name(),
            set_clause,
            id_column,
            columns.len() + 1
        );
        debug!(%sql, id, "Built update statement");

        let mut bound: Vec<&dyn ToSql> = columns
            .iter()
            .map(|(_, value)| *value as &dyn ToSql)
            .collect();
        bound.push(&id);

        let updated = conn.execute(&sql, bound.as_slice())?;
        if updated == 0 {
            return Err(StoreError::NotFound {
                table: info.name,
                id,
            });
        }
        info!(table = %info.name, id, "Record updated");

        Ok(UpdateOutcome {
            message: format!("Record {} in '{}' updated", id, info.name),
            updated_fields: fields.clone(),
        })
    }
}
