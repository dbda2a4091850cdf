//! Identifier allow-list built from the live catalog
//!
//! Table and column names arrive from callers and end up in SQL text, so they
//! are only ever embedded after being matched against what the database
//! itself reports, and always in their catalog spelling, double-quoted.

use super::error::{StoreError, StoreResult};
use super::record::ColumnDescriptor;
use super::value::{FieldMap, SqlValue};
use rusqlite::Connection;

/// Quote an identifier for embedding in SQL text
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// User tables, excluding SQLite's internal `sqlite_*` tables
pub(crate) fn list_tables(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Column descriptors in declaration order; empty if the table is unknown
pub(crate) fn table_columns(
    conn: &Connection,
    table: &str,
) -> rusqlite::Result<Vec<ColumnDescriptor>> {
    let mut stmt = conn.prepare(
        "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid",
    )?;
    let columns = stmt
        .query_map([table], |row| {
            Ok(ColumnDescriptor {
                name: row.get(0)?,
                declared_type: row.get(1)?,
                not_null: row.get::<_, i64>(2)? != 0,
                primary_key: row.get::<_, i64>(3)? != 0,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// A table resolved against the catalog
#[derive(Debug, Clone)]
pub(crate) struct TableInfo {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableInfo {
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    pub fn quoted_name(&self) -> String {
        quote_identifier(&self.name)
    }

    /// Quoted name of the `id` column, required by id-addressed operations
    pub fn quoted_id_column(&self) -> StoreResult<String> {
        self.column("id")
            .map(|column| quote_identifier(&column.name))
            .ok_or_else(|| {
                StoreError::validation(format!("table '{}' has no 'id' column", self.name))
            })
    }

    /// Map caller fields onto catalog columns, in field-map order
    ///
    /// Returns the canonical column name next to each value.
    pub fn resolve_fields<'a>(
        &self,
        fields: &'a FieldMap,
    ) -> StoreResult<Vec<(String, &'a SqlValue)>> {
        if fields.is_empty() {
            return Err(StoreError::validation("no fields supplied"));
        }

        let mut resolved: Vec<(String, &SqlValue)> = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            let column = self.column(key).ok_or_else(|| {
                StoreError::validation(format!(
                    "column '{}' does not exist in table '{}'",
                    key, self.name
                ))
            })?;
            if resolved.iter().any(|(name, _)| name == &column.name) {
                return Err(StoreError::validation(format!(
                    "column '{}' supplied more than once",
                    column.name
                )));
            }
            resolved.push((column.name.clone(), value));
        }
        Ok(resolved)
    }
}

/// Resolve a caller-supplied table name
pub(crate) fn resolve_table(conn: &Connection, requested: &str) -> StoreResult<TableInfo> {
    if requested.trim().is_empty() {
        return Err(StoreError::validation("table name must not be empty"));
    }

    let name = list_tables(conn)?
        .into_iter()
        .find(|name| name.eq_ignore_ascii_case(requested))
        .ok_or_else(|| StoreError::validation(format!("table '{}' not found", requested)))?;

    let columns = table_columns(conn, &name)?;
    Ok(TableInfo { name, columns })
}
