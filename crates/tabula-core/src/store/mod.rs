//! Table Operations Facade
//!
//! Generic CRUD operations over a SQLite store. Every operation opens its own
//! connection, resolves caller-supplied identifiers against the live catalog,
//! runs one parameterized statement, and closes the connection again.
//!
//! Callers either use the typed methods on [`TableStore`] (which return
//! [`StoreResult`]) or hand a [`TableRequest`] to [`TableStore::handle`],
//! which never fails and always yields an [`OperationResult`].

pub mod bootstrap;
mod catalog;
mod error;
mod facade;
mod record;
mod request;
mod result;
mod value;


pub use bootstrap::{DEMO_TABLES, ensure_demo_schema};
pub use catalog::quote_identifier;
pub use error::{StoreError, StoreResult};
pub use facade::TableStore;
pub use record::{ColumnDescriptor, Record};
pub use request::TableRequest;
pub use result::{
    DeleteOutcome, Failure, FailureKind, InsertOutcome, OperationResult, RecentRecords,
    TableList, TableSchema, UpdateOutcome,
};
pub use value::{FieldMap, SqlValue, fields_from_json};
