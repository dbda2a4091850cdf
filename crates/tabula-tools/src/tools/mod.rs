//! Tool implementations organized by category
//!
//! - `table` - Generic CRUD over the SQLite table store

pub mod table;
