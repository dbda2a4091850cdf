//! Tool implementations for Tabula

pub mod tools;

pub use tools::table::{
    DeleteRecordTool, GetTableInfoTool, InsertToTableTool, ListAllTablesTool, QueryTableTool,
    UpdateRecordTool, get_table_tools,
};
