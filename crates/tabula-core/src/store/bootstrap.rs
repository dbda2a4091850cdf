//! Demonstration schema created on startup

use rusqlite::Connection;

/// Tables created by [`ensure_demo_schema`]
pub const DEMO_TABLES: [&str; 4] = ["students", "teachers", "products", "employees"];

const DEMO_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    parent_name TEXT,
    profession TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS teachers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    subject TEXT,
    experience_years INTEGER,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL,
    category TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    department TEXT,
    position TEXT,
    salary REAL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

/// Create the demonstration tables if they are missing
///
/// Idempotent: existing tables and their rows are left untouched.
pub fn ensure_demo_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(DEMO_SCHEMA)
}
