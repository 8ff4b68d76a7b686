//! SQL DDL for initializing the message storage.

/// SQLite schema. `AUTOINCREMENT` keeps ids of deleted rows from being reused.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL
);
"#;
