//! SQLite schema for persisted graphs

use rusqlite::{Connection, OptionalExtension, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Fresh database, tables created
    Created,
    /// Existing database at the current version
    Existing,
    /// Existing database written by a different schema version
    Unsupported(i32),
}

const SCHEMA_SQL: &str = r#"
-- Graph metadata (schema_version, dimensions)
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Nodes in insertion order (rowid)
CREATE TABLE IF NOT EXISTS nodes (
    id TEXT PRIMARY KEY
);

-- Directed edges; cost is a JSON array of components
CREATE TABLE IF NOT EXISTS edges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source_id TEXT NOT NULL,
    target_id TEXT NOT NULL,
    cost TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_edges_source ON edges(source_id);
CREATE INDEX IF NOT EXISTS idx_edges_pair ON edges(source_id, target_id);
"#;

pub fn get_meta(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row("SELECT value FROM meta WHERE key = ?1", [key], |r| r.get(0))
        .optional()
}

pub fn set_meta(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO meta (key, value) VALUES (?1, ?2)",
        [key, value],
    )?;
    Ok(())
}

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let has_meta: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'meta'",
        [],
        |r| r.get(0),
    )?;

    let current_version = if has_meta {
        get_meta(conn, "schema_version")?.map(|s| s.parse().unwrap_or(0))
    } else {
        None
    };

    match current_version {
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            set_meta(conn, "schema_version", &CURRENT_SCHEMA_VERSION.to_string())?;
            Ok(SchemaCreateResult::Created)
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => Ok(SchemaCreateResult::Existing),
        Some(v) => Ok(SchemaCreateResult::Unsupported(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(create_schema(&conn).unwrap(), SchemaCreateResult::Created);
        assert_eq!(create_schema(&conn).unwrap(), SchemaCreateResult::Existing);
        assert_eq!(
            get_meta(&conn, "schema_version").unwrap(),
            Some(CURRENT_SCHEMA_VERSION.to_string())
        );
    }

    #[test]
    fn test_future_schema_is_unsupported() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        set_meta(&conn, "schema_version", "99").unwrap();
        assert_eq!(
            create_schema(&conn).unwrap(),
            SchemaCreateResult::Unsupported(99)
        );
    }
}
