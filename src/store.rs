//! Catalog store
//!
//! One SQLite table of items, wrapped in a `Store` with the handful of
//! queries the endpoints need. Each request opens its own `Store` and drops
//! it on the way out; there is no pool and no shared connection.

use std::path::Path;

use rusqlite::{params, Connection, Row};
use serde::Serialize;

use crate::error::AppError;

/// A stored item: what it is, where it lives, whose it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub belongs_to: String,
}

impl Item {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
            belongs_to: row.get(3)?,
        })
    }
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    location TEXT NOT NULL,
    belongs_to TEXT NOT NULL
)";

/// Sample catalog used by `whereabouts init`.
const SAMPLE_DATA: &[(&str, &str, &str)] = &[
    ("phone charger", "blue suitcase in bedroom", "John"),
    ("passport", "black backpack side pocket", "Alice"),
    ("laptop", "office desk drawer", "Bob"),
    ("headphones", "red suitcase front pocket", "Sarah"),
    ("stapler", "just removed it", "Mike"),
];

/// A catalog connection. The table is created on open if missing.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the catalog at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Open an in-memory catalog (for tests).
    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Insert the sample rows. Existing rows are left alone.
    pub fn seed_sample_data(&self) -> Result<usize, AppError> {
        let mut inserted = 0;
        for (name, location, belongs_to) in SAMPLE_DATA {
            inserted += self.conn.execute(
                "INSERT INTO items (name, location, belongs_to) VALUES (?1, ?2, ?3)",
                params![name, location, belongs_to],
            )?;
        }
        Ok(inserted)
    }

    /// Insert an item and return its assigned id.
    pub fn add_item(&self, name: &str, location: &str, belongs_to: &str) -> Result<i64, AppError> {
        self.conn.execute(
            "INSERT INTO items (name, location, belongs_to) VALUES (?1, ?2, ?3)",
            params![name, location, belongs_to],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Full-record replace by id. Returns rows affected; updating a
    /// non-existent id affects zero rows and is not an error.
    pub fn update_item(
        &self,
        id: i64,
        name: &str,
        location: &str,
        belongs_to: &str,
    ) -> Result<usize, AppError> {
        let affected = self.conn.execute(
            "UPDATE items SET name = ?1, location = ?2, belongs_to = ?3 WHERE id = ?4",
            params![name, location, belongs_to, id],
        )?;
        Ok(affected)
    }

    /// Delete by id. Returns rows affected; a non-existent id is a no-op.
    pub fn delete_item(&self, id: i64) -> Result<usize, AppError> {
        let affected = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(affected)
    }

    /// All stored names in insertion order, duplicates included.
    pub fn all_names(&self) -> Result<Vec<String>, AppError> {
        let mut stmt = self.conn.prepare("SELECT name FROM items ORDER BY id")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// First item (lowest id) with exactly this name. Ranked search results
    /// resolve names back to records through here, so duplicate names always
    /// resolve to the earliest row.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Item>, AppError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, location, belongs_to FROM items WHERE name = ?1 ORDER BY id LIMIT 1")?;
        let mut rows = stmt.query_map(params![name], Item::from_row)?;
        match rows.next() {
            Some(item) => Ok(Some(item?)),
            None => Ok(None),
        }
    }

    /// Case-insensitive substring scan over names (the fallback search path).
    pub fn substring_search(&self, term: &str) -> Result<Vec<Item>, AppError> {
        let pattern = format!("%{}%", like_escape(term));
        let mut stmt = self.conn.prepare(
            "SELECT id, name, location, belongs_to FROM items
             WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id",
        )?;
        let items = stmt
            .query_map(params![pattern], Item::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Prefix match over names for autocomplete, capped at `limit`.
    pub fn prefix_suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>, AppError> {
        let pattern = format!("{}%", like_escape(prefix));
        let mut stmt = self.conn.prepare(
            "SELECT name FROM items WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id LIMIT ?2",
        )?;
        let names = stmt
            .query_map(params![pattern, limit as i64], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn like_escape(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
