//! SQLite-backed favorites store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode};

use super::{FavoriteEntry, FavoriteUpdate, FavoritesError, FavoritesStore, NewFavorite};

/// SQLite-backed favorites store.
pub struct SqliteFavoritesStore {
    conn: Mutex<Connection>,
}

impl SqliteFavoritesStore {
    /// Create a new store, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, FavoritesError> {
        let conn = Connection::open(path).map_err(|e| FavoritesError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, FavoritesError> {
        let conn =
            Connection::open_in_memory().map_err(|e| FavoritesError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), FavoritesError> {
        conn.execute_batch(
            r#"
            -- One row per favorited movie (tmdb_id unique per store)
            CREATE TABLE IF NOT EXISTS favorites (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tmdb_id INTEGER NOT NULL UNIQUE,
                title TEXT NOT NULL,
                poster_path TEXT,
                vote_average REAL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_favorites_tmdb_id ON favorites(tmdb_id);
            "#,
        )
        .map_err(|e| FavoritesError::Database(e.to_string()))?;

        Ok(())
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<FavoriteEntry> {
        let created_at_str: String = row.get(5)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(FavoriteEntry {
            id: row.get(0)?,
            tmdb_id: row.get(1)?,
            title: row.get(2)?,
            poster_path: row.get(3)?,
            vote_average: row.get(4)?,
            created_at,
        })
    }

    fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
        )
    }
}

impl FavoritesStore for SqliteFavoritesStore {
    fn list(&self) -> Result<Vec<FavoriteEntry>, FavoritesError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT id, tmdb_id, title, poster_path, vote_average, created_at
                 FROM favorites ORDER BY id",
            )
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_entry)
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| FavoritesError::Database(e.to_string()))?);
        }
        Ok(entries)
    }

    fn add(&self, favorite: NewFavorite) -> Result<FavoriteEntry, FavoritesError> {
        let conn = self.conn.lock().unwrap();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        conn.execute(
            "INSERT INTO favorites (tmdb_id, title, poster_path, vote_average, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                favorite.tmdb_id,
                &favorite.title,
                &favorite.poster_path,
                favorite.vote_average,
                &now_str,
            ],
        )
        .map_err(|e| {
            if Self::is_unique_violation(&e) {
                FavoritesError::Duplicate(favorite.tmdb_id)
            } else {
                FavoritesError::Database(e.to_string())
            }
        })?;

        let id = conn.last_insert_rowid();

        Ok(FavoriteEntry {
            id,
            tmdb_id: favorite.tmdb_id,
            title: favorite.title,
            poster_path: favorite.poster_path,
            vote_average: favorite.vote_average,
            created_at: now,
        })
    }

    fn get(&self, id: i64) -> Result<FavoriteEntry, FavoritesError> {
        let conn = self.conn.lock().unwrap();

        conn.query_row(
            "SELECT id, tmdb_id, title, poster_path, vote_average, created_at
             FROM favorites WHERE id = ?",
            params![id],
            Self::row_to_entry,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => FavoritesError::NotFound(id),
            _ => FavoritesError::Database(e.to_string()),
        })
    }

    fn update(&self, id: i64, update: FavoriteUpdate) -> Result<FavoriteEntry, FavoritesError> {
        {
            let conn = self.conn.lock().unwrap();

            let rows_affected = conn
                .execute(
                    "UPDATE favorites SET
                        title = COALESCE(?, title),
                        poster_path = COALESCE(?, poster_path)
                     WHERE id = ?",
                    params![&update.title, &update.poster_path, id],
                )
                .map_err(|e| FavoritesError::Database(e.to_string()))?;

            if rows_affected == 0 {
                return Err(FavoritesError::NotFound(id));
            }
        }

        self.get(id)
    }

    fn remove(&self, id: i64) -> Result<(), FavoritesError> {
        let conn = self.conn.lock().unwrap();

        let rows_affected = conn
            .execute("DELETE FROM favorites WHERE id = ?", params![id])
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        if rows_affected == 0 {
            return Err(FavoritesError::NotFound(id));
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), FavoritesError> {
        let conn = self.conn.lock().unwrap();

        conn.execute("DELETE FROM favorites", [])
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        Ok(())
    }
}
