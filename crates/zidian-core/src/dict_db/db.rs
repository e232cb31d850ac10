//! Connection handling, migrations, and timestamp helpers. Entity CRUD
//! lives in `chachars` and `alternatives`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut uri = String::with_capacity(raw.len() + 16);
    uri.push_str("sqlite://");
    for c in raw.chars() {
        match c {
            '%' => uri.push_str("%25"),
            ' ' => uri.push_str("%20"),
            '#' => uri.push_str("%23"),
            '?' => uri.push_str("%3F"),
            '&' => uri.push_str("%26"),
            c => uri.push(c),
        }
    }
    uri.push_str("?mode=rwc");
    uri
}

/// Handle to the SQLite-backed dictionary database.
///
/// The database file is stored under the XDG state directory:
/// `~/.local/state/zidian/dict.db`.
#[derive(Clone)]
pub struct DictDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl DictDb {
    /// Open (or create) the default dictionary database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("zidian")?;
        let state_dir = xdg_dirs.get_state_home().join("zidian");
        let db_path = state_dir.join("dict.db");

        // Ensure parent directory exists.
        tokio::fs::create_dir_all(&state_dir).await?;

        Self::connect(&db_path).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs
    /// if needed. Used by the config `database_path` override and by tests.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Self::connect(path).await
    }

    async fn connect(path: &Path) -> Result<Self> {
        let uri = path_to_sqlite_uri(path);
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let db = DictDb { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // Glyph is the natural key of both tables; referential rules are
        // enforced by the validation layer rather than SQL foreign keys so
        // refusals can name the referrers.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chachars (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                glyph TEXT NOT NULL UNIQUE,
                pinyin TEXT NOT NULL,
                ipa TEXT NOT NULL,
                tone INTEGER NOT NULL,
                strokes INTEGER NOT NULL,
                is_radical INTEGER NOT NULL DEFAULT 0,
                radical TEXT,
                alternative TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS alternatives (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                glyph TEXT NOT NULL UNIQUE,
                original TEXT NOT NULL,
                strokes INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<DictDb> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = DictDb { pool };
    db.migrate().await?;
    Ok(db)
}
