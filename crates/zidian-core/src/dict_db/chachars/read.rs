//! Character read operations: get and list.

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use crate::model::Chachar;

use super::super::db::DictDb;

fn from_row(row: &SqliteRow) -> Chachar {
    Chachar {
        id: row.get("id"),
        glyph: row.get("glyph"),
        pinyin: row.get("pinyin"),
        ipa: row.get("ipa"),
        tone: row.get("tone"),
        strokes: row.get("strokes"),
        is_radical: row.get("is_radical"),
        radical: row.get("radical"),
        alternative: row.get("alternative"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// All characters in dictionary order (strokes, then glyph). Used for the
/// write-transaction snapshot as well as listing.
pub(crate) async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Chachar>> {
    let rows = sqlx::query(
        r#"
        SELECT id, glyph, pinyin, ipa, tone, strokes, is_radical,
               radical, alternative, created_at, updated_at
        FROM chachars
        ORDER BY strokes ASC, glyph ASC
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

impl DictDb {
    /// Fetch a single character by its glyph.
    pub async fn get_chachar(&self, glyph: &str) -> Result<Option<Chachar>> {
        let row = sqlx::query(
            r#"
            SELECT id, glyph, pinyin, ipa, tone, strokes, is_radical,
                   radical, alternative, created_at, updated_at
            FROM chachars
            WHERE glyph = ?1
            "#,
        )
        .bind(glyph.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(from_row))
    }

    /// List all characters in dictionary order (strokes, then glyph).
    pub async fn list_chachars(&self) -> Result<Vec<Chachar>> {
        let mut conn = self.pool.acquire().await?;
        fetch_all(&mut conn).await
    }

    /// List only the characters marked as radicals.
    pub async fn list_radicals(&self) -> Result<Vec<Chachar>> {
        let rows = sqlx::query(
            r#"
            SELECT id, glyph, pinyin, ipa, tone, strokes, is_radical,
                   radical, alternative, created_at, updated_at
            FROM chachars
            WHERE is_radical = 1
            ORDER BY strokes ASC, glyph ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(from_row).collect())
    }
}
