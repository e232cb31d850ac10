//! Alternate-form read operations: get and list.

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use crate::model::Alternative;

use super::super::db::DictDb;

fn from_row(row: &SqliteRow) -> Alternative {
    Alternative {
        id: row.get("id"),
        glyph: row.get("glyph"),
        original: row.get("original"),
        strokes: row.get("strokes"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// All alternate forms, grouped by their radical. Used for the
/// write-transaction snapshot as well as listing.
pub(crate) async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Alternative>> {
    let rows = sqlx::query(
        r#"
        SELECT id, glyph, original, strokes, created_at, updated_at
        FROM alternatives
        ORDER BY original ASC, glyph ASC
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

impl DictDb {
    /// Fetch a single alternate form by its glyph.
    pub async fn get_alternative(&self, glyph: &str) -> Result<Option<Alternative>> {
        let row = sqlx::query(
            r#"
            SELECT id, glyph, original, strokes, created_at, updated_at
            FROM alternatives
            WHERE glyph = ?1
            "#,
        )
        .bind(glyph.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(from_row))
    }

    /// List all alternate forms.
    pub async fn list_alternatives(&self) -> Result<Vec<Alternative>> {
        let mut conn = self.pool.acquire().await?;
        fetch_all(&mut conn).await
    }

    /// List the alternate forms of one radical.
    pub async fn list_alternatives_of(&self, original: &str) -> Result<Vec<Alternative>> {
        let rows = sqlx::query(
            r#"
            SELECT id, glyph, original, strokes, created_at, updated_at
            FROM alternatives
            WHERE original = ?1
            ORDER BY glyph ASC
            "#,
        )
        .bind(original.trim())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(from_row).collect())
    }
}
