//! Alternate-form write operations: insert and delete.

use anyhow::Result;

use crate::model::{EntryId, NewAlternative};
use crate::validate::{field, integrity, FieldRules};

use super::super::db::{unix_timestamp, DictDb};
use super::super::snapshot::load_snapshot;

impl DictDb {
    /// Insert a new alternate form. Its `original` must exist and be marked
    /// as a radical.
    pub async fn insert_alternative(
        &self,
        new: &NewAlternative,
        rules: &FieldRules,
    ) -> Result<EntryId> {
        let new = new.normalized();
        field::validate_new_alternative(&new, rules)?;

        let mut tx = self.pool.begin().await?;
        let snap = load_snapshot(&mut tx).await?;
        integrity::check_insert_alternative(&new, &snap.chachars, &snap.alternatives)?;

        let now = unix_timestamp();
        let id = sqlx::query(
            r#"
            INSERT INTO alternatives (glyph, original, strokes, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new.glyph)
        .bind(&new.original)
        .bind(new.strokes)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
        tx.commit().await?;

        tracing::debug!(glyph = %new.glyph, original = %new.original, id, "inserted alternative");
        Ok(id)
    }

    /// Delete an alternate form. Refused while any character is written
    /// with it.
    pub async fn delete_alternative(&self, glyph: &str) -> Result<()> {
        let glyph = glyph.trim();

        let mut tx = self.pool.begin().await?;
        let snap = load_snapshot(&mut tx).await?;
        integrity::check_delete_alternative(glyph, &snap.chachars, &snap.alternatives)?;

        sqlx::query(
            r#"
            DELETE FROM alternatives
            WHERE glyph = ?1
            "#,
        )
        .bind(glyph)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(glyph = %glyph, "deleted alternative");
        Ok(())
    }
}
