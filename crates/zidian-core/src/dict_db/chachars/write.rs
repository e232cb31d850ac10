//! Character write operations: insert, update, delete.
//!
//! Each write validates fields first, then takes a snapshot inside its
//! transaction and runs the integrity checks before touching rows.

use anyhow::Result;

use crate::model::{Chachar, ChacharPatch, EntryId, NewChachar};
use crate::validate::{field, integrity, FieldRules, ValidationError};

use super::super::db::{unix_timestamp, DictDb};
use super::super::snapshot::load_snapshot;

impl DictDb {
    /// Insert a new character. Rejected unless all field rules pass, the
    /// glyph is new, and any declared radical/alternative reference resolves.
    pub async fn insert_chachar(&self, new: &NewChachar, rules: &FieldRules) -> Result<EntryId> {
        let new = new.normalized();
        field::validate_new_chachar(&new, rules)?;

        let mut tx = self.pool.begin().await?;
        let snap = load_snapshot(&mut tx).await?;
        integrity::check_insert_chachar(&new, &snap.chachars, &snap.alternatives)?;

        let now = unix_timestamp();
        let id = sqlx::query(
            r#"
            INSERT INTO chachars (
                glyph, pinyin, ipa, tone, strokes, is_radical,
                radical, alternative, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&new.glyph)
        .bind(&new.pinyin)
        .bind(&new.ipa)
        .bind(new.tone)
        .bind(new.strokes)
        .bind(new.is_radical)
        .bind(&new.radical)
        .bind(&new.alternative)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
        tx.commit().await?;

        tracing::debug!(glyph = %new.glyph, id, "inserted character");
        Ok(id)
    }

    /// Apply a partial update to an existing character and return the updated
    /// row. Field and reference rules are re-checked on the patched values.
    pub async fn update_chachar(
        &self,
        glyph: &str,
        patch: &ChacharPatch,
        rules: &FieldRules,
    ) -> Result<Chachar> {
        let glyph = glyph.trim();

        let mut tx = self.pool.begin().await?;
        let snap = load_snapshot(&mut tx).await?;
        let current = snap
            .chachars
            .iter()
            .find(|c| c.glyph == glyph)
            .ok_or_else(|| ValidationError::ChacharNotFound(glyph.to_string()))?;

        let mut updated = patch.apply_to(current);
        field::validate_patched_chachar(&updated, rules)?;
        integrity::check_update_chachar(current, &updated, &snap.chachars, &snap.alternatives)?;

        updated.updated_at = unix_timestamp();
        sqlx::query(
            r#"
            UPDATE chachars
            SET pinyin = ?1,
                ipa = ?2,
                tone = ?3,
                strokes = ?4,
                is_radical = ?5,
                radical = ?6,
                alternative = ?7,
                updated_at = ?8
            WHERE glyph = ?9
            "#,
        )
        .bind(&updated.pinyin)
        .bind(&updated.ipa)
        .bind(updated.tone)
        .bind(updated.strokes)
        .bind(updated.is_radical)
        .bind(&updated.radical)
        .bind(&updated.alternative)
        .bind(updated.updated_at)
        .bind(glyph)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(glyph = %glyph, "updated character");
        Ok(updated)
    }

    /// Delete a character. Refused while other characters file under it as a
    /// radical or while alternate forms still derive from it.
    pub async fn delete_chachar(&self, glyph: &str) -> Result<()> {
        let glyph = glyph.trim();

        let mut tx = self.pool.begin().await?;
        let snap = load_snapshot(&mut tx).await?;
        integrity::check_delete_chachar(glyph, &snap.chachars, &snap.alternatives)?;

        sqlx::query(
            r#"
            DELETE FROM chachars
            WHERE glyph = ?1
            "#,
        )
        .bind(glyph)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(glyph = %glyph, "deleted character");
        Ok(())
    }
}
