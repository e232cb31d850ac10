//! `zidian update <glyph> ...` – patch fields of an existing character.

use anyhow::{bail, Result};
use zidian_core::dict_db::DictDb;
use zidian_core::model::ChacharPatch;
use zidian_core::validate::FieldRules;

pub async fn run_update(
    db: &DictDb,
    rules: &FieldRules,
    glyph: &str,
    patch: &ChacharPatch,
) -> Result<()> {
    if patch.is_empty() {
        bail!("nothing to update; pass at least one field flag");
    }
    let updated = db.update_chachar(glyph, patch, rules).await?;
    println!("Updated {} [{}{}]", updated.glyph, updated.pinyin, updated.tone);
    Ok(())
}
