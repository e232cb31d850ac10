//! `zidian alt add <glyph> --original <radical>` – add an alternate form.

use anyhow::Result;
use zidian_core::dict_db::DictDb;
use zidian_core::model::NewAlternative;
use zidian_core::validate::FieldRules;

pub async fn run_alt_add(db: &DictDb, rules: &FieldRules, new: &NewAlternative) -> Result<()> {
    let id = db.insert_alternative(new, rules).await?;
    println!(
        "Added form {} of radical {} (id {id})",
        new.glyph.trim(),
        new.original.trim()
    );
    Ok(())
}
