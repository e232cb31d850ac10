//! `zidian add <glyph> ...` – add a character to the dictionary.

use anyhow::Result;
use zidian_core::dict_db::DictDb;
use zidian_core::model::NewChachar;
use zidian_core::validate::FieldRules;

pub async fn run_add(db: &DictDb, rules: &FieldRules, new: &NewChachar) -> Result<()> {
    let id = db.insert_chachar(new, rules).await?;
    let glyph = new.glyph.trim();
    if new.is_radical {
        println!("Added radical {glyph} (id {id})");
    } else {
        println!("Added character {glyph} (id {id})");
    }
    Ok(())
}
