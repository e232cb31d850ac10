//! `zidian remove <glyph>` – remove a character.

use anyhow::Result;
use zidian_core::dict_db::DictDb;

pub async fn run_remove(db: &DictDb, glyph: &str) -> Result<()> {
    db.delete_chachar(glyph).await?;
    println!("Removed character {}", glyph.trim());
    Ok(())
}
