//! `zidian alt remove <glyph>` – remove an alternate form.

use anyhow::Result;
use zidian_core::dict_db::DictDb;

pub async fn run_alt_remove(db: &DictDb, glyph: &str) -> Result<()> {
    db.delete_alternative(glyph).await?;
    println!("Removed form {}", glyph.trim());
    Ok(())
}
