//! `zidian show <glyph>` – show one character in full.

use anyhow::{bail, Result};
use zidian_core::dict_db::DictDb;

use super::dash;

pub async fn run_show(db: &DictDb, glyph: &str, json: bool) -> Result<()> {
    let Some(chachar) = db.get_chachar(glyph).await? else {
        bail!("character {} not found", glyph.trim());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&chachar)?);
        return Ok(());
    }

    println!("{}  [{}{}]", chachar.glyph, chachar.pinyin, chachar.tone);
    println!("  ipa:      {}", chachar.ipa);
    println!("  strokes:  {}", chachar.strokes);
    println!("  radical:  {}", dash(chachar.radical.as_deref()));
    if let Some(alternative) = &chachar.alternative {
        println!("  written with form: {alternative}");
    }

    if chachar.is_radical {
        let forms = db.list_alternatives_of(&chachar.glyph).await?;
        if forms.is_empty() {
            println!("  radical (no alternate forms)");
        } else {
            let glyphs: Vec<&str> = forms.iter().map(|f| f.glyph.as_str()).collect();
            println!("  radical, alternate forms: {}", glyphs.join(" "));
        }
    }

    Ok(())
}
