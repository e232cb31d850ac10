//! `zidian list` – list characters (all, or radicals only).

use anyhow::Result;
use zidian_core::dict_db::DictDb;

use super::dash;

pub async fn run_list(db: &DictDb, radicals: bool, json: bool, limit: usize) -> Result<()> {
    let chachars = if radicals {
        db.list_radicals().await?
    } else {
        db.list_chachars().await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&chachars)?);
        return Ok(());
    }

    if chachars.is_empty() {
        println!("No characters in the dictionary.");
        return Ok(());
    }

    let total = chachars.len();
    let shown = if limit > 0 { limit.min(total) } else { total };

    println!(
        "{:<4} {:<8} {:<10} {:<5} {:<8} {:<6} {}",
        "CHAR", "STROKES", "PINYIN", "TONE", "RADICAL", "FORM", "R"
    );
    for c in &chachars[..shown] {
        println!(
            "{:<4} {:<8} {:<10} {:<5} {:<8} {:<6} {}",
            c.glyph,
            c.strokes,
            c.pinyin,
            c.tone,
            dash(c.radical.as_deref()),
            dash(c.alternative.as_deref()),
            if c.is_radical { "*" } else { "" }
        );
    }
    if shown < total {
        println!("(showing first {shown} of {total}; see list_limit in config)");
    }

    Ok(())
}
