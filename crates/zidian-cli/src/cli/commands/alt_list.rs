//! `zidian alt list` – list alternate forms, optionally of one radical.

use anyhow::Result;
use zidian_core::dict_db::DictDb;

pub async fn run_alt_list(
    db: &DictDb,
    of: Option<&str>,
    json: bool,
    limit: usize,
) -> Result<()> {
    let forms = match of {
        Some(original) => db.list_alternatives_of(original).await?,
        None => db.list_alternatives().await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&forms)?);
        return Ok(());
    }

    if forms.is_empty() {
        println!("No alternate forms.");
        return Ok(());
    }

    let total = forms.len();
    let shown = if limit > 0 { limit.min(total) } else { total };

    println!("{:<4} {:<8} {}", "FORM", "STROKES", "RADICAL");
    for f in &forms[..shown] {
        println!("{:<4} {:<8} {}", f.glyph, f.strokes, f.original);
    }
    if shown < total {
        println!("(showing first {shown} of {total}; see list_limit in config)");
    }

    Ok(())
}
