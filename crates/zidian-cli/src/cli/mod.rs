//! CLI for the zidian character dictionary.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use zidian_core::config;
use zidian_core::dict_db::DictDb;
use zidian_core::validate::FieldRules;

use commands::{
    run_add, run_alt_add, run_alt_list, run_alt_remove, run_list, run_remove, run_show, run_update,
};

/// Top-level CLI for the zidian character dictionary.
#[derive(Debug, Parser)]
#[command(name = "zidian")]
#[command(about = "zidian: dictionary of Chinese characters, radicals, and their forms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a character to the dictionary.
    Add {
        /// The character itself (one Han glyph).
        glyph: String,
        /// Pinyin without tone marks (tone is given separately).
        #[arg(long)]
        pinyin: String,
        /// IPA transcription.
        #[arg(long)]
        ipa: String,
        /// Tone 0-4 (0 = neutral).
        #[arg(long)]
        tone: u8,
        /// Stroke count 1-99.
        #[arg(long)]
        strokes: u8,
        /// Glyph of the radical this character is filed under.
        #[arg(long)]
        radical: Option<String>,
        /// Alternate radical form used when writing this character.
        #[arg(long, requires = "radical")]
        alternative: Option<String>,
        /// Mark this character as a radical.
        #[arg(long)]
        is_radical: bool,
    },

    /// Show one character (and, for radicals, its alternate forms).
    Show {
        /// The character to show.
        glyph: String,
        /// Emit JSON instead of the human-readable view.
        #[arg(long)]
        json: bool,
    },

    /// List characters.
    List {
        /// Only characters marked as radicals.
        #[arg(long)]
        radicals: bool,
        /// Emit JSON instead of the table.
        #[arg(long)]
        json: bool,
    },

    /// Update fields of an existing character.
    Update {
        /// The character to update.
        glyph: String,
        #[arg(long)]
        pinyin: Option<String>,
        #[arg(long)]
        ipa: Option<String>,
        #[arg(long)]
        tone: Option<u8>,
        #[arg(long)]
        strokes: Option<u8>,
        /// File the character under this radical.
        #[arg(long, conflicts_with = "clear_radical")]
        radical: Option<String>,
        /// Remove the radical reference.
        #[arg(long)]
        clear_radical: bool,
        /// Use this alternate radical form.
        #[arg(long, conflicts_with = "clear_alternative")]
        alternative: Option<String>,
        /// Remove the alternate-form reference.
        #[arg(long)]
        clear_alternative: bool,
        /// Set or clear radical status (true/false).
        #[arg(long)]
        is_radical: Option<bool>,
    },

    /// Remove a character. Refused while anything still references it.
    Remove {
        /// The character to remove.
        glyph: String,
    },

    /// Manage alternate radical forms.
    #[command(subcommand)]
    Alt(AltCommand),
}

#[derive(Debug, Subcommand)]
pub enum AltCommand {
    /// Add an alternate form of a radical.
    Add {
        /// The form itself, e.g. 氵.
        glyph: String,
        /// Glyph of the radical it is a form of.
        #[arg(long)]
        original: String,
        /// Stroke count 1-99.
        #[arg(long)]
        strokes: u8,
    },

    /// List alternate forms.
    List {
        /// Only forms of this radical.
        #[arg(long, value_name = "GLYPH")]
        of: Option<String>,
        /// Emit JSON instead of the table.
        #[arg(long)]
        json: bool,
    },

    /// Remove an alternate form. Refused while characters are written with it.
    Remove {
        /// The form to remove.
        glyph: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let db = match &cfg.database_path {
            Some(path) => DictDb::open_at(path).await?,
            None => DictDb::open_default().await?,
        };
        let rules = FieldRules {
            allow_rare_ideographs: cfg.allow_rare_ideographs,
        };

        match cli.command {
            CliCommand::Add {
                glyph,
                pinyin,
                ipa,
                tone,
                strokes,
                radical,
                alternative,
                is_radical,
            } => {
                let new = zidian_core::model::NewChachar {
                    glyph,
                    pinyin,
                    ipa,
                    tone,
                    strokes,
                    is_radical,
                    radical,
                    alternative,
                };
                run_add(&db, &rules, &new).await?
            }
            CliCommand::Show { glyph, json } => run_show(&db, &glyph, json).await?,
            CliCommand::List { radicals, json } => {
                run_list(&db, radicals, json, cfg.list_limit).await?
            }
            CliCommand::Update {
                glyph,
                pinyin,
                ipa,
                tone,
                strokes,
                radical,
                clear_radical,
                alternative,
                clear_alternative,
                is_radical,
            } => {
                let patch = zidian_core::model::ChacharPatch {
                    pinyin,
                    ipa,
                    tone,
                    strokes,
                    is_radical,
                    radical: if clear_radical {
                        Some(None)
                    } else {
                        radical.map(Some)
                    },
                    alternative: if clear_alternative {
                        Some(None)
                    } else {
                        alternative.map(Some)
                    },
                };
                run_update(&db, &rules, &glyph, &patch).await?
            }
            CliCommand::Remove { glyph } => run_remove(&db, &glyph).await?,
            CliCommand::Alt(alt) => match alt {
                AltCommand::Add {
                    glyph,
                    original,
                    strokes,
                } => {
                    let new = zidian_core::model::NewAlternative {
                        glyph,
                        original,
                        strokes,
                    };
                    run_alt_add(&db, &rules, &new).await?
                }
                AltCommand::List { of, json } => {
                    run_alt_list(&db, of.as_deref(), json, cfg.list_limit).await?
                }
                AltCommand::Remove { glyph } => run_alt_remove(&db, &glyph).await?,
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
