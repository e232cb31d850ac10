//! Alternate radical form types.

use serde::{Deserialize, Serialize};

use super::EntryId;

/// An alternate written form of a radical, e.g. 氵 for 水. Each form belongs
/// to exactly one radical (`original`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: EntryId,
    /// The form itself, exactly one character.
    pub glyph: String,
    /// Glyph of the radical this is a form of.
    pub original: String,
    /// Stroke count of the form, 1..=99.
    pub strokes: u8,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload for inserting a new alternate form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAlternative {
    pub glyph: String,
    pub original: String,
    pub strokes: u8,
}

impl NewAlternative {
    /// Copy with surrounding whitespace stripped from the glyph fields.
    pub fn normalized(&self) -> NewAlternative {
        NewAlternative {
            glyph: self.glyph.trim().to_string(),
            original: self.original.trim().to_string(),
            strokes: self.strokes,
        }
    }
}
