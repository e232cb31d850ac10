//! Dictionary character ("chachar") types.

use serde::{Deserialize, Serialize};

use super::EntryId;

/// A dictionary entry: one Chinese character with pronunciation, stroke
/// count, and its radical relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chachar {
    pub id: EntryId,
    /// The character itself, exactly one Han scalar.
    pub glyph: String,
    /// Romanized pronunciation without tone marks (tone is a separate digit).
    pub pinyin: String,
    /// IPA transcription.
    pub ipa: String,
    /// Tone 0..=4, 0 is the neutral tone.
    pub tone: u8,
    /// Stroke count, 1..=99.
    pub strokes: u8,
    /// Whether this character can serve as a radical for other characters.
    pub is_radical: bool,
    /// Glyph of the radical this character is filed under, if any.
    pub radical: Option<String>,
    /// Glyph of the alternate radical form used when writing this character
    /// (e.g. 氵 instead of 水). Only meaningful together with `radical`.
    pub alternative: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload for inserting a new character. The id and timestamps are assigned
/// by the database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewChachar {
    pub glyph: String,
    pub pinyin: String,
    pub ipa: String,
    pub tone: u8,
    pub strokes: u8,
    pub is_radical: bool,
    pub radical: Option<String>,
    pub alternative: Option<String>,
}

impl NewChachar {
    /// Returns a copy with surrounding whitespace stripped from all text
    /// fields. Empty reference fields collapse to None so `" "` and `""`
    /// behave like an absent radical.
    pub fn normalized(&self) -> NewChachar {
        NewChachar {
            glyph: self.glyph.trim().to_string(),
            pinyin: self.pinyin.trim().to_string(),
            ipa: self.ipa.trim().to_string(),
            tone: self.tone,
            strokes: self.strokes,
            is_radical: self.is_radical,
            radical: trim_opt(&self.radical),
            alternative: trim_opt(&self.alternative),
        }
    }
}

fn trim_opt(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Partial update for an existing character. `None` leaves a field untouched;
/// the reference fields use a nested Option so they can be cleared
/// (`Some(None)`) as well as replaced.
#[derive(Debug, Clone, Default)]
pub struct ChacharPatch {
    pub pinyin: Option<String>,
    pub ipa: Option<String>,
    pub tone: Option<u8>,
    pub strokes: Option<u8>,
    pub is_radical: Option<bool>,
    pub radical: Option<Option<String>>,
    pub alternative: Option<Option<String>>,
}

impl ChacharPatch {
    pub fn is_empty(&self) -> bool {
        self.pinyin.is_none()
            && self.ipa.is_none()
            && self.tone.is_none()
            && self.strokes.is_none()
            && self.is_radical.is_none()
            && self.radical.is_none()
            && self.alternative.is_none()
    }

    /// The row as it would look with this patch applied. Glyph, id, and
    /// timestamps are never patched.
    pub fn apply_to(&self, current: &Chachar) -> Chachar {
        Chachar {
            id: current.id,
            glyph: current.glyph.clone(),
            pinyin: self
                .pinyin
                .as_deref()
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| current.pinyin.clone()),
            ipa: self
                .ipa
                .as_deref()
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| current.ipa.clone()),
            tone: self.tone.unwrap_or(current.tone),
            strokes: self.strokes.unwrap_or(current.strokes),
            is_radical: self.is_radical.unwrap_or(current.is_radical),
            radical: match &self.radical {
                Some(new) => trim_opt(new),
                None => current.radical.clone(),
            },
            alternative: match &self.alternative {
                Some(new) => trim_opt(new),
                None => current.alternative.clone(),
            },
            created_at: current.created_at,
            updated_at: current.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shui() -> Chachar {
        Chachar {
            id: 1,
            glyph: "水".to_string(),
            pinyin: "shui".to_string(),
            ipa: "ʂweɪ".to_string(),
            tone: 3,
            strokes: 4,
            is_radical: true,
            radical: None,
            alternative: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn normalized_trims_and_collapses_empty_refs() {
        let new = NewChachar {
            glyph: " 河 ".to_string(),
            pinyin: " he ".to_string(),
            ipa: "xɤ".to_string(),
            tone: 2,
            strokes: 8,
            is_radical: false,
            radical: Some("  ".to_string()),
            alternative: None,
        };
        let n = new.normalized();
        assert_eq!(n.glyph, "河");
        assert_eq!(n.pinyin, "he");
        assert_eq!(n.radical, None);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let cur = shui();
        let patch = ChacharPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&cur), cur);
    }

    #[test]
    fn patch_replaces_and_clears_fields() {
        let cur = shui();
        let patch = ChacharPatch {
            pinyin: Some(" shui ".to_string()),
            tone: Some(4),
            radical: Some(Some("水".to_string())),
            ..Default::default()
        };
        let updated = patch.apply_to(&cur);
        assert_eq!(updated.pinyin, "shui");
        assert_eq!(updated.tone, 4);
        assert_eq!(updated.radical.as_deref(), Some("水"));
        assert_eq!(updated.strokes, cur.strokes);
        assert_eq!(updated.glyph, cur.glyph);

        let clear = ChacharPatch {
            radical: Some(None),
            ..Default::default()
        };
        assert_eq!(clear.apply_to(&updated).radical, None);
    }
}
