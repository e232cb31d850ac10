//! Error type shared by field and integrity validation.

use thiserror::Error;

/// A rejected write, naming the rule that blocked it. Delete conflicts carry
/// the referencing glyphs so the message tells the user what to remove first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("glyph must be exactly one character, got {0:?}")]
    GlyphNotSingle(String),
    #[error("'{0}' is not a Chinese character")]
    GlyphNotHan(char),
    #[error("pinyin must be non-empty printable ASCII")]
    BadPinyin,
    #[error("ipa transcription must not be empty")]
    EmptyIpa,
    #[error("tone must be between 0 and 4, got {0}")]
    ToneOutOfRange(u8),
    #[error("stroke count must be between 1 and 99, got {0}")]
    StrokesOutOfRange(u8),

    #[error("character {0} already exists")]
    DuplicateChachar(String),
    #[error("alternative form {0} already exists")]
    DuplicateAlternative(String),
    #[error("character {0} not found")]
    ChacharNotFound(String),
    #[error("alternative form {0} not found")]
    AlternativeNotFound(String),

    #[error("radical {0} does not exist in the dictionary")]
    RadicalMissing(String),
    #[error("{0} exists but is not marked as a radical")]
    NotARadical(String),
    #[error("{0} declares itself as its own radical")]
    SelfRadical(String),
    #[error("an alternative form is declared but no radical is")]
    AlternativeWithoutRadical,
    #[error("alternative form {0} does not exist")]
    AlternativeFormMissing(String),
    #[error("alternative form {glyph} belongs to radical {original}, not {declared}")]
    AlternativeMismatch {
        glyph: String,
        original: String,
        declared: String,
    },

    #[error("{glyph} is still used as a radical by {referrers}")]
    UsedAsRadical { glyph: String, referrers: String },
    #[error("{glyph} still has alternative forms: {forms}")]
    HasAlternatives { glyph: String, forms: String },
    #[error("alternative form {glyph} is still used by {referrers}")]
    AlternativeInUse { glyph: String, referrers: String },
}
