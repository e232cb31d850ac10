//! Per-field validation of write payloads.

use crate::model::{Chachar, NewAlternative, NewChachar};

use super::ValidationError;

/// Knobs for glyph acceptance, derived from config.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    /// Accept the rare CJK extension blocks (Extension B and beyond).
    pub allow_rare_ideographs: bool,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            allow_rare_ideographs: true,
        }
    }
}

pub const TONE_MAX: u8 = 4;
pub const STROKES_MIN: u8 = 1;
pub const STROKES_MAX: u8 = 99;

/// Whether `c` is a Han ideograph acceptable as a dictionary headword.
fn is_han(c: char, rules: &FieldRules) -> bool {
    let cp = c as u32;
    matches!(cp,
        0x4E00..=0x9FFF      // CJK Unified Ideographs
        | 0x3400..=0x4DBF    // Extension A
        | 0xF900..=0xFAFF    // Compatibility Ideographs
    ) || (rules.allow_rare_ideographs && matches!(cp, 0x20000..=0x3FFFF))
}

/// Whether `c` may appear as an alternate radical form. These live in the
/// radical blocks (氵 is unified, but ⺡ and ⽔ are not).
fn is_radical_form(c: char) -> bool {
    let cp = c as u32;
    matches!(cp,
        0x2E80..=0x2EFF      // CJK Radicals Supplement
        | 0x2F00..=0x2FDF    // Kangxi Radicals
    )
}

/// Checks that `raw` (after trimming) is a single acceptable character and
/// returns it. `allow_radical_forms` widens the accepted blocks for
/// alternative-form glyphs.
pub fn validate_glyph(
    raw: &str,
    rules: &FieldRules,
    allow_radical_forms: bool,
) -> Result<char, ValidationError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(ValidationError::GlyphNotSingle(raw.to_string()));
    };
    if is_han(c, rules) || (allow_radical_forms && is_radical_form(c)) {
        Ok(c)
    } else {
        Err(ValidationError::GlyphNotHan(c))
    }
}

pub fn validate_pinyin(pinyin: &str) -> Result<(), ValidationError> {
    let trimmed = pinyin.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
        return Err(ValidationError::BadPinyin);
    }
    Ok(())
}

pub fn validate_tone(tone: u8) -> Result<(), ValidationError> {
    if tone > TONE_MAX {
        return Err(ValidationError::ToneOutOfRange(tone));
    }
    Ok(())
}

pub fn validate_strokes(strokes: u8) -> Result<(), ValidationError> {
    if !(STROKES_MIN..=STROKES_MAX).contains(&strokes) {
        return Err(ValidationError::StrokesOutOfRange(strokes));
    }
    Ok(())
}

fn validate_ipa(ipa: &str) -> Result<(), ValidationError> {
    if ipa.trim().is_empty() {
        return Err(ValidationError::EmptyIpa);
    }
    Ok(())
}

/// Field rules for a character insert. Reference glyphs (radical,
/// alternative) are only checked for shape; existence is integrity's job.
pub fn validate_new_chachar(new: &NewChachar, rules: &FieldRules) -> Result<(), ValidationError> {
    validate_glyph(&new.glyph, rules, false)?;
    validate_pinyin(&new.pinyin)?;
    validate_ipa(&new.ipa)?;
    validate_tone(new.tone)?;
    validate_strokes(new.strokes)?;
    if let Some(radical) = &new.radical {
        validate_glyph(radical, rules, false)?;
    }
    if let Some(alternative) = &new.alternative {
        validate_glyph(alternative, rules, true)?;
    }
    Ok(())
}

/// Field rules for a patched character row (glyph is unchanged and skipped).
pub fn validate_patched_chachar(row: &Chachar, rules: &FieldRules) -> Result<(), ValidationError> {
    validate_pinyin(&row.pinyin)?;
    validate_ipa(&row.ipa)?;
    validate_tone(row.tone)?;
    validate_strokes(row.strokes)?;
    if let Some(radical) = &row.radical {
        validate_glyph(radical, rules, false)?;
    }
    if let Some(alternative) = &row.alternative {
        validate_glyph(alternative, rules, true)?;
    }
    Ok(())
}

/// Field rules for an alternate-form insert.
pub fn validate_new_alternative(
    new: &NewAlternative,
    rules: &FieldRules,
) -> Result<(), ValidationError> {
    validate_glyph(&new.glyph, rules, true)?;
    validate_glyph(&new.original, rules, false)?;
    validate_strokes(new.strokes)?;
    Ok(())
}
