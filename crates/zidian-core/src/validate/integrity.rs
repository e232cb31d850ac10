//! Referential-integrity checks over a snapshot of both collections.
//!
//! Pure functions: the store loads a snapshot inside the write transaction
//! and asks these before touching any row. Collections are dictionary-sized
//! (hundreds, not millions), so linear scans are fine.

use crate::model::{Alternative, Chachar, NewAlternative, NewChachar};

use super::ValidationError;

/// How many referrers a conflict message names before truncating.
const NAMED_REFERRERS: usize = 5;

fn name_list(mut names: Vec<&str>) -> String {
    names.sort_unstable();
    if names.len() > NAMED_REFERRERS {
        let extra = names.len() - NAMED_REFERRERS;
        format!("{} and {} more", names[..NAMED_REFERRERS].join(", "), extra)
    } else {
        names.join(", ")
    }
}

fn find_chachar<'a>(chachars: &'a [Chachar], glyph: &str) -> Option<&'a Chachar> {
    chachars.iter().find(|c| c.glyph == glyph)
}

fn find_alternative<'a>(alternatives: &'a [Alternative], glyph: &str) -> Option<&'a Alternative> {
    alternatives.iter().find(|a| a.glyph == glyph)
}

/// Checks a declared radical reference: the target must exist and be marked
/// as a radical.
fn check_radical_ref(
    own_glyph: &str,
    radical: &str,
    chachars: &[Chachar],
) -> Result<(), ValidationError> {
    if radical == own_glyph {
        return Err(ValidationError::SelfRadical(own_glyph.to_string()));
    }
    match find_chachar(chachars, radical) {
        None => Err(ValidationError::RadicalMissing(radical.to_string())),
        Some(target) if !target.is_radical => {
            Err(ValidationError::NotARadical(radical.to_string()))
        }
        Some(_) => Ok(()),
    }
}

/// Checks a declared alternative-form reference: a radical must also be
/// declared, the form must exist, and it must be a form of that radical.
fn check_alternative_ref(
    radical: Option<&str>,
    alternative: &str,
    alternatives: &[Alternative],
) -> Result<(), ValidationError> {
    let Some(radical) = radical else {
        return Err(ValidationError::AlternativeWithoutRadical);
    };
    match find_alternative(alternatives, alternative) {
        None => Err(ValidationError::AlternativeFormMissing(
            alternative.to_string(),
        )),
        Some(form) if form.original != radical => Err(ValidationError::AlternativeMismatch {
            glyph: alternative.to_string(),
            original: form.original.clone(),
            declared: radical.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

pub fn check_insert_chachar(
    new: &NewChachar,
    chachars: &[Chachar],
    alternatives: &[Alternative],
) -> Result<(), ValidationError> {
    if find_chachar(chachars, &new.glyph).is_some() {
        return Err(ValidationError::DuplicateChachar(new.glyph.clone()));
    }
    if let Some(radical) = &new.radical {
        check_radical_ref(&new.glyph, radical, chachars)?;
    }
    if let Some(alternative) = &new.alternative {
        check_alternative_ref(new.radical.as_deref(), alternative, alternatives)?;
    }
    Ok(())
}

pub fn check_insert_alternative(
    new: &NewAlternative,
    chachars: &[Chachar],
    alternatives: &[Alternative],
) -> Result<(), ValidationError> {
    if find_alternative(alternatives, &new.glyph).is_some() {
        return Err(ValidationError::DuplicateAlternative(new.glyph.clone()));
    }
    match find_chachar(chachars, &new.original) {
        None => Err(ValidationError::RadicalMissing(new.original.clone())),
        Some(target) if !target.is_radical => {
            Err(ValidationError::NotARadical(new.original.clone()))
        }
        Some(_) => Ok(()),
    }
}

/// A character can be deleted only when nothing points at it: no other
/// character files under it as a radical, and no alternate form derives
/// from it.
pub fn check_delete_chachar(
    glyph: &str,
    chachars: &[Chachar],
    alternatives: &[Alternative],
) -> Result<(), ValidationError> {
    if find_chachar(chachars, glyph).is_none() {
        return Err(ValidationError::ChacharNotFound(glyph.to_string()));
    }

    let referrers: Vec<&str> = chachars
        .iter()
        .filter(|c| c.radical.as_deref() == Some(glyph))
        .map(|c| c.glyph.as_str())
        .collect();
    if !referrers.is_empty() {
        return Err(ValidationError::UsedAsRadical {
            glyph: glyph.to_string(),
            referrers: name_list(referrers),
        });
    }

    let forms: Vec<&str> = alternatives
        .iter()
        .filter(|a| a.original == glyph)
        .map(|a| a.glyph.as_str())
        .collect();
    if !forms.is_empty() {
        return Err(ValidationError::HasAlternatives {
            glyph: glyph.to_string(),
            forms: name_list(forms),
        });
    }

    Ok(())
}

/// An alternate form can be deleted only when no character is written with it.
pub fn check_delete_alternative(
    glyph: &str,
    chachars: &[Chachar],
    alternatives: &[Alternative],
) -> Result<(), ValidationError> {
    if find_alternative(alternatives, glyph).is_none() {
        return Err(ValidationError::AlternativeNotFound(glyph.to_string()));
    }

    let referrers: Vec<&str> = chachars
        .iter()
        .filter(|c| c.alternative.as_deref() == Some(glyph))
        .map(|c| c.glyph.as_str())
        .collect();
    if !referrers.is_empty() {
        return Err(ValidationError::AlternativeInUse {
            glyph: glyph.to_string(),
            referrers: name_list(referrers),
        });
    }

    Ok(())
}

/// Re-checks references for an updated row, and blocks clearing radical
/// status while the character is still referenced as a radical.
pub fn check_update_chachar(
    current: &Chachar,
    updated: &Chachar,
    chachars: &[Chachar],
    alternatives: &[Alternative],
) -> Result<(), ValidationError> {
    if let Some(radical) = &updated.radical {
        check_radical_ref(&updated.glyph, radical, chachars)?;
    }
    if let Some(alternative) = &updated.alternative {
        check_alternative_ref(updated.radical.as_deref(), alternative, alternatives)?;
    }

    if current.is_radical && !updated.is_radical {
        let mut referrers: Vec<&str> = chachars
            .iter()
            .filter(|c| c.glyph != current.glyph && c.radical.as_deref() == Some(&current.glyph))
            .map(|c| c.glyph.as_str())
            .collect();
        referrers.extend(
            alternatives
                .iter()
                .filter(|a| a.original == current.glyph)
                .map(|a| a.glyph.as_str()),
        );
        if !referrers.is_empty() {
            return Err(ValidationError::UsedAsRadical {
                glyph: current.glyph.to_string(),
                referrers: name_list(referrers),
            });
        }
    }

    Ok(())
}
