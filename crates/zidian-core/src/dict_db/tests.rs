//! Tests for dict_db (use the in-memory DB helper from db).

use crate::dict_db::db::open_memory;
use crate::model::{ChacharPatch, NewAlternative, NewChachar};
use crate::validate::FieldRules;

fn rules() -> FieldRules {
    FieldRules::default()
}

fn new_chachar(glyph: &str, strokes: u8) -> NewChachar {
    NewChachar {
        glyph: glyph.to_string(),
        pinyin: "x".to_string(),
        ipa: "x".to_string(),
        tone: 1,
        strokes,
        is_radical: false,
        radical: None,
        alternative: None,
    }
}

fn new_radical(glyph: &str, strokes: u8) -> NewChachar {
    NewChachar {
        is_radical: true,
        ..new_chachar(glyph, strokes)
    }
}

#[tokio::test]
async fn insert_get_list_roundtrip() {
    let db = open_memory().await.unwrap();
    assert!(db.list_chachars().await.unwrap().is_empty());

    let new = NewChachar {
        glyph: " 水 ".to_string(),
        pinyin: "shui".to_string(),
        ipa: "ʂweɪ".to_string(),
        tone: 3,
        strokes: 4,
        is_radical: true,
        radical: None,
        alternative: None,
    };
    let id = db.insert_chachar(&new, &rules()).await.unwrap();

    let got = db.get_chachar("水").await.unwrap().expect("exists");
    assert_eq!(got.id, id);
    assert_eq!(got.glyph, "水");
    assert_eq!(got.pinyin, "shui");
    assert_eq!(got.tone, 3);
    assert_eq!(got.strokes, 4);
    assert!(got.is_radical);
    assert_eq!(got.radical, None);

    assert!(db.get_chachar("火").await.unwrap().is_none());
    assert_eq!(db.list_chachars().await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_is_in_dictionary_order() {
    let db = open_memory().await.unwrap();
    db.insert_chachar(&new_chachar("河", 8), &rules())
        .await
        .unwrap();
    db.insert_chachar(&new_chachar("一", 1), &rules())
        .await
        .unwrap();
    db.insert_chachar(&new_radical("水", 4), &rules())
        .await
        .unwrap();

    let glyphs: Vec<String> = db
        .list_chachars()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.glyph)
        .collect();
    assert_eq!(glyphs, ["一", "水", "河"]);

    let radicals = db.list_radicals().await.unwrap();
    assert_eq!(radicals.len(), 1);
    assert_eq!(radicals[0].glyph, "水");
}

#[tokio::test]
async fn duplicate_insert_rejected() {
    let db = open_memory().await.unwrap();
    db.insert_chachar(&new_chachar("水", 4), &rules())
        .await
        .unwrap();
    let err = db
        .insert_chachar(&new_chachar("水", 4), &rules())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already exists"), "{err:#}");
}

#[tokio::test]
async fn field_rules_enforced_at_db_boundary() {
    let db = open_memory().await.unwrap();

    let mut bad_tone = new_chachar("水", 4);
    bad_tone.tone = 7;
    assert!(db.insert_chachar(&bad_tone, &rules()).await.is_err());

    let mut bad_pinyin = new_chachar("水", 4);
    bad_pinyin.pinyin = "shuǐ".to_string();
    assert!(db.insert_chachar(&bad_pinyin, &rules()).await.is_err());

    assert!(db
        .insert_chachar(&new_chachar("ab", 4), &rules())
        .await
        .is_err());

    assert!(db.list_chachars().await.unwrap().is_empty());
}

#[tokio::test]
async fn radical_chain_insert_and_delete_ordering() {
    let db = open_memory().await.unwrap();
    db.insert_chachar(&new_radical("水", 4), &rules())
        .await
        .unwrap();
    db.insert_alternative(
        &NewAlternative {
            glyph: "氵".to_string(),
            original: "水".to_string(),
            strokes: 3,
        },
        &rules(),
    )
    .await
    .unwrap();

    let mut he = new_chachar("河", 8);
    he.radical = Some("水".to_string());
    he.alternative = Some("氵".to_string());
    db.insert_chachar(&he, &rules()).await.unwrap();

    // 氵 is used by 河, 水 is referenced by both.
    assert!(db.delete_alternative("氵").await.is_err());
    assert!(db.delete_chachar("水").await.is_err());

    db.delete_chachar("河").await.unwrap();
    // Still blocked: the form 氵 derives from 水.
    assert!(db.delete_chachar("水").await.is_err());

    db.delete_alternative("氵").await.unwrap();
    db.delete_chachar("水").await.unwrap();
    assert!(db.list_chachars().await.unwrap().is_empty());
    assert!(db.list_alternatives().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_with_missing_radical_rejected() {
    let db = open_memory().await.unwrap();
    let mut he = new_chachar("河", 8);
    he.radical = Some("水".to_string());
    let err = db.insert_chachar(&he, &rules()).await.unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{err:#}");
}

#[tokio::test]
async fn alternative_listing_and_filter() {
    let db = open_memory().await.unwrap();
    db.insert_chachar(&new_radical("水", 4), &rules())
        .await
        .unwrap();
    db.insert_chachar(&new_radical("手", 4), &rules())
        .await
        .unwrap();
    for (glyph, original) in [("氵", "水"), ("⺘", "手")] {
        db.insert_alternative(
            &NewAlternative {
                glyph: glyph.to_string(),
                original: original.to_string(),
                strokes: 3,
            },
            &rules(),
        )
        .await
        .unwrap();
    }

    assert_eq!(db.list_alternatives().await.unwrap().len(), 2);
    let of_water = db.list_alternatives_of("水").await.unwrap();
    assert_eq!(of_water.len(), 1);
    assert_eq!(of_water[0].glyph, "氵");

    let got = db.get_alternative("⺘").await.unwrap().expect("exists");
    assert_eq!(got.original, "手");
}

#[tokio::test]
async fn update_patches_fields_and_rechecks() {
    let db = open_memory().await.unwrap();
    db.insert_chachar(&new_radical("水", 4), &rules())
        .await
        .unwrap();
    let mut he = new_chachar("河", 9);
    he.radical = Some("水".to_string());
    db.insert_chachar(&he, &rules()).await.unwrap();

    let patch = ChacharPatch {
        pinyin: Some("he".to_string()),
        tone: Some(2),
        strokes: Some(8),
        ..Default::default()
    };
    let updated = db.update_chachar("河", &patch, &rules()).await.unwrap();
    assert_eq!(updated.pinyin, "he");
    assert_eq!(updated.tone, 2);
    assert_eq!(updated.strokes, 8);
    assert_eq!(updated.radical.as_deref(), Some("水"));

    let got = db.get_chachar("河").await.unwrap().expect("exists");
    assert_eq!(got.tone, 2);
    assert_eq!(got.strokes, 8);

    // Clearing the radical reference frees 水 for deletion.
    let clear = ChacharPatch {
        radical: Some(None),
        ..Default::default()
    };
    db.update_chachar("河", &clear, &rules()).await.unwrap();
    db.delete_chachar("水").await.unwrap();

    // Demoting a referenced radical is refused.
    db.insert_chachar(&new_radical("山", 3), &rules())
        .await
        .unwrap();
    let refile = ChacharPatch {
        radical: Some(Some("山".to_string())),
        ..Default::default()
    };
    db.update_chachar("河", &refile, &rules()).await.unwrap();
    let demote = ChacharPatch {
        is_radical: Some(false),
        ..Default::default()
    };
    assert!(db.update_chachar("山", &demote, &rules()).await.is_err());

    // Updating a missing character reports not found.
    assert!(db
        .update_chachar("火", &ChacharPatch::default(), &rules())
        .await
        .is_err());

    // Bad patched values are refused.
    let bad = ChacharPatch {
        tone: Some(9),
        ..Default::default()
    };
    assert!(db.update_chachar("河", &bad, &rules()).await.is_err());
}

#[tokio::test]
async fn open_at_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state dir").join("dict.db");

    {
        let db = crate::dict_db::DictDb::open_at(&path).await.unwrap();
        db.insert_chachar(&new_radical("水", 4), &rules())
            .await
            .unwrap();
    }

    let db = crate::dict_db::DictDb::open_at(&path).await.unwrap();
    let got = db.get_chachar("水").await.unwrap().expect("persisted");
    assert!(got.is_radical);
}
