//! Tests for content loading and consistency
//!
//! These tests verify that:
//! 1. A content TOML file round-trips through the loader
//! 2. A malformed file yields a parse error naming the path
//! 3. Content::load falls back to the built-in set
//! 4. The built-in set is internally consistent

use std::io::Write;

use questdeck::content::{lint, Content, ContentError};
use questdeck::domain::{group_by_module, QuestStatus};

/// Write a content bundle to a temp file and load it back
fn roundtrip(content: &Content) -> Content {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");
    std::fs::write(&path, toml::to_string_pretty(content).unwrap()).unwrap();
    Content::from_file(&path).unwrap()
}

#[test]
fn test_content_toml_roundtrip() {
    let original = Content::builtin();
    let loaded = roundtrip(&original);

    assert_eq!(loaded.quests.len(), original.quests.len());
    assert_eq!(loaded.path.len(), original.path.len());
    assert_eq!(loaded.character.level, original.character.level);
    assert_eq!(loaded.recent_achievements, original.recent_achievements);

    // status enums survive the trip
    assert_eq!(loaded.quests[2].status, QuestStatus::InProgress);
    assert_eq!(loaded.quests[2].progress, Some(65));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "this is not = [ valid toml").unwrap();

    let err = Content::from_file(&path).unwrap_err();
    match err {
        ContentError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    assert!(matches!(
        Content::from_file(&path),
        Err(ContentError::Read { .. })
    ));
}

#[test]
fn test_load_falls_back_to_builtin_on_broken_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");
    std::fs::write(&path, "quests = 3").unwrap();

    let content = Content::load(Some(&path));
    assert_eq!(content.quests.len(), Content::builtin().quests.len());
}

#[test]
fn test_builtin_set_is_consistent() {
    let content = Content::builtin();
    assert!(lint(&content).is_empty());

    // every unlock id in the sample path resolves
    for node in &content.path {
        for unlock in &node.unlocks {
            assert!(
                content.path.iter().any(|n| &n.id == unlock),
                "unresolvable unlock {unlock} on {}",
                node.id
            );
        }
    }
}

#[test]
fn test_builtin_board_grouping() {
    let content = Content::builtin();
    let groups = group_by_module(&content.quests);

    let modules: Vec<_> = groups.iter().map(|g| g.module).collect();
    assert_eq!(
        modules,
        vec![
            "Frontend Basics",
            "Frontend Frameworks",
            "Backend Development"
        ]
    );
    assert_eq!(groups[0].completed(), 2);
}
