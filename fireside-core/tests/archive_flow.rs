//! Integration tests for the story archive.
//!
//! These run against a temporary directory and need no API key.

use fireside_core::archive::Archive;
use fireside_core::story::{Language, StoryParams};
use fireside_core::testing::TestHarness;
use tempfile::TempDir;

#[tokio::test]
async fn test_fresh_directory_has_no_stories() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let archive = Archive::new(temp_dir.path());

    let records = archive.load().await.expect("Load should succeed");
    assert!(records.is_empty(), "A fresh archive should be empty");
}

#[tokio::test]
async fn test_archive_grows_by_one_per_story() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let archive = Archive::new(temp_dir.path());

    let mut harness = TestHarness::new();
    for i in 0..4 {
        harness.expect_story(format!("Story number {i}."));
    }

    for i in 0..4usize {
        let params = StoryParams::new().with_main_character(format!("Character {i}"));
        let record = harness.generate(&params);
        archive
            .append(&record)
            .await
            .expect("Append should succeed");

        let records = archive.load().await.expect("Load should succeed");
        assert_eq!(records.len(), i + 1, "Each story adds exactly one record");
    }
}

#[tokio::test]
async fn test_record_fields_survive_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let archive = Archive::new(temp_dir.path());

    let params = StoryParams::new()
        .with_main_character("Wei Jie")
        .with_setting("a hawker centre after closing time")
        .with_language(Language::Chinese)
        .with_length_minutes(2)
        .with_audio(true);

    let mut harness = TestHarness::new();
    harness.expect_story("魏杰把最后一张桌子擦干净。");
    let record = harness.generate(&params);

    archive
        .append(&record)
        .await
        .expect("Append should succeed");

    let records = archive.load().await.expect("Load should succeed");
    let loaded = &records[0];
    assert_eq!(loaded.main_character, "Wei Jie");
    assert_eq!(loaded.setting, "a hawker centre after closing time");
    assert_eq!(loaded.language, Language::Chinese);
    assert_eq!(loaded.length_minutes, 2);
    assert!(loaded.include_audio);
    assert_eq!(loaded.text, "魏杰把最后一张桌子擦干净。");
    assert_eq!(loaded.saved_at, record.saved_at);
    assert_eq!(
        loaded.archive_label(),
        "Wei Jie - a hawker centre after closing time"
    );
}

#[tokio::test]
async fn test_mixed_format_archive_accumulates() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let archive = Archive::new(temp_dir.path());

    // Seed the file the way an older version wrote it.
    let legacy = r#"[
        {
            "main_character": "Hakim",
            "setting": "his mother's kitchen",
            "challenge": "neighbours who will not meet his eyes",
            "outcome": "a shared meal breaks the silence",
            "lesson": "Patience mends what pride broke",
            "length_minutes": 5,
            "text": "Hakim set the table for three.",
            "include_audio": "Yes",
            "language": "English"
        }
    ]"#;
    std::fs::create_dir_all(temp_dir.path()).expect("Create dir should succeed");
    std::fs::write(archive.path(), legacy).expect("Write should succeed");

    let mut harness = TestHarness::new();
    harness.expect_story("Dew on the void deck railings.");
    let record = harness.generate(&StoryParams::default());

    archive
        .append(&record)
        .await
        .expect("Append should succeed");

    let records = archive.load().await.expect("Load should succeed");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].conflict, "neighbours who will not meet his eyes");
    assert!(records[0].include_audio);
    assert_eq!(records[1].main_character, "Kai");
}
