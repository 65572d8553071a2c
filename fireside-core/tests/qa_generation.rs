//! QA tests for live story generation.
//!
//! These tests call the real API and spend real tokens.
//! Run with: `cargo test -p fireside-core --test qa_generation -- --ignored --nocapture`
//!
//! These tests require OPENAI_API_KEY to be set.

use fireside_core::{SessionConfig, StoryParams, StorySession};
use tempfile::TempDir;

/// Load environment variables from .env file
fn setup() {
    let _ = dotenvy::dotenv();
}

/// Check if API key is available
fn has_api_key() -> bool {
    std::env::var("OPENAI_API_KEY").is_ok()
}

fn test_config(temp_dir: &TempDir) -> SessionConfig {
    SessionConfig::new()
        .with_stories_dir(temp_dir.path().join("saved_stories"))
        .with_audio_dir(temp_dir.path().join("audio"))
}

// =============================================================================
// TEST 1: Basic generation and archiving
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_generate_and_archive() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: OPENAI_API_KEY not set");
        return;
    }

    println!("\n=== TEST: Basic Story Generation ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut session =
        StorySession::new(test_config(&temp_dir)).expect("Failed to create session");

    let params = StoryParams::new().with_length_minutes(1);
    let record = session.generate(&params).await.expect("Generation failed");

    println!("Story ({} words):", record.word_count());
    println!(
        "{}...",
        record.text.chars().take(200).collect::<String>()
    );

    assert!(
        !record.text.trim().is_empty(),
        "Story text should not be empty"
    );
    assert!(
        record.word_count() > 20,
        "A one minute story should have real length"
    );

    let records = session
        .archived_stories()
        .await
        .expect("Failed to load archive");
    assert_eq!(records.len(), 1, "Archive should hold the new story");
    assert_eq!(records[0].main_character, params.main_character);

    println!("\nSUCCESS: Story generated and archived!");
}

// =============================================================================
// TEST 2: Consecutive stories share the session
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_consecutive_stories() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: OPENAI_API_KEY not set");
        return;
    }

    println!("\n=== TEST: Consecutive Stories ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut session =
        StorySession::new(test_config(&temp_dir)).expect("Failed to create session");

    let first = StoryParams::new()
        .with_main_character("Amirah")
        .with_length_minutes(1);
    let second = StoryParams::new()
        .with_main_character("Amirah's brother")
        .with_length_minutes(1);

    session.generate(&first).await.expect("First story failed");
    println!("First story done.");
    session
        .generate(&second)
        .await
        .expect("Second story failed");
    println!("Second story done.");

    assert_eq!(
        session.memory().message_count(),
        4,
        "Two exchanges should be remembered"
    );

    let records = session
        .archived_stories()
        .await
        .expect("Failed to load archive");
    assert_eq!(records.len(), 2, "Both stories should be archived");
    assert_eq!(records[0].main_character, "Amirah");
    assert_eq!(records[1].main_character, "Amirah's brother");

    println!("\nSUCCESS: Both stories archived in order!");
}

// =============================================================================
// TEST 3: Narration writes an audio file
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_narration_writes_audio() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: OPENAI_API_KEY not set");
        return;
    }

    println!("\n=== TEST: Narration ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut session =
        StorySession::new(test_config(&temp_dir)).expect("Failed to create session");

    let params = StoryParams::new()
        .with_length_minutes(1)
        .with_audio(true);
    let record = session.generate(&params).await.expect("Generation failed");

    let audio_path = session.narrate(&record).await.expect("Narration failed");
    println!("Audio saved to: {}", audio_path.display());

    assert!(audio_path.exists(), "Audio file should exist");
    assert_eq!(
        audio_path.extension().and_then(|e| e.to_str()),
        Some("mp3")
    );
    let size = std::fs::metadata(&audio_path)
        .expect("Failed to stat audio file")
        .len();
    assert!(size > 0, "Audio file should not be empty");

    println!("\nSUCCESS: Narration produced {size} bytes of audio!");
}

// =============================================================================
// TEST 4: Illustration returns image URLs
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_illustration_returns_urls() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: OPENAI_API_KEY not set");
        return;
    }

    println!("\n=== TEST: Illustration ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut session =
        StorySession::new(test_config(&temp_dir)).expect("Failed to create session");

    let params = StoryParams::new()
        .with_length_minutes(1)
        .with_illustrations(true);
    let record = session.generate(&params).await.expect("Generation failed");

    let urls = session
        .illustrate(&record)
        .await
        .expect("Illustration failed");
    for url in &urls {
        println!("Image URL: {url}");
    }

    assert!(!urls.is_empty(), "At least one image URL expected");
    assert!(
        urls[0].starts_with("http"),
        "Image URL should be a web address"
    );

    println!("\nSUCCESS: Illustration request returned {} URL(s)!", urls.len());
}
