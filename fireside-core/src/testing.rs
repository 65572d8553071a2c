//! Testing utilities for the story engine.
//!
//! This module provides tools for integration testing:
//! - `MockNarrator` for deterministic testing without API calls
//! - `TestHarness` for running the generation pipeline in memory
//! - Assertion helpers for verifying records

use crate::memory::StoryMemory;
use crate::prompt;
use crate::story::{StoryParams, StoryRecord};

/// A mock narrator that returns scripted stories.
///
/// Use this for deterministic integration tests without API calls.
pub struct MockNarrator {
    /// Scripted stories to return in order.
    responses: Vec<String>,
    /// Index of next response to return.
    response_index: usize,
}

impl MockNarrator {
    /// Create a new mock narrator with scripted stories.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            response_index: 0,
        }
    }

    /// Return the next scripted story.
    pub fn tell(&mut self, _prompt: &str) -> String {
        if self.response_index < self.responses.len() {
            let story = self.responses[self.response_index].clone();
            self.response_index += 1;
            story
        } else {
            "The narrator has no more scripted stories.".to_string()
        }
    }

    /// Add a story to the queue.
    pub fn queue_story(&mut self, story: impl Into<String>) {
        self.responses.push(story.into());
    }

    /// Reset the response index to replay from the beginning.
    pub fn reset(&mut self) {
        self.response_index = 0;
    }
}

/// Test harness for running generation scenarios without network or disk.
///
/// Exercises the same prompt assembly and memory bookkeeping as a real
/// session, with a [`MockNarrator`] in place of the chat API.
pub struct TestHarness {
    /// The mock narrator.
    pub narrator: MockNarrator,
    /// The conversation memory.
    pub memory: StoryMemory,
}

impl TestHarness {
    /// Create a new test harness with no scripted stories.
    pub fn new() -> Self {
        Self {
            narrator: MockNarrator::new(Vec::new()),
            memory: StoryMemory::new(),
        }
    }

    /// Queue a story for the next generation.
    pub fn expect_story(&mut self, text: impl Into<String>) -> &mut Self {
        self.narrator.queue_story(text);
        self
    }

    /// Run one generation and return the resulting record.
    pub fn generate(&mut self, params: &StoryParams) -> StoryRecord {
        let prompt = prompt::build_story_prompt(params);
        self.memory.add_user_message(&prompt);

        let text = self.narrator.tell(&prompt);
        self.memory.add_assistant_message(&text);

        StoryRecord::new(params, text)
    }

    /// Number of request/reply exchanges so far.
    pub fn exchange_count(&self) -> usize {
        self.memory.message_count() / 2
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that a record carries the parameters it was generated from.
#[track_caller]
pub fn assert_record_matches(record: &StoryRecord, params: &StoryParams) {
    assert_eq!(
        record.main_character, params.main_character,
        "Expected record for '{}', got '{}'",
        params.main_character, record.main_character
    );
    assert_eq!(
        record.language, params.language,
        "Expected record in {}, got {}",
        params.language, record.language
    );
    assert_eq!(
        record.length_minutes, params.length_minutes,
        "Expected a {} minute story, got {} minutes",
        params.length_minutes, record.length_minutes
    );
}

/// Assert the harness has seen the expected number of exchanges.
#[track_caller]
pub fn assert_exchanges(harness: &TestHarness, expected: usize) {
    assert_eq!(
        harness.exchange_count(),
        expected,
        "Expected {expected} exchanges, got {}",
        harness.exchange_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Language;

    #[test]
    fn test_mock_narrator_basic() {
        let mut harness = TestHarness::new();
        harness.expect_story("Kai stepped off the bus into the rain.");

        let record = harness.generate(&StoryParams::default());

        assert_eq!(record.text, "Kai stepped off the bus into the rain.");
        assert_record_matches(&record, &StoryParams::default());
    }

    #[test]
    fn test_mock_narrator_exhausted() {
        let mut harness = TestHarness::new();
        harness.expect_story("First story.");

        harness.generate(&StoryParams::default());
        let record = harness.generate(&StoryParams::default());

        assert_eq!(record.text, "The narrator has no more scripted stories.");
    }

    #[test]
    fn test_harness_tracks_exchanges() {
        let mut harness = TestHarness::new();
        for _ in 0..3 {
            harness.generate(&StoryParams::default());
        }
        assert_exchanges(&harness, 3);
    }

    #[test]
    fn test_prompt_recorded_in_memory() {
        let mut harness = TestHarness::new();
        harness.expect_story("Once upon a time.");

        let params = StoryParams::new().with_language(Language::Chinese);
        harness.generate(&params);

        let messages = harness.memory.messages();
        assert!(messages[0].content.starts_with("请用纯中文写一个故事 about "));
        assert_eq!(messages[1].content, "Once upon a time.");
    }

    #[test]
    fn test_narrator_reset() {
        let mut narrator = MockNarrator::new(vec!["Story one.".to_string()]);
        assert_eq!(narrator.tell("prompt"), "Story one.");
        narrator.reset();
        assert_eq!(narrator.tell("prompt"), "Story one.");
    }
}
