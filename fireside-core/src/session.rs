//! StorySession - the primary public API for story generation.
//!
//! Wraps the API client, conversation memory, and archive into a single
//! interface: generate a story, narrate it, illustrate it, browse the
//! archive.

use crate::archive::{Archive, ArchiveError};
use crate::memory::StoryMemory;
use crate::prompt;
use crate::speech::{self, SpeechError};
use crate::story::{StoryParams, StoryRecord};
use openai::{ChatRequest, ImageRequest, OpenAi};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from StorySession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("API error: {0}")]
    Api(#[from] openai::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Speech error: {0}")]
    Speech(#[from] SpeechError),

    #[error("No API key configured - set OPENAI_API_KEY environment variable")]
    NoApiKey,

    #[error("The story generation did not return any text. Please try again.")]
    EmptyStory,
}

/// Configuration for creating a new story session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding the story archive.
    pub stories_dir: PathBuf,

    /// Directory narration audio is written into.
    pub audio_dir: PathBuf,

    /// Model to use for story generation.
    pub model: Option<String>,

    /// Temperature for story generation.
    pub temperature: Option<f32>,

    /// Maximum tokens for story responses.
    pub max_tokens: Option<u32>,
}

impl SessionConfig {
    /// Create a session config with the standard directories.
    pub fn new() -> Self {
        Self {
            stories_dir: PathBuf::from("saved_stories"),
            audio_dir: PathBuf::from("audio"),
            model: None,
            temperature: Some(0.7),
            max_tokens: None,
        }
    }

    /// Set the archive directory.
    pub fn with_stories_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stories_dir = dir.into();
        self
    }

    /// Set the narration audio directory.
    pub fn with_audio_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.audio_dir = dir.into();
        self
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set temperature for generation.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens for responses.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A story-weaving session.
///
/// This is the main entry point. It manages:
/// - The API client
/// - The conversation history with the model
/// - The on-disk story archive
pub struct StorySession {
    client: OpenAi,
    config: SessionConfig,
    memory: StoryMemory,
    archive: Archive,
}

impl StorySession {
    /// Create a new session with the given configuration.
    ///
    /// Requires the `OPENAI_API_KEY` environment variable to be set.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let client = OpenAi::from_env().map_err(|_| SessionError::NoApiKey)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a session with a pre-built client.
    pub fn with_client(client: OpenAi, config: SessionConfig) -> Self {
        let archive = Archive::new(&config.stories_dir);
        Self {
            client,
            config,
            memory: StoryMemory::new(),
            archive,
        }
    }

    /// Generate a story and append it to the archive.
    ///
    /// The request carries the whole conversation window, so a follow-up
    /// story can refer back to earlier ones. The record is archived before
    /// any narration or illustration happens; those are separate calls.
    pub async fn generate(&mut self, params: &StoryParams) -> Result<StoryRecord, SessionError> {
        let prompt = prompt::build_story_prompt(params);
        self.memory.add_user_message(&prompt);

        let mut request = ChatRequest::new(self.memory.messages());
        if let Some(model) = &self.config.model {
            request = request.with_model(model);
        }
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let response = self.client.complete(request).await?;
        let text = response.text().to_string();
        self.memory.add_assistant_message(&text);

        if text.trim().is_empty() {
            return Err(SessionError::EmptyStory);
        }

        let record = StoryRecord::new(params, text);
        self.archive.append(&record).await?;
        Ok(record)
    }

    /// Narrate a story and return the path of the saved audio file.
    pub async fn narrate(&self, record: &StoryRecord) -> Result<PathBuf, SessionError> {
        let path = speech::synthesize(
            &self.client,
            &record.text,
            record.language,
            &self.config.audio_dir,
        )
        .await?;
        Ok(path)
    }

    /// Request illustrations for a story and return their URLs.
    pub async fn illustrate(&self, record: &StoryRecord) -> Result<Vec<String>, SessionError> {
        let request = ImageRequest::new(prompt::illustration_prompt(record));
        let response = self.client.illustrate(request).await?;
        Ok(response.urls)
    }

    /// Load every archived story, oldest first.
    pub async fn archived_stories(&self) -> Result<Vec<StoryRecord>, SessionError> {
        Ok(self.archive.load().await?)
    }

    /// Get a reference to the archive.
    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Get a reference to the conversation memory.
    pub fn memory(&self) -> &StoryMemory {
        &self.memory
    }

    /// Get a mutable reference to the conversation memory.
    pub fn memory_mut(&mut self) -> &mut StoryMemory {
        &mut self.memory
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config() {
        let config = SessionConfig::new()
            .with_stories_dir("my_stories")
            .with_model("gpt-4o")
            .with_temperature(0.9)
            .with_max_tokens(2048);

        assert_eq!(config.stories_dir, PathBuf::from("my_stories"));
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.temperature, Some(0.9));
        assert_eq!(config.max_tokens, Some(2048));
    }

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.stories_dir, PathBuf::from("saved_stories"));
        assert_eq!(config.audio_dir, PathBuf::from("audio"));
        assert_eq!(config.temperature, Some(0.7));
        assert!(config.model.is_none());
    }

    #[test]
    fn test_session_archive_location() {
        let client = OpenAi::new("test-key");
        let config = SessionConfig::new().with_stories_dir("somewhere/else");
        let session = StorySession::with_client(client, config);

        assert!(session
            .archive()
            .path()
            .ends_with("somewhere/else/stories.json"));
    }
}
