//! Story generation engine with a JSON archive.
//!
//! This crate provides:
//! - Prompt assembly from structured story parameters
//! - Chat-based story generation with conversation memory
//! - Narration (text to speech) and illustration requests
//! - A flat-file JSON archive of every story told
//!
//! # Quick Start
//!
//! ```ignore
//! use fireside_core::{SessionConfig, StoryParams, StorySession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = StorySession::new(SessionConfig::new())?;
//!
//!     let params = StoryParams::new().with_main_character("Mei Ling");
//!     let record = session.generate(&params).await?;
//!     println!("{}", record.text);
//!
//!     if params.include_audio {
//!         let audio = session.narrate(&record).await?;
//!         println!("Narration saved to {}", audio.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod memory;
pub mod prompt;
pub mod session;
pub mod speech;
pub mod story;
pub mod testing;

// Primary public API
pub use archive::{Archive, ArchiveError};
pub use memory::StoryMemory;
pub use session::{SessionConfig, SessionError, StorySession};
pub use story::{Language, StoryParams, StoryRecord};
pub use testing::{MockNarrator, TestHarness};
