//! Speech synthesis for story narration.

use crate::story::Language;
use chrono::{DateTime, Local};
use openai::{OpenAi, SpeechRequest};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors from narration.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Speech API error: {0}")]
    Api(#[from] openai::Error),
}

/// Narrate `text` in the given language and save the audio into `dir`,
/// creating the directory if needed. Returns the path of the new file.
///
/// Files are named by local save time, `story_YYYYMMDD_HHMMSS.mp3`.
pub async fn synthesize(
    client: &OpenAi,
    text: &str,
    language: Language,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, SpeechError> {
    let request = SpeechRequest::new(text).with_language(language.speech_code());
    let bytes = client.speak(request).await?;

    let dir = dir.as_ref();
    fs::create_dir_all(dir).await?;

    let path = dir.join(audio_file_name(&Local::now()));
    fs::write(&path, bytes).await?;
    Ok(path)
}

fn audio_file_name(now: &DateTime<Local>) -> String {
    format!("story_{}.mp3", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_audio_file_name_format() {
        let saved = Local
            .with_ymd_and_hms(2024, 3, 7, 14, 5, 9)
            .single()
            .expect("valid timestamp");
        assert_eq!(audio_file_name(&saved), "story_20240307_140509.mp3");
    }
}
