//! Headless mode: one story from the command line, no TUI.
//!
//! Prints the story and a small set of `[TAG]` lines to stdout so the
//! output is easy to consume from scripts and automated tests.

use fireside_core::{Language, SessionConfig, SessionError, StoryParams, StorySession};

/// Parse headless flags into story parameters and session config.
///
/// Unknown flags are ignored so `--headless` itself (and future flags)
/// can pass through the same argument list.
pub fn parse_from_args(args: &[String]) -> (StoryParams, SessionConfig) {
    let mut params = StoryParams::new();
    let mut config = SessionConfig::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--character" => {
                if let Some(value) = args.get(i + 1) {
                    params.main_character = value.clone();
                    i += 1;
                }
            }
            "--setting" => {
                if let Some(value) = args.get(i + 1) {
                    params.setting = value.clone();
                    i += 1;
                }
            }
            "--conflict" => {
                if let Some(value) = args.get(i + 1) {
                    params.conflict = value.clone();
                    i += 1;
                }
            }
            "--resolution" => {
                if let Some(value) = args.get(i + 1) {
                    params.resolution = value.clone();
                    i += 1;
                }
            }
            "--moral" => {
                if let Some(value) = args.get(i + 1) {
                    params.moral = value.clone();
                    i += 1;
                }
            }
            "--language" => {
                if let Some(value) = args.get(i + 1) {
                    params.language = Language::parse(value).unwrap_or_default();
                    i += 1;
                }
            }
            "--minutes" => {
                if let Some(value) = args.get(i + 1) {
                    if let Ok(minutes) = value.parse::<u32>() {
                        params = params.with_length_minutes(minutes);
                    }
                    i += 1;
                }
            }
            "--audio" => {
                params.include_audio = true;
            }
            "--illustrate" => {
                params.include_illustrations = true;
            }
            "--stories-dir" => {
                if let Some(value) = args.get(i + 1) {
                    config = config.with_stories_dir(value);
                    i += 1;
                }
            }
            "--audio-dir" => {
                if let Some(value) = args.get(i + 1) {
                    config = config.with_audio_dir(value);
                    i += 1;
                }
            }
            "--model" => {
                if let Some(value) = args.get(i + 1) {
                    config = config.with_model(value.clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    (params, config)
}

/// Generate one story, save it, and optionally narrate and illustrate it.
pub async fn run_headless(params: StoryParams, config: SessionConfig) -> Result<(), SessionError> {
    println!("=== Fireside Headless Mode ===");
    println!("Character: {}", params.main_character);
    println!("Setting:   {}", params.setting);
    println!(
        "Language:  {} | {} minutes (about {} words)",
        params.language,
        params.length_minutes,
        params.target_words()
    );
    println!();

    let mut session = StorySession::new(config)?;

    println!("Generating your story...");
    println!();

    let record = session.generate(&params).await?;

    for paragraph in record.text.split("\n\n") {
        println!("{paragraph}");
        println!();
    }

    println!("[SAVED] {}", session.archive().path().display());

    // Narration and illustration failures are reported but do not fail the
    // run: the story is already saved.
    if params.include_audio {
        match session.narrate(&record).await {
            Ok(path) => println!("[AUDIO] {}", path.display()),
            Err(e) => println!("[ERROR] Audio failed: {e}"),
        }
    }

    if params.include_illustrations {
        match session.illustrate(&record).await {
            Ok(urls) => {
                for url in urls {
                    println!("[IMAGE] {url}");
                }
            }
            Err(e) => println!("[ERROR] Illustration failed: {e}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_story_flags() {
        let (params, _) = parse_from_args(&args(&[
            "--character",
            "Mei",
            "--setting",
            "a night market",
            "--language",
            "malay",
            "--minutes",
            "3",
            "--audio",
        ]));
        assert_eq!(params.main_character, "Mei");
        assert_eq!(params.setting, "a night market");
        assert_eq!(params.language, Language::Malay);
        assert_eq!(params.length_minutes, 3);
        assert!(params.include_audio);
        assert!(!params.include_illustrations);
    }

    #[test]
    fn test_parse_session_flags() {
        let (_, config) = parse_from_args(&args(&[
            "--stories-dir",
            "/tmp/stories",
            "--model",
            "gpt-4o",
        ]));
        assert_eq!(config.stories_dir, PathBuf::from("/tmp/stories"));
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_parse_clamps_minutes() {
        let (params, _) = parse_from_args(&args(&["--minutes", "45"]));
        assert_eq!(params.length_minutes, 10);
    }

    #[test]
    fn test_parse_ignores_unknown_flags() {
        let (params, _) =
            parse_from_args(&args(&["--headless", "--wat", "--character", "Kai"]));
        assert_eq!(params.main_character, "Kai");
    }

    #[test]
    fn test_parse_defaults() {
        let (params, config) = parse_from_args(&[]);
        assert_eq!(params.main_character, "Kai");
        assert_eq!(params.language, Language::English);
        assert_eq!(config.stories_dir, PathBuf::from("saved_stories"));
    }
}
