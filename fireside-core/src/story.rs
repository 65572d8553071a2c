//! Story parameters, languages, and archived records.

use serde::{Deserialize, Deserializer, Serialize};

/// Minimum story length selectable, in minutes of listening time.
pub const MIN_STORY_MINUTES: u32 = 1;
/// Maximum story length selectable, in minutes of listening time.
pub const MAX_STORY_MINUTES: u32 = 10;
/// Default story length, in minutes of listening time.
pub const DEFAULT_STORY_MINUTES: u32 = 5;

/// A language a story can be told in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "English")]
    English,
    #[serde(rename = "中文")]
    Chinese,
    #[serde(rename = "Melayu")]
    Malay,
}

impl Language {
    /// All selectable languages, in display order.
    pub fn all() -> [Language; 3] {
        [Language::English, Language::Chinese, Language::Malay]
    }

    /// The name shown to the user and written to the archive.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
            Language::Malay => "Melayu",
        }
    }

    /// The instruction that opens every story request in this language.
    pub fn prefix(&self) -> &'static str {
        match self {
            Language::English => "Create a story",
            Language::Chinese => "请用纯中文写一个故事",
            Language::Malay => {
                "Sila tulis cerita dalam bahasa Melayu penuh, tiada perkataan Inggeris"
            }
        }
    }

    /// The code sent to the speech service for narration.
    pub fn speech_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            // Malay narration is requested with the Indonesian voice code.
            Language::Malay => "id",
        }
    }

    /// Parse a language from a display name, an English name, or a code.
    pub fn parse(text: &str) -> Option<Language> {
        match text.trim() {
            "中文" => return Some(Language::Chinese),
            "Melayu" => return Some(Language::Malay),
            _ => {}
        }
        match text.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "chinese" | "zh" => Some(Language::Chinese),
            "malay" | "melayu" | "ms" => Some(Language::Malay),
            _ => None,
        }
    }

    pub fn next(&self) -> Language {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::Malay,
            Language::Malay => Language::English,
        }
    }

    pub fn prev(&self) -> Language {
        match self {
            Language::English => Language::Malay,
            Language::Chinese => Language::English,
            Language::Malay => Language::Chinese,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the user chooses before a story is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryParams {
    pub main_character: String,
    pub setting: String,
    pub conflict: String,
    pub resolution: String,
    pub moral: String,
    /// Story length in minutes of listening time, within
    /// [`MIN_STORY_MINUTES`]..=[`MAX_STORY_MINUTES`].
    pub length_minutes: u32,
    pub language: Language,
    pub include_audio: bool,
    pub include_illustrations: bool,
}

impl Default for StoryParams {
    fn default() -> Self {
        Self {
            main_character: "Kai".to_string(),
            setting: "within a family and community context".to_string(),
            conflict: "The stigma faced by the family and emotional struggles of reintegration"
                .to_string(),
            resolution: "The family rebuilds relationships and focuses on forgiveness".to_string(),
            moral: "The power of second chances, forgiveness, and family unity".to_string(),
            length_minutes: DEFAULT_STORY_MINUTES,
            language: Language::default(),
            include_audio: false,
            include_illustrations: false,
        }
    }
}

impl StoryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target word count for the requested length, at 200 words per minute.
    pub fn target_words(&self) -> u32 {
        200 * self.length_minutes
    }

    pub fn with_main_character(mut self, main_character: impl Into<String>) -> Self {
        self.main_character = main_character.into();
        self
    }

    pub fn with_setting(mut self, setting: impl Into<String>) -> Self {
        self.setting = setting.into();
        self
    }

    pub fn with_conflict(mut self, conflict: impl Into<String>) -> Self {
        self.conflict = conflict.into();
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = resolution.into();
        self
    }

    pub fn with_moral(mut self, moral: impl Into<String>) -> Self {
        self.moral = moral.into();
        self
    }

    /// Set the story length, clamped to the selectable range.
    pub fn with_length_minutes(mut self, length_minutes: u32) -> Self {
        self.length_minutes = length_minutes.clamp(MIN_STORY_MINUTES, MAX_STORY_MINUTES);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_audio(mut self, include_audio: bool) -> Self {
        self.include_audio = include_audio;
        self
    }

    pub fn with_illustrations(mut self, include_illustrations: bool) -> Self {
        self.include_illustrations = include_illustrations;
        self
    }
}

/// One archived story with the parameters that produced it.
///
/// Archive files written by earlier versions of this tool used several
/// field spellings and encoded the flags as "Yes"/"No" strings, so
/// deserialization accepts those forms. Fields this version does not know
/// about are kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRecord {
    /// Name of the story's main character.
    #[serde(default)]
    pub main_character: String,
    /// Where the story takes place.
    #[serde(default)]
    pub setting: String,
    /// The central difficulty the character faces.
    #[serde(default, alias = "challenge")]
    pub conflict: String,
    /// How the story resolves.
    #[serde(default, alias = "outcome")]
    pub resolution: String,
    /// The lesson the story carries.
    #[serde(default, alias = "lesson")]
    pub moral: String,
    /// Requested length in minutes of listening time.
    #[serde(default = "default_length_minutes")]
    pub length_minutes: u32,
    /// Language the story was told in. Unrecognized values fall back to
    /// English rather than failing the whole archive.
    #[serde(default, deserialize_with = "lenient_language")]
    pub language: Language,
    /// The generated story text.
    #[serde(default)]
    pub text: String,
    /// Whether narration was requested when the story was generated.
    #[serde(default, deserialize_with = "flag")]
    pub include_audio: bool,
    /// Whether illustrations were requested when the story was generated.
    #[serde(default, deserialize_with = "flag", alias = "include_images")]
    pub include_illustrations: bool,
    /// Local time the record was saved, as "YYYY-MM-DD HH:MM:SS". Empty for
    /// records from versions that did not stamp one.
    #[serde(default)]
    pub saved_at: String,
    /// Fields from other versions of the archive format, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StoryRecord {
    /// Build a record for freshly generated story text, stamped with the
    /// current local time.
    pub fn new(params: &StoryParams, text: impl Into<String>) -> Self {
        Self {
            main_character: params.main_character.clone(),
            setting: params.setting.clone(),
            conflict: params.conflict.clone(),
            resolution: params.resolution.clone(),
            moral: params.moral.clone(),
            length_minutes: params.length_minutes,
            language: params.language,
            text: text.into(),
            include_audio: params.include_audio,
            include_illustrations: params.include_illustrations,
            saved_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            extra: serde_json::Map::new(),
        }
    }

    /// The label shown for this record in the archive list.
    pub fn archive_label(&self) -> String {
        format!("{} - {}", self.main_character, self.setting)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

fn default_length_minutes() -> u32 {
    DEFAULT_STORY_MINUTES
}

fn lenient_language<'de, D>(deserializer: D) -> Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(Language::parse(&text).unwrap_or_default())
}

/// Accept booleans however past versions wrote them: real booleans or
/// "Yes"/"No" style strings.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Text(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "yes" | "true" | "1"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("中文"), Some(Language::Chinese));
        assert_eq!(Language::parse("Melayu"), Some(Language::Malay));
        assert_eq!(Language::parse("english"), Some(Language::English));
        assert_eq!(Language::parse("zh"), Some(Language::Chinese));
        assert_eq!(Language::parse("Klingon"), None);
    }

    #[test]
    fn test_language_cycle() {
        let mut language = Language::English;
        for _ in 0..3 {
            language = language.next();
        }
        assert_eq!(language, Language::English);
        assert_eq!(Language::English.prev(), Language::Malay);
    }

    #[test]
    fn test_speech_codes() {
        assert_eq!(Language::English.speech_code(), "en");
        assert_eq!(Language::Chinese.speech_code(), "zh");
        assert_eq!(Language::Malay.speech_code(), "id");
    }

    #[test]
    fn test_default_params() {
        let params = StoryParams::default();
        assert_eq!(params.main_character, "Kai");
        assert_eq!(params.length_minutes, 5);
        assert_eq!(params.language, Language::English);
        assert!(!params.include_audio);
        assert_eq!(params.target_words(), 1000);
    }

    #[test]
    fn test_length_clamped() {
        let params = StoryParams::new().with_length_minutes(30);
        assert_eq!(params.length_minutes, MAX_STORY_MINUTES);
        let params = StoryParams::new().with_length_minutes(0);
        assert_eq!(params.length_minutes, MIN_STORY_MINUTES);
    }

    #[test]
    fn test_record_from_params() {
        let params = StoryParams::new()
            .with_main_character("Mei Ling")
            .with_audio(true);
        let record = StoryRecord::new(&params, "Once there was a second chance.");

        assert_eq!(record.main_character, "Mei Ling");
        assert!(record.include_audio);
        assert_eq!(record.word_count(), 6);
        assert!(!record.saved_at.is_empty());
        assert_eq!(record.archive_label(), format!("Mei Ling - {}", params.setting));
    }

    #[test]
    fn test_legacy_record_fields() {
        let json = r#"{
            "main_character": "Kai",
            "setting": "a coastal town",
            "challenge": "being turned away from work",
            "outcome": "an old friend offers an apprenticeship",
            "lesson": "Trust can be rebuilt",
            "length_minutes": 3,
            "text": "Kai came home in the rain.",
            "include_audio": "Yes",
            "language": "Melayu"
        }"#;

        let record: StoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.conflict, "being turned away from work");
        assert_eq!(record.resolution, "an old friend offers an apprenticeship");
        assert_eq!(record.moral, "Trust can be rebuilt");
        assert!(record.include_audio);
        assert!(!record.include_illustrations);
        assert_eq!(record.language, Language::Malay);
        assert_eq!(record.saved_at, "");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let json = r#"{"main_character": "Kai", "language": "Tamil"}"#;
        let record: StoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.language, Language::English);
    }

    #[test]
    fn test_unknown_fields_survive_rewrite() {
        let json = r#"{"main_character": "Kai", "text": "Home.", "mood": "hopeful"}"#;
        let record: StoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra["mood"], "hopeful");

        let rewritten = serde_json::to_string(&record).unwrap();
        let reloaded: StoryRecord = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(reloaded.extra["mood"], "hopeful");
    }
}
