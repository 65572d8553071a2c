//! Prompt assembly for story generation.
//!
//! The premise wording is deliberately stable: given the same parameters,
//! [`build_story_prompt`] always produces the same string.

use crate::story::{Language, StoryParams, StoryRecord};

/// Build the story premise from the user's parameters.
///
/// The sentence spacing here is uneven on purpose. Archived stories were
/// generated against exactly this wording, so it is kept byte for byte.
pub fn story_premise(params: &StoryParams) -> String {
    format!(
        "Write an inspirational real-life story about second chances for an ex-offender. \
         The main character, {main_character}, faces the emotional challenges of reintegrating into family and society. \
         The story is set in {setting}, focusing on the social and emotional struggles faced by both the main character and their family.\
         The key challenge is {conflict}, but avoid graphic details. Focus on emotional and psychological struggles.\
         The resolution is {resolution}, showing the power of rebuilding relationships and finding forgiveness.\
         The moral of the story is '{moral}', highlighting the importance of second chances, forgiveness, and family unity.\
         Ensure the story is appropriate for a secondary school audience, avoiding any traumatic content.\
         Keep the story length to around {words} words.",
        main_character = params.main_character,
        setting = params.setting,
        conflict = params.conflict,
        resolution = params.resolution,
        moral = params.moral,
        words = params.target_words(),
    )
}

/// Wrap a premise in the selected language's opening instruction.
pub fn compose_user_message(language: Language, premise: &str) -> String {
    format!("{} about {}", language.prefix(), premise)
}

/// The complete user message sent to the chat model for these parameters.
pub fn build_story_prompt(params: &StoryParams) -> String {
    compose_user_message(params.language, &story_premise(params))
}

/// A fixed illustration prompt for an archived story.
pub fn illustration_prompt(record: &StoryRecord) -> String {
    format!(
        "A warm storybook illustration for a story about {}, set {}. \
         Soft watercolor style, hopeful mood, no text or lettering.",
        record.main_character, record.setting
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_exact() {
        let expected = "Create a story about \
            Write an inspirational real-life story about second chances for an ex-offender. \
            The main character, Kai, faces the emotional challenges of reintegrating into family and society. \
            The story is set in within a family and community context, focusing on the social and emotional struggles faced by both the main character and their family.\
            The key challenge is The stigma faced by the family and emotional struggles of reintegration, but avoid graphic details. Focus on emotional and psychological struggles.\
            The resolution is The family rebuilds relationships and focuses on forgiveness, showing the power of rebuilding relationships and finding forgiveness.\
            The moral of the story is 'The power of second chances, forgiveness, and family unity', highlighting the importance of second chances, forgiveness, and family unity.\
            Ensure the story is appropriate for a secondary school audience, avoiding any traumatic content.\
            Keep the story length to around 1000 words.";

        assert_eq!(build_story_prompt(&StoryParams::default()), expected);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let params = StoryParams::new()
            .with_main_character("Siti")
            .with_setting("a rented flat above a kopitiam");
        assert_eq!(build_story_prompt(&params), build_story_prompt(&params));
    }

    #[test]
    fn test_language_prefix_wraps_premise() {
        let params = StoryParams::new().with_language(Language::Chinese);
        let prompt = build_story_prompt(&params);
        assert!(prompt.starts_with("请用纯中文写一个故事 about "));

        let params = params.with_language(Language::Malay);
        let prompt = build_story_prompt(&params);
        assert!(prompt.starts_with(
            "Sila tulis cerita dalam bahasa Melayu penuh, tiada perkataan Inggeris about "
        ));
    }

    #[test]
    fn test_word_count_scales_with_length() {
        let params = StoryParams::new().with_length_minutes(3);
        assert!(story_premise(&params).ends_with("around 600 words."));
    }

    #[test]
    fn test_illustration_prompt_uses_record() {
        let params = StoryParams::new().with_main_character("Ravi");
        let record = StoryRecord::new(&params, "Ravi walked home.");
        let prompt = illustration_prompt(&record);
        assert!(prompt.contains("Ravi"));
        assert_eq!(prompt, illustration_prompt(&record));
    }
}
