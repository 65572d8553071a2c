//! The story ingredient form shown on the Hearth tab.

use fireside_core::story::{MAX_STORY_MINUTES, MIN_STORY_MINUTES};
use fireside_core::StoryParams;

/// A field in the story form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    MainCharacter,
    Setting,
    Conflict,
    Resolution,
    Moral,
    Language,
    Length,
    Audio,
    Illustration,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 9] = [
        FormField::MainCharacter,
        FormField::Setting,
        FormField::Conflict,
        FormField::Resolution,
        FormField::Moral,
        FormField::Language,
        FormField::Length,
        FormField::Audio,
        FormField::Illustration,
    ];

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::MainCharacter => "Main character",
            FormField::Setting => "Setting",
            FormField::Conflict => "Conflict",
            FormField::Resolution => "Resolution",
            FormField::Moral => "Moral",
            FormField::Language => "Language",
            FormField::Length => "Length",
            FormField::Audio => "Audio",
            FormField::Illustration => "Illustration",
        }
    }

    /// One-line guidance shown while the field is selected.
    pub fn hint(&self) -> &'static str {
        match self {
            FormField::MainCharacter => "Enter the main character's name",
            FormField::Setting => "Where is the story set?",
            FormField::Conflict => "What is the main challenge faced by the character?",
            FormField::Resolution => "What is the outcome or resolution of the challenge?",
            FormField::Moral => "What is the lesson or moral of the story?",
            FormField::Language => "h/l to change the story language",
            FormField::Length => "h/l to adjust, 1-10 minutes of listening time",
            FormField::Audio => "Space to toggle narration of the finished story",
            FormField::Illustration => "Space to toggle an illustration for the finished story",
        }
    }

    /// Whether this field holds free text, editable in insert mode.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FormField::MainCharacter
                | FormField::Setting
                | FormField::Conflict
                | FormField::Resolution
                | FormField::Moral
        )
    }

    /// The field below this one, wrapping at the bottom.
    pub fn next(&self) -> FormField {
        let index = Self::ALL.iter().position(|field| field == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The field above this one, wrapping at the top.
    pub fn prev(&self) -> FormField {
        let index = Self::ALL.iter().position(|field| field == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Current contents of the story form plus the selected field.
#[derive(Debug, Clone)]
pub struct StoryForm {
    pub params: StoryParams,
    pub selected: FormField,
}

impl Default for StoryForm {
    fn default() -> Self {
        Self {
            params: StoryParams::default(),
            selected: FormField::MainCharacter,
        }
    }
}

impl StoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed value for a field. Text fields return their raw text so an
    /// edit can start from the current value.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::MainCharacter => self.params.main_character.clone(),
            FormField::Setting => self.params.setting.clone(),
            FormField::Conflict => self.params.conflict.clone(),
            FormField::Resolution => self.params.resolution.clone(),
            FormField::Moral => self.params.moral.clone(),
            FormField::Language => self.params.language.to_string(),
            FormField::Length => format!("{} min", self.params.length_minutes),
            FormField::Audio => yes_no(self.params.include_audio),
            FormField::Illustration => yes_no(self.params.include_illustrations),
        }
    }

    /// Store edited text into a text field. Non-text fields ignore this.
    pub fn set_text(&mut self, field: FormField, text: String) {
        match field {
            FormField::MainCharacter => self.params.main_character = text,
            FormField::Setting => self.params.setting = text,
            FormField::Conflict => self.params.conflict = text,
            FormField::Resolution => self.params.resolution = text,
            FormField::Moral => self.params.moral = text,
            _ => {}
        }
    }

    /// Flip a toggle field. The language field cycles forward.
    pub fn toggle(&mut self, field: FormField) {
        match field {
            FormField::Audio => self.params.include_audio = !self.params.include_audio,
            FormField::Illustration => {
                self.params.include_illustrations = !self.params.include_illustrations
            }
            FormField::Language => self.params.language = self.params.language.next(),
            _ => {}
        }
    }

    /// Step an adjustable field left or right.
    pub fn adjust(&mut self, field: FormField, delta: i32) {
        match field {
            FormField::Length => {
                let minutes = if delta < 0 {
                    self.params.length_minutes.saturating_sub(delta.unsigned_abs())
                } else {
                    self.params.length_minutes.saturating_add(delta as u32)
                };
                self.params.length_minutes = minutes.clamp(MIN_STORY_MINUTES, MAX_STORY_MINUTES);
            }
            FormField::Language => {
                self.params.language = if delta < 0 {
                    self.params.language.prev()
                } else {
                    self.params.language.next()
                };
            }
            FormField::Audio | FormField::Illustration => self.toggle(field),
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Snapshot the form as generation parameters.
    pub fn to_params(&self) -> StoryParams {
        self.params.clone()
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fireside_core::Language;

    #[test]
    fn test_field_order_cycles() {
        let mut field = FormField::MainCharacter;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::MainCharacter);
        assert_eq!(FormField::MainCharacter.prev(), FormField::Illustration);
    }

    #[test]
    fn test_defaults_match_params() {
        let form = StoryForm::new();
        assert_eq!(form.value(FormField::MainCharacter), "Kai");
        assert_eq!(form.value(FormField::Length), "5 min");
        assert_eq!(form.value(FormField::Audio), "No");
        assert_eq!(form.value(FormField::Language), "English");
    }

    #[test]
    fn test_adjust_clamps_length() {
        let mut form = StoryForm::new();
        for _ in 0..20 {
            form.adjust(FormField::Length, 1);
        }
        assert_eq!(form.params.length_minutes, MAX_STORY_MINUTES);
        for _ in 0..20 {
            form.adjust(FormField::Length, -1);
        }
        assert_eq!(form.params.length_minutes, MIN_STORY_MINUTES);
    }

    #[test]
    fn test_language_adjust_cycles() {
        let mut form = StoryForm::new();
        form.adjust(FormField::Language, 1);
        assert_eq!(form.params.language, Language::Chinese);
        form.adjust(FormField::Language, -1);
        assert_eq!(form.params.language, Language::English);
    }

    #[test]
    fn test_toggle_only_touches_toggles() {
        let mut form = StoryForm::new();
        form.toggle(FormField::Audio);
        assert!(form.params.include_audio);
        form.toggle(FormField::MainCharacter);
        assert_eq!(form.params.main_character, "Kai");
    }

    #[test]
    fn test_edit_and_snapshot() {
        let mut form = StoryForm::new();
        form.set_text(FormField::Setting, "a night market by the sea".to_string());
        form.toggle(FormField::Illustration);

        let params = form.to_params();
        assert_eq!(params.setting, "a night market by the sea");
        assert!(params.include_illustrations);
    }
}
