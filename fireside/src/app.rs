//! Main application state and logic

use std::path::PathBuf;

use fireside_core::{StoryParams, StoryRecord, StorySession};

use crate::form::StoryForm;
use crate::ui::theme::StoryTheme;
use crate::ui::Overlay;

/// Vim-style input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - editing the selected form field
    Insert,
}

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// The form and the freshly told story
    #[default]
    Hearth,
    /// Previously saved stories
    Archive,
}

/// Main application state
pub struct App {
    // Story engine
    pub session: StorySession,

    // UI state
    pub theme: StoryTheme,
    pub tab: Tab,
    overlay: Option<Overlay>,

    // Form and input state
    pub form: StoryForm,
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,

    // Story display
    story: Option<StoryRecord>,
    pub story_scroll: usize,
    pub audio_path: Option<PathBuf>,
    pub image_urls: Vec<String>,

    // Archive display
    archive_records: Vec<StoryRecord>,
    pub archive_selected: usize,
    pub archive_expanded: bool,
    pub archive_scroll: usize,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    // Work the main loop picks up between draws
    pub pending_generate: Option<StoryParams>,
    pub pending_archive_refresh: bool,
    pub generating: bool,
}

impl App {
    /// Create the application with a fresh form and an archive refresh queued.
    pub fn new(session: StorySession) -> Self {
        let mut app = Self {
            session,
            theme: StoryTheme::default(),
            tab: Tab::default(),
            overlay: None,
            form: StoryForm::new(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            story: None,
            story_scroll: 0,
            audio_path: None,
            image_urls: Vec::new(),
            archive_records: Vec::new(),
            archive_selected: 0,
            archive_expanded: false,
            archive_scroll: 0,
            status_message: None,
            should_quit: false,
            pending_generate: None,
            pending_archive_refresh: true,
            generating: false,
        };

        app.set_status("Press 'i' to edit a field, 'g' for a story, '?' for help");
        app
    }

    /// Start editing the selected form field, or flip it if it is a toggle.
    pub fn begin_edit(&mut self) {
        let field = self.form.selected;
        if field.is_text() {
            self.input_buffer = self.form.value(field);
            self.cursor_position = self.input_buffer.chars().count();
            self.input_mode = InputMode::Insert;
        } else {
            self.form.toggle(field);
        }
    }

    /// Store the edited text and return to normal mode.
    pub fn commit_edit(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        self.form.set_text(self.form.selected, text);
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Discard the edit and return to normal mode.
    pub fn cancel_edit(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Handle a typed character (unicode-safe)
    pub fn type_char(&mut self, c: char) {
        // Convert cursor position (character index) to byte index
        let byte_pos = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Handle backspace (unicode-safe)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Handle delete (unicode-safe)
    pub fn delete(&mut self) {
        let char_count = self.input_buffer.chars().count();
        if self.cursor_position < char_count {
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end (unicode-safe)
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Show a freshly generated story and reset per-story media state.
    pub fn show_story(&mut self, record: StoryRecord) {
        self.story = Some(record);
        self.story_scroll = 0;
        self.audio_path = None;
        self.image_urls.clear();
    }

    /// Estimate max scroll from the story text
    /// Uses conservative estimate assuming ~60 char effective width
    fn estimate_max_scroll(&self) -> usize {
        const ESTIMATED_WIDTH: usize = 60;
        const ESTIMATED_VISIBLE_HEIGHT: usize = 20;

        let estimated_lines: usize = self
            .story
            .iter()
            .flat_map(|record| record.text.lines())
            .map(|line| (line.len() / ESTIMATED_WIDTH).max(1))
            .sum();

        estimated_lines.saturating_sub(ESTIMATED_VISIBLE_HEIGHT)
    }

    /// Scroll the story up
    pub fn scroll_story_up(&mut self, lines: usize) {
        // If scroll is at a huge "bottom" value, reset to estimated max first
        let max_scroll = self.estimate_max_scroll();
        if self.story_scroll > max_scroll {
            self.story_scroll = max_scroll;
        }
        self.story_scroll = self.story_scroll.saturating_sub(lines);
    }

    /// Scroll the story down
    pub fn scroll_story_down(&mut self, lines: usize) {
        self.story_scroll = self.story_scroll.saturating_add(lines);
        // Cap to reasonable max to prevent overflow issues
        let max_scroll = self.estimate_max_scroll();
        self.story_scroll = self.story_scroll.min(max_scroll + 100);
    }

    /// Jump to the end of the story
    pub fn scroll_story_to_bottom(&mut self) {
        // Set to max value - the widget will cap it to actual max_scroll
        self.story_scroll = usize::MAX / 2;
    }

    /// Jump back to the top of the story
    pub fn scroll_story_to_top(&mut self) {
        self.story_scroll = 0;
    }

    /// Replace the archive list, clamping the selection.
    pub fn set_archive(&mut self, records: Vec<StoryRecord>) {
        self.archive_records = records;
        if self.archive_selected >= self.archive_records.len() {
            self.archive_selected = self.archive_records.len().saturating_sub(1);
        }
        self.archive_scroll = 0;
    }

    /// Move the archive selection down
    pub fn archive_next(&mut self) {
        if !self.archive_records.is_empty() {
            self.archive_selected = (self.archive_selected + 1).min(self.archive_records.len() - 1);
            self.archive_scroll = 0;
        }
    }

    /// Move the archive selection up
    pub fn archive_prev(&mut self) {
        self.archive_selected = self.archive_selected.saturating_sub(1);
        self.archive_scroll = 0;
    }

    /// Jump to the oldest archived story
    pub fn archive_first(&mut self) {
        self.archive_selected = 0;
        self.archive_scroll = 0;
    }

    /// Jump to the newest archived story
    pub fn archive_last(&mut self) {
        self.archive_selected = self.archive_records.len().saturating_sub(1);
        self.archive_scroll = 0;
    }

    /// Open or close the full story text for the selected record.
    pub fn toggle_archive_expanded(&mut self) {
        if !self.archive_records.is_empty() {
            self.archive_expanded = !self.archive_expanded;
            self.archive_scroll = 0;
        }
    }

    /// Scroll the archive detail pane up
    pub fn scroll_archive_up(&mut self, lines: usize) {
        self.archive_scroll = self.archive_scroll.saturating_sub(lines);
    }

    /// Scroll the archive detail pane down
    pub fn scroll_archive_down(&mut self, lines: usize) {
        let cap = self
            .selected_record()
            .map(|record| record.text.lines().count() + 8)
            .unwrap_or(0);
        self.archive_scroll = self.archive_scroll.saturating_add(lines).min(cap);
    }

    /// The record currently selected in the archive, if any.
    pub fn selected_record(&self) -> Option<&StoryRecord> {
        self.archive_records.get(self.archive_selected)
    }

    /// Switch to a tab. Entering the archive reloads it from disk.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            if tab == Tab::Archive {
                self.pending_archive_refresh = true;
            }
        }
    }

    /// Cycle to the other tab
    pub fn next_tab(&mut self) {
        match self.tab {
            Tab::Hearth => self.switch_tab(Tab::Archive),
            Tab::Archive => self.switch_tab(Tab::Hearth),
        }
    }

    /// Queue a generation from the current form, unless one is running.
    pub fn request_generate(&mut self) {
        if self.generating {
            self.set_status("Still working on the previous story...");
            return;
        }
        self.pending_generate = Some(self.form.to_params());
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Close any open overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // =========================================================================
    // Getters for private fields
    // =========================================================================

    /// Get the current overlay
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Check if an overlay is currently open
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Get the current input buffer
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Get the current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// The story currently shown on the Hearth tab
    pub fn story(&self) -> Option<&StoryRecord> {
        self.story.as_ref()
    }

    /// All records currently loaded from the archive
    pub fn archive_records(&self) -> &[StoryRecord] {
        &self.archive_records
    }
}
