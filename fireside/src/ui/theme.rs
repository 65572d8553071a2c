//! Color theme and styling for the Fireside TUI

use ratatui::style::{Color, Modifier, Style};

/// Fireside color theme
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct StoryTheme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Chrome
    pub title: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Content colors
    pub story_text: Color,
    pub label: Color,
    pub value: Color,
    pub selection: Color,
    pub hint: Color,
    pub system_text: Color,
}

impl Default for StoryTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            title: Color::Yellow,
            tab_active: Color::Yellow,
            tab_inactive: Color::DarkGray,

            story_text: Color::White,
            label: Color::Gray,
            value: Color::White,
            selection: Color::Cyan,
            hint: Color::DarkGray,
            system_text: Color::DarkGray,
        }
    }
}

impl StoryTheme {
    /// Get style for normal text
    #[allow(dead_code)]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for story text
    pub fn story_style(&self) -> Style {
        Style::default().fg(self.story_text)
    }

    /// Get style for form labels
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label)
    }

    /// Get style for form values, highlighted while selected
    pub fn value_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.value)
        }
    }

    /// Get style for hint lines
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint).add_modifier(Modifier::DIM)
    }

    /// Get style for system messages
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Get style for the application title
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Get style for a tab name
    pub fn tab_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.tab_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.tab_inactive)
        }
    }
}
