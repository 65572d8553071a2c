//! Status bar and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::{InputMode, Tab};
use crate::ui::theme::StoryTheme;

/// Status line showing the input mode and the latest message
pub struct StatusBarWidget<'a> {
    tab: Tab,
    input_mode: InputMode,
    generating: bool,
    theme: &'a StoryTheme,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(tab: Tab, input_mode: InputMode, theme: &'a StoryTheme) -> Self {
        Self {
            tab,
            input_mode,
            generating: false,
            theme,
            message: None,
        }
    }

    pub fn generating(mut self, generating: bool) -> Self {
        self.generating = generating;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Input mode indicator (vim-style)
        let (input_mode_text, input_mode_style) = match self.input_mode {
            InputMode::Normal => (
                "NORMAL",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            InputMode::Insert => (
                "INSERT",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let tab_text = match self.tab {
            Tab::Hearth => "HEARTH",
            Tab::Archive => "ARCHIVE",
        };

        let mut spans = vec![
            Span::styled(format!("-- {} --", input_mode_text), input_mode_style),
            Span::raw(" | "),
            Span::styled(tab_text, Style::default().fg(self.theme.system_text)),
        ];

        if self.generating {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "working",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        // Add message if present
        if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}

/// Hotkey bar widget
pub struct HotkeyBarWidget<'a> {
    tab: Tab,
    input_mode: InputMode,
    theme: &'a StoryTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(tab: Tab, input_mode: InputMode, theme: &'a StoryTheme) -> Self {
        Self {
            tab,
            input_mode,
            theme,
        }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hotkeys = match self.input_mode {
            InputMode::Insert => vec![
                ("Esc:cancel", true),
                ("Enter:apply", true),
                ("←→:move", false),
            ],
            InputMode::Normal => match self.tab {
                Tab::Hearth => vec![
                    ("i:edit", true),
                    ("Space:toggle", true),
                    ("h/l:adjust", true),
                    ("g:generate", true),
                    ("Tab:archive", true),
                    ("?:help", false),
                ],
                Tab::Archive => vec![
                    ("j/k:select", true),
                    ("Enter:read", true),
                    ("r:reload", true),
                    ("Tab:hearth", true),
                    ("?:help", false),
                ],
            },
        };

        let spans: Vec<Span> = hotkeys
            .iter()
            .flat_map(|(text, primary)| {
                let style = if *primary {
                    Style::default()
                } else {
                    self.theme.hint_style()
                };
                vec![Span::styled(*text, style), Span::raw("  ")]
            })
            .collect();

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}
