//! Story display widget

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget, Wrap,
    },
};

use fireside_core::StoryRecord;

use crate::ui::theme::StoryTheme;

/// Widget for the freshly told story
pub struct StoryWidget<'a> {
    record: Option<&'a StoryRecord>,
    scroll: usize,
    theme: &'a StoryTheme,
    generating: bool,
    audio_path: Option<&'a Path>,
    image_urls: &'a [String],
}

impl<'a> StoryWidget<'a> {
    pub fn new(record: Option<&'a StoryRecord>, theme: &'a StoryTheme) -> Self {
        Self {
            record,
            scroll: 0,
            theme,
            generating: false,
            audio_path: None,
            image_urls: &[],
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn generating(mut self, generating: bool) -> Self {
        self.generating = generating;
        self
    }

    pub fn audio_path(mut self, path: Option<&'a Path>) -> Self {
        self.audio_path = path;
        self
    }

    pub fn image_urls(mut self, urls: &'a [String]) -> Self {
        self.image_urls = urls;
        self
    }
}

impl Widget for StoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.record {
            Some(record) => format!(" {} ", record.archive_label()),
            None => " Story ".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        match self.record {
            Some(record) => {
                for line in record.text.lines() {
                    lines.push(Line::from(Span::styled(
                        line.to_string(),
                        self.theme.story_style(),
                    )));
                }

                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} words | {} | {} min",
                        record.word_count(),
                        record.language,
                        record.length_minutes
                    ),
                    self.theme.system_style(),
                )));

                if let Some(path) = self.audio_path {
                    lines.push(Line::from(Span::styled(
                        format!("Audio: {}", path.display()),
                        self.theme.system_style(),
                    )));
                }

                for url in self.image_urls {
                    lines.push(Line::from(Span::styled(
                        format!("Illustration: {url}"),
                        self.theme.system_style(),
                    )));
                }
            }
            None if self.generating => {
                lines.push(Line::from(Span::styled(
                    "The fire crackles while your story takes shape...",
                    self.theme.system_style(),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "No story yet.",
                    self.theme.system_style(),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Fill in the ingredients and press 'g' when the fire is ready.",
                    self.theme.system_style(),
                )));
            }
        }

        // Calculate scroll position
        let visible_height = inner.height as usize;
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false });

        paragraph.render(inner, buf);

        // Scrollbar and position hints when the story overflows
        if total_lines > visible_height {
            let scrollbar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .thumb_style(Style::default().fg(Color::DarkGray))
                .track_style(Style::default().fg(Color::Black))
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);

            let hint_style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);

            // Lines hidden above
            if scroll > 0 {
                let hint = format!(" ↑{scroll} ");
                for (i, ch) in hint.chars().enumerate() {
                    let x = inner.x + (i as u16);
                    if x < inner.x + inner.width.saturating_sub(2) {
                        buf[(x, inner.y)].set_char(ch).set_style(hint_style);
                    }
                }
            }

            // Lines still to come below
            if scroll < max_scroll {
                let remaining = max_scroll - scroll;
                let hint = format!(" ↓{remaining} more ");
                let hint_y = inner.y + inner.height.saturating_sub(1);
                for (i, ch) in hint.chars().enumerate() {
                    let x = inner.x + (i as u16);
                    if x < inner.x + inner.width.saturating_sub(2) {
                        buf[(x, hint_y)].set_char(ch).set_style(hint_style);
                    }
                }
            }
        }
    }
}
