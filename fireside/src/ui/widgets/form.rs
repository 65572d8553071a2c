//! Story ingredient form widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::form::{FormField, StoryForm};
use crate::ui::theme::StoryTheme;

/// The story ingredient form
pub struct FormWidget<'a> {
    form: &'a StoryForm,
    theme: &'a StoryTheme,
    editing: Option<(&'a str, usize)>,
    focused: bool,
}

impl<'a> FormWidget<'a> {
    pub fn new(form: &'a StoryForm, theme: &'a StoryTheme) -> Self {
        Self {
            form,
            theme,
            editing: None,
            focused: true,
        }
    }

    /// Show an in-progress edit of the selected field.
    pub fn editing(mut self, buffer: &'a str, cursor: usize) -> Self {
        self.editing = Some((buffer, cursor));
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Value spans for the field being edited, with a visible cursor.
    fn edit_spans(&self, buffer: &str, cursor: usize) -> Vec<Span<'static>> {
        // Use character-based slicing for unicode safety
        let before_cursor: String = buffer.chars().take(cursor).collect();
        let at_cursor = buffer
            .chars()
            .nth(cursor)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let char_count = buffer.chars().count();
        let after_cursor = if cursor < char_count {
            buffer.chars().skip(cursor + 1).collect::<String>()
        } else {
            String::new()
        };

        vec![
            Span::raw(before_cursor),
            Span::styled(
                at_cursor,
                Style::default()
                    .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
                    .fg(self.theme.selection),
            ),
            Span::raw(after_cursor),
        ]
    }
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Tonight's Story ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        // Marker and label take 16 columns, the value gets the rest
        let value_width = (inner.width as usize).saturating_sub(16);

        let mut lines: Vec<Line> = Vec::new();

        for field in FormField::ALL {
            let selected = field == self.form.selected;
            let marker = if selected { "▸ " } else { "  " };

            let mut spans = vec![
                Span::styled(marker, self.theme.value_style(selected)),
                Span::styled(format!("{:<14}", field.label()), self.theme.label_style()),
            ];

            match self.editing {
                Some((buffer, cursor)) if selected => {
                    spans.extend(self.edit_spans(buffer, cursor));
                }
                _ => {
                    spans.push(Span::styled(
                        truncated(&self.form.value(field), value_width),
                        self.theme.value_style(selected),
                    ));
                }
            }

            lines.push(Line::from(spans));
        }

        let rows = lines.len() as u16;
        Paragraph::new(lines).render(inner, buf);

        // Guidance for the selected field, below the rows
        if inner.height > rows + 1 {
            let hint_area = Rect {
                x: inner.x,
                y: inner.y + rows + 1,
                width: inner.width,
                height: inner.height - rows - 1,
            };
            Paragraph::new(self.form.selected.hint())
                .style(self.theme.hint_style())
                .wrap(Wrap { trim: false })
                .render(hint_area, buf);
        }
    }
}

/// Clip a value to the available width, marking the cut with an ellipsis.
fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}
