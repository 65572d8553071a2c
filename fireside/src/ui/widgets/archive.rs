//! Archive list and detail widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use fireside_core::StoryRecord;

use crate::ui::theme::StoryTheme;

/// List of saved stories
pub struct ArchiveListWidget<'a> {
    records: &'a [StoryRecord],
    selected: usize,
    theme: &'a StoryTheme,
    focused: bool,
}

impl<'a> ArchiveListWidget<'a> {
    pub fn new(records: &'a [StoryRecord], theme: &'a StoryTheme) -> Self {
        Self {
            records,
            selected: 0,
            theme,
            focused: true,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ArchiveListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Saved Stories ({}) ", self.records.len());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            Paragraph::new("No previous stories found.")
                .style(self.theme.system_style())
                .render(inner, buf);
            return;
        }

        // Keep the selection in view
        let visible = inner.height as usize;
        let offset = self.selected.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = self
            .records
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, record)| {
                let selected = i == self.selected;
                let marker = if selected { "▸ " } else { "  " };
                Line::from(vec![
                    Span::styled(marker, self.theme.value_style(selected)),
                    Span::styled(record.archive_label(), self.theme.value_style(selected)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Detail pane for the selected story
pub struct ArchiveDetailWidget<'a> {
    record: Option<&'a StoryRecord>,
    expanded: bool,
    scroll: usize,
    theme: &'a StoryTheme,
    focused: bool,
}

impl<'a> ArchiveDetailWidget<'a> {
    pub fn new(record: Option<&'a StoryRecord>, theme: &'a StoryTheme) -> Self {
        Self {
            record,
            expanded: false,
            scroll: 0,
            theme,
            focused: false,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ArchiveDetailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let record = match self.record {
            Some(record) => record,
            None => {
                let block = Block::default()
                    .title(" Story ")
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style(false));
                let inner = block.inner(area);
                block.render(area, buf);
                Paragraph::new("Nothing to read yet.")
                    .style(self.theme.system_style())
                    .render(inner, buf);
                return;
            }
        };

        let block = Block::default()
            .title(format!(" {} ", record.archive_label()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        if self.expanded {
            for line in record.text.lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    self.theme.story_style(),
                )));
            }
            lines.push(Line::from(""));
        } else {
            lines.push(Line::from(Span::styled(
                "Press Enter to read this story.",
                self.theme.system_style(),
            )));
            lines.push(Line::from(""));
        }

        for (label, value) in [
            ("Setting", record.setting.as_str()),
            ("Conflict", record.conflict.as_str()),
            ("Resolution", record.resolution.as_str()),
            ("Moral", record.moral.as_str()),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), self.theme.label_style()),
                Span::styled(value.to_string(), self.theme.story_style()),
            ]));
        }

        let mut meta = format!("{} | {} min", record.language, record.length_minutes);
        if !record.saved_at.is_empty() {
            meta.push_str(&format!(" | saved {}", record.saved_at));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(meta, self.theme.system_style())));

        let visible_height = inner.height as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
