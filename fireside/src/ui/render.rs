//! Render orchestration for the Fireside TUI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Tab};
use crate::ui::layout::{centered_rect_fixed, AppLayout, ArchiveLayout, HearthLayout};
use crate::ui::widgets::{
    ArchiveDetailWidget, ArchiveListWidget, FormWidget, HotkeyBarWidget, StatusBarWidget,
    StoryWidget,
};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    match app.tab {
        Tab::Hearth => render_hearth(frame, app, layout.body_area),
        Tab::Archive => render_archive(frame, app, layout.body_area),
    }

    render_status_bar(frame, app, layout.status_bar);
    render_hotkey_bar(frame, app, layout.hotkey_bar);

    // Render overlay if present
    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Render the title bar with the tab strip
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Fireside ", app.theme.title_style()),
        Span::raw("| "),
        Span::styled("[1] Hearth", app.theme.tab_style(app.tab == Tab::Hearth)),
        Span::raw("  "),
        Span::styled("[2] Archive", app.theme.tab_style(app.tab == Tab::Archive)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the Hearth tab: the ingredient form and the story pane
fn render_hearth(frame: &mut Frame, app: &App, area: Rect) {
    let layout = HearthLayout::calculate(area);

    let mut form_widget = FormWidget::new(&app.form, &app.theme).focused(true);
    if matches!(app.input_mode, InputMode::Insert) {
        form_widget = form_widget.editing(app.input_buffer(), app.cursor_position());
    }
    frame.render_widget(form_widget, layout.form_area);

    let story_widget = StoryWidget::new(app.story(), &app.theme)
        .scroll(app.story_scroll)
        .generating(app.generating)
        .audio_path(app.audio_path.as_deref())
        .image_urls(&app.image_urls);
    frame.render_widget(story_widget, layout.story_area);
}

/// Render the Archive tab: the record list and the detail pane
fn render_archive(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ArchiveLayout::calculate(area);

    let list_widget = ArchiveListWidget::new(app.archive_records(), &app.theme)
        .selected(app.archive_selected)
        .focused(!app.archive_expanded);
    frame.render_widget(list_widget, layout.list_area);

    let detail_widget = ArchiveDetailWidget::new(app.selected_record(), &app.theme)
        .expanded(app.archive_expanded)
        .scroll(app.archive_scroll)
        .focused(app.archive_expanded);
    frame.render_widget(detail_widget, layout.detail_area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_widget = StatusBarWidget::new(app.tab, app.input_mode, &app.theme)
        .generating(app.generating)
        .message(app.status_message());

    frame.render_widget(status_widget, area);
}

/// Render the hotkey bar
fn render_hotkey_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hotkey_widget = HotkeyBarWidget::new(app.tab, app.input_mode, &app.theme);
    frame.render_widget(hotkey_widget, area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: &Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(52, 24, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Fireside - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Hearth tab:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  j/k or ↑/↓    Choose a field"),
        Line::from("  i or Enter    Edit the field (Esc cancels)"),
        Line::from("  Space         Flip a toggle"),
        Line::from("  h/l or ←/→    Adjust length or language"),
        Line::from("  g             Tell the story"),
        Line::from("  G / Home      Story end / start"),
        Line::from("  PgUp/PgDn     Scroll the story"),
        Line::from(""),
        Line::from(Span::styled(
            "Archive tab:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  j/k or ↑/↓    Choose a story"),
        Line::from("  Enter         Open or close the story text"),
        Line::from("  r             Reload the archive from disk"),
        Line::from(""),
        Line::from(Span::styled(
            "Everywhere:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  Tab, 1, 2     Switch tabs"),
        Line::from("  ?             This help"),
        Line::from("  q or Ctrl+C   Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
