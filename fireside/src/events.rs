//! Event handling for the Fireside TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEventKind};

use crate::app::{App, InputMode, Tab};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running, no special action
    Continue,
    /// Quit the application
    Quit,
    /// State changed, redraw needed
    NeedsRedraw,
    /// The user asked for a story
    StartGeneration,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => {
                match app.tab {
                    Tab::Hearth => app.scroll_story_up(3),
                    Tab::Archive => app.scroll_archive_up(3),
                }
                EventResult::NeedsRedraw
            }
            MouseEventKind::ScrollDown => {
                match app.tab {
                    Tab::Hearth => app.scroll_story_down(3),
                    Tab::Archive => app.scroll_archive_down(3),
                }
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // An open overlay captures keys first
    if app.has_overlay() {
        return handle_overlay_keys(app, key);
    }

    // Ctrl+C quits from any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
    }
}

/// Handle keys while an overlay is open
fn handle_overlay_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            return EventResult::NeedsRedraw;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.next_tab();
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('1') => {
            app.switch_tab(Tab::Hearth);
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('2') => {
            app.switch_tab(Tab::Archive);
            return EventResult::NeedsRedraw;
        }
        _ => {}
    }

    match app.tab {
        Tab::Hearth => handle_hearth_keys(app, key),
        Tab::Archive => handle_archive_keys(app, key),
    }
}

/// Handle normal-mode keys on the Hearth tab
fn handle_hearth_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.form.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.form.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            app.begin_edit();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(' ') => {
            app.form.toggle(app.form.selected);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.form.adjust(app.form.selected, -1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.form.adjust(app.form.selected, 1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => EventResult::StartGeneration,
        KeyCode::Char('G') => {
            app.scroll_story_to_bottom();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_story_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_story_down(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            app.scroll_story_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            app.scroll_story_down(10);
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.scroll_story_to_top();
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            app.clear_status();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle normal-mode keys on the Archive tab
fn handle_archive_keys(app: &mut App, key: KeyEvent) -> EventResult {
    // While a story is open, j/k scroll it instead of moving the selection
    if app.archive_expanded {
        return match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.scroll_archive_down(1);
                EventResult::NeedsRedraw
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.scroll_archive_up(1);
                EventResult::NeedsRedraw
            }
            KeyCode::PageDown => {
                app.scroll_archive_down(10);
                EventResult::NeedsRedraw
            }
            KeyCode::PageUp => {
                app.scroll_archive_up(10);
                EventResult::NeedsRedraw
            }
            KeyCode::Enter | KeyCode::Esc => {
                app.toggle_archive_expanded();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        };
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.archive_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.archive_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.archive_first();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            app.archive_last();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.toggle_archive_expanded();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('r') => {
            app.pending_archive_refresh = true;
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            app.clear_status();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys in insert mode (editing a form field)
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.cancel_edit();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.commit_edit();
            EventResult::NeedsRedraw
        }
        KeyCode::Left => {
            app.cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.cursor_home();
            EventResult::NeedsRedraw
        }
        KeyCode::End => {
            app.cursor_end();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Delete => {
            app.delete();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
