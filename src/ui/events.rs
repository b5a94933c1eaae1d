//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use super::app::{App, View};

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle settings overlay
            if app.show_settings {
                return Ok(handle_settings(key, app));
            }

            if app.view == View::Detail {
                return Ok(handle_detail_view(key, app));
            }

            // Handle search input mode
            if app.search_active {
                return Ok(handle_search_input(key, app));
            }

            // Handle normal list navigation and actions
            Ok(handle_list_view(key, app))
        }
        Event::Mouse(mouse) => Ok(handle_mouse(mouse, app)),
        _ => Ok(false),
    }
}

/// Handle events while the help panel is open
fn handle_help_panel(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | '?') => {
            app.show_help = false;
            true
        }
        _ => false,
    }
}

/// Handle events while the settings overlay is open
fn handle_settings(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('u' | 'U') => {
            app.toggle_use_system_theme();
            true
        }
        KeyCode::Char('d' | 'D') => {
            app.toggle_dark_mode();
            true
        }
        KeyCode::Char('l' | 'L') => {
            app.cycle_language();
            true
        }
        KeyCode::Esc | KeyCode::Char('q' | 's') => {
            app.show_settings = false;
            true
        }
        _ => false,
    }
}

/// Handle events on the detail screen
fn handle_detail_view(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q' | 'h') => {
            app.close_detail();
            true
        }
        KeyCode::Char('r') => {
            app.retry_detail();
            true
        }
        KeyCode::Char('s') => {
            app.show_settings = true;
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        _ => false,
    }
}

/// Handle events while the search bar has input focus
fn handle_search_input(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            app.push_query_char(c);
            true
        }
        KeyCode::Backspace => {
            app.pop_query_char();
            true
        }
        KeyCode::Enter | KeyCode::Down => {
            // Keep the query, hand focus back to the list
            app.search_active = false;
            true
        }
        KeyCode::Esc => {
            app.clear_query();
            app.search_active = false;
            true
        }
        _ => false,
    }
}

/// Handle normal navigation and actions on the list screen
fn handle_list_view(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('/') => {
            app.search_active = true;
            true
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            true
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.select_first();
            true
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.select_last();
            true
        }
        KeyCode::Enter | KeyCode::Char('l') => {
            app.open_selected_detail();
            true
        }
        KeyCode::Char('r') => {
            app.start_reset();
            true
        }
        KeyCode::Char('s') => {
            app.show_settings = true;
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        KeyCode::Esc => {
            if !app.browser.query().is_empty() {
                app.clear_query();
                true
            } else {
                false
            }
        }
        _ => false,
    }
}

/// Mouse wheel scrolls the list
fn handle_mouse(mouse: MouseEvent, app: &mut App) -> bool {
    if app.view != View::List || app.show_settings || app.show_help {
        return false;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.select_next();
            true
        }
        MouseEventKind::ScrollUp => {
            app.select_previous();
            true
        }
        _ => false,
    }
}
