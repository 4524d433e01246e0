use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Section};

/// Apply one key press. Ctrl-C always quits; otherwise an open overlay only
/// reacts to its own keys.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    let closes = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'));
    if app.show_help {
        if closes || key.code == KeyCode::Char('?') {
            app.show_help = false;
        }
    } else if app.detail.is_some() {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
            KeyCode::Enter => app.close_detail(),
            _ if closes => app.close_detail(),
            _ => {}
        }
    } else {
        handle_normal(app, key.code);
    }
}

fn handle_normal(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char(c @ '1'..='7') => {
            if let Some(section) = Section::from_digit(c) {
                app.select_section(section);
            }
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_section(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_section(),
        KeyCode::Char('g') => app.select_section(Section::Started),
        KeyCode::Char('e') => app.select_section(Section::Events),
        KeyCode::Char('m') => app.select_section(Section::Rubric),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}
