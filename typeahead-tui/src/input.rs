//! Keyboard handling for the search input.
//!
//! The input has no text buffer of its own: every key is applied to the
//! controller's current query and the result written back as the new query.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the query with this text.
    Edit(String),
    Quit,
    Ignore,
}

/// Map a key press to an action, given the current query.
pub fn handle_key(key: KeyEvent, query: &str) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('u') if ctrl => Action::Edit(String::new()),
        KeyCode::Char('w') if ctrl => Action::Edit(delete_word(query).to_string()),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => Action::Ignore,
        KeyCode::Char(c) => {
            let mut text = query.to_string();
            text.push(c);
            Action::Edit(text)
        }
        KeyCode::Backspace => {
            let mut text = query.to_string();
            match text.pop() {
                Some(_) => Action::Edit(text),
                None => Action::Ignore,
            }
        }
        _ => Action::Ignore,
    }
}

/// Drop the last word and any whitespace after it.
fn delete_word(query: &str) -> &str {
    let trimmed = query.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => &trimmed[..=i],
        None => "",
    }
}
