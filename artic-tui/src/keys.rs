//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    ToggleRow,
    TogglePage,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
}

/// Maps a key press to an action. Releases and repeats of non-movement keys
/// are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char(' ') | KeyCode::Enter => Action::ToggleRow,
        KeyCode::Char('a') => Action::TogglePage,
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
            Action::NextPage
        }
        KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
            Action::PrevPage
        }
        KeyCode::Char('g') | KeyCode::Home => Action::FirstPage,
        KeyCode::Char('G') | KeyCode::End => Action::LastPage,
        _ => return None,
    };

    let repeatable = matches!(action, Action::CursorUp | Action::CursorDown);
    if key.kind == KeyEventKind::Repeat && !repeatable {
        return None;
    }
    Some(action)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for(press(KeyCode::Char('j'))), Some(Action::CursorDown));
        assert_eq!(action_for(press(KeyCode::Up)), Some(Action::CursorUp));
        assert_eq!(action_for(press(KeyCode::Right)), Some(Action::NextPage));
        assert_eq!(action_for(press(KeyCode::Char('h'))), Some(Action::PrevPage));
        assert_eq!(action_for(press(KeyCode::Char('G'))), Some(Action::LastPage));
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(action_for(press(KeyCode::Char(' '))), Some(Action::ToggleRow));
        assert_eq!(action_for(press(KeyCode::Char('a'))), Some(Action::TogglePage));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(press(KeyCode::Char('q'))), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_a), None);
    }

    #[test]
    fn test_release_and_repeat() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('j'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(action_for(release), None);

        let repeat_toggle = KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        assert_eq!(action_for(repeat_toggle), None);

        let repeat_down =
            KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(action_for(repeat_down), Some(Action::CursorDown));
    }
}
