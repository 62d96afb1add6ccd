//! Input routing for the interaction panels
//!
//! Translates key events into semantic `AppAction`s based on the current
//! `InputMode`. While the role confirmation dialog is open it swallows
//! everything except the acknowledgment, which is what makes the dialog
//! blocking.

use crate::data::ui_state::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All actions a key press can resolve to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Move the keyboard highlight forward on the active panel
    HighlightNext,
    /// Move the keyboard highlight backward on the active panel
    HighlightPrev,
    /// Pick the highlighted item on the active panel
    PickHighlighted,
    /// Pick the n-th item on the active panel (digit shortcut, zero-based)
    PickIndex(usize),
    /// Return from the role panel to the mood panel
    Back,
    /// Flip the light/dark theme
    ToggleTheme,
    /// Dismiss the role confirmation dialog
    Acknowledge,
    /// Exit the application
    Quit,
    /// Key not bound in this context
    None,
}

/// Route a key event to an AppAction based on the current input mode
pub fn route_key(key: KeyEvent, mode: InputMode) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppAction::Quit;
    }

    match mode {
        InputMode::ConfirmRole => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => AppAction::Acknowledge,
            _ => AppAction::None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('t') => AppAction::ToggleTheme,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => AppAction::Back,
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab => AppAction::HighlightPrev,
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => AppAction::HighlightNext,
            KeyCode::Enter | KeyCode::Char(' ') => AppAction::PickHighlighted,
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                AppAction::PickIndex(c as usize - '1' as usize)
            }
            _ => AppAction::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        assert_eq!(route_key(key(KeyCode::Char('t')), InputMode::Normal), AppAction::ToggleTheme);
        assert_eq!(route_key(key(KeyCode::Enter), InputMode::Normal), AppAction::PickHighlighted);
        assert_eq!(route_key(key(KeyCode::Esc), InputMode::Normal), AppAction::Back);
        assert_eq!(route_key(key(KeyCode::Down), InputMode::Normal), AppAction::HighlightNext);
        assert_eq!(route_key(key(KeyCode::Char('2')), InputMode::Normal), AppAction::PickIndex(1));
        assert_eq!(route_key(key(KeyCode::Char('q')), InputMode::Normal), AppAction::Quit);
    }

    #[test]
    fn test_confirm_mode_swallows_everything_else() {
        assert_eq!(
            route_key(key(KeyCode::Enter), InputMode::ConfirmRole),
            AppAction::Acknowledge
        );
        assert_eq!(
            route_key(key(KeyCode::Esc), InputMode::ConfirmRole),
            AppAction::Acknowledge
        );
        // Navigation, theme, and quit keys are all inert behind the dialog
        assert_eq!(route_key(key(KeyCode::Char('t')), InputMode::ConfirmRole), AppAction::None);
        assert_eq!(route_key(key(KeyCode::Char('q')), InputMode::ConfirmRole), AppAction::None);
        assert_eq!(route_key(key(KeyCode::Down), InputMode::ConfirmRole), AppAction::None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(route_key(ctrl_c, InputMode::Normal), AppAction::Quit);
        assert_eq!(route_key(ctrl_c, InputMode::ConfirmRole), AppAction::Quit);
    }
}
