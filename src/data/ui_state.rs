//! UI State - Focus, selection, and interaction state
//!
//! This module contains UI state that is independent of rendering.
//! The frontend reads from these structures; the core mutates them.

/// The two mutually-exclusive card sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Mood,
    Role,
}

/// Cross-fade phase of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// No fade class applied
    None,
    /// Fading in (becoming visible)
    In,
    /// Fading out (becoming hidden)
    Out,
}

/// Visual state of one panel
///
/// Mirrors the class-list state of the original sections: `fade` is the
/// animation phase, `hidden` is full opacity-0, `interactive` is whether the
/// panel accepts input. Outside a transition exactly one panel is visible
/// and interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisual {
    pub fade: Fade,
    pub hidden: bool,
    pub interactive: bool,
}

impl PanelVisual {
    /// The active panel: shown, interactive, settled
    pub fn active() -> Self {
        Self {
            fade: Fade::In,
            hidden: false,
            interactive: true,
        }
    }

    /// The inactive panel: fully hidden, input disabled
    pub fn inactive() -> Self {
        Self {
            fade: Fade::None,
            hidden: true,
            interactive: false,
        }
    }

    /// Whether any part of the panel should be drawn
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// Height constraint on the main card
///
/// `Locked` pins the card to an explicit row count during a section swap so
/// the layout does not jump; `Auto` sizes to the active panel's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHeight {
    Auto,
    Locked(u16),
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal panel interaction
    Normal,
    /// Role confirmation dialog is open; it swallows all other input
    ConfirmRole,
}

/// A pending role confirmation awaiting acknowledgment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleConfirmation {
    pub role_id: String,
    pub persona: String,
}

/// Application UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Visual state of the mood section
    pub mood_panel: PanelVisual,

    /// Visual state of the role section
    pub role_panel: PanelVisual,

    /// Currently selected mood id (at most one)
    pub selected_mood: Option<String>,

    /// Keyboard highlight index on the mood panel
    pub highlighted_mood: usize,

    /// Keyboard highlight index on the role panel
    pub highlighted_role: usize,

    /// Height constraint on the main card
    pub card_height: CardHeight,

    /// Natural content rows of the mood panel, recorded by the renderer
    pub mood_natural_rows: u16,

    /// Natural content rows of the role panel, recorded by the renderer
    pub role_natural_rows: u16,

    /// Current input mode
    pub input_mode: InputMode,

    /// Pending role confirmation (when in ConfirmRole mode)
    pub pending_role: Option<RoleConfirmation>,

    /// Status bar text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            mood_panel: PanelVisual::active(),
            role_panel: PanelVisual::inactive(),
            selected_mood: None,
            highlighted_mood: 0,
            highlighted_role: 0,
            card_height: CardHeight::Auto,
            mood_natural_rows: 0,
            role_natural_rows: 0,
            input_mode: InputMode::Normal,
            pending_role: None,
            status_text: String::from("How are you feeling?"),
        }
    }

    /// Get a panel's visual state
    pub fn panel(&self, panel: Panel) -> &PanelVisual {
        match panel {
            Panel::Mood => &self.mood_panel,
            Panel::Role => &self.role_panel,
        }
    }

    /// Get a panel's visual state mutably
    pub fn panel_mut(&mut self, panel: Panel) -> &mut PanelVisual {
        match panel {
            Panel::Mood => &mut self.mood_panel,
            Panel::Role => &mut self.role_panel,
        }
    }

    /// Natural content rows of a panel, as last measured by the renderer
    pub fn natural_rows(&self, panel: Panel) -> u16 {
        match panel {
            Panel::Mood => self.mood_natural_rows,
            Panel::Role => self.role_natural_rows,
        }
    }

    /// Mark a mood as selected, clearing any previous selection first
    pub fn select_mood(&mut self, id: &str) {
        self.selected_mood = None;
        self.selected_mood = Some(id.to_string());
    }

    /// Move the keyboard highlight on the mood panel
    pub fn highlight_mood(&mut self, delta: isize, count: usize) {
        self.highlighted_mood = wrap_index(self.highlighted_mood, delta, count);
    }

    /// Move the keyboard highlight on the role panel
    pub fn highlight_role(&mut self, delta: isize, count: usize) {
        self.highlighted_role = wrap_index(self.highlighted_role, delta, count);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap an index forward or backward through a list of `count` items
fn wrap_index(current: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as isize;
    let next = (current as isize + delta).rem_euclid(count);
    next as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let ui = UiState::new();
        assert!(ui.mood_panel.is_visible());
        assert!(ui.mood_panel.interactive);
        assert!(!ui.role_panel.is_visible());
        assert!(!ui.role_panel.interactive);
        assert_eq!(ui.selected_mood, None);
        assert_eq!(ui.card_height, CardHeight::Auto);
        assert_eq!(ui.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_mood_selection_is_exclusive() {
        let mut ui = UiState::new();
        ui.select_mood("happy");
        assert_eq!(ui.selected_mood.as_deref(), Some("happy"));

        ui.select_mood("sad");
        assert_eq!(ui.selected_mood.as_deref(), Some("sad"));
    }

    #[test]
    fn test_highlight_wraps() {
        let mut ui = UiState::new();
        ui.highlight_mood(-1, 5);
        assert_eq!(ui.highlighted_mood, 4);
        ui.highlight_mood(1, 5);
        assert_eq!(ui.highlighted_mood, 0);

        // Empty list pins the highlight at zero
        ui.highlight_role(1, 0);
        assert_eq!(ui.highlighted_role, 0);
    }
}
