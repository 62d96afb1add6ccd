//! Frontend-agnostic application core.
//!
//! AppCore owns the configuration, the interaction state, and the section
//! transition controller. Every user gesture lands here as a reducer method;
//! frontends only read state and translate native events into these calls.
//! Time comes in from the caller as logical milliseconds so the whole core
//! runs deterministically under test.

use crate::config::Config;
use crate::core::transition::{SectionState, TransitionController};
use crate::data::persona::persona_name;
use crate::data::{InputMode, Panel, RoleConfirmation, UiState};
use crate::theme::{AppTheme, ThemeMode};
use anyhow::Result;

/// Collaborator notified when the user confirms a chat persona.
///
/// Stands in for the navigation step that follows role selection. The
/// shipped implementation logs the hand-off; a chat screen plugs in behind
/// the same seam.
pub trait ChatNavigator {
    fn on_role_confirmed(&mut self, role_id: &str, persona: &str);
}

/// Default navigator: records the hand-off in the log
pub struct LoggingNavigator;

impl ChatNavigator for LoggingNavigator {
    fn on_role_confirmed(&mut self, role_id: &str, persona: &str) {
        tracing::info!("role confirmed: {} ({}), handing off to chat", persona, role_id);
    }
}

/// Core application state (frontend-agnostic)
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Interaction state read by the renderer
    pub ui_state: UiState,

    /// Section-swap state machine
    pub transitions: TransitionController,

    /// Active theme flag
    pub theme_mode: ThemeMode,

    /// Application running flag
    pub running: bool,

    /// Set when state changed and the frontend should redraw
    pub needs_render: bool,

    navigator: Box<dyn ChatNavigator>,
}

impl AppCore {
    /// Create the core from validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let theme_mode = config.initial_theme_mode()?;
        let transitions = TransitionController::new(config.transition.fade_ms);

        Ok(Self {
            config,
            ui_state: UiState::new(),
            transitions,
            theme_mode,
            running: true,
            needs_render: true,
            navigator: Box::new(LoggingNavigator),
        })
    }

    /// Replace the navigation collaborator
    pub fn set_navigator(&mut self, navigator: Box<dyn ChatNavigator>) {
        self.navigator = navigator;
    }

    /// The palette for the active theme mode
    pub fn theme(&self) -> &AppTheme {
        self.config.theme(self.theme_mode)
    }

    /// Current section state
    pub fn section_state(&self) -> SectionState {
        self.transitions.state()
    }

    /// Select a mood and start the swap to the role panel.
    ///
    /// Only honored while the mood panel is settled and the id names a
    /// configured mood; anything else is dropped silently, including
    /// triggers that arrive mid-transition.
    pub fn select_mood(&mut self, now_ms: u64, id: &str) {
        if self.transitions.active_panel() != Some(Panel::Mood) {
            return;
        }
        if self.ui_state.input_mode != InputMode::Normal {
            return;
        }
        let Some(mood) = self.config.mood(id) else {
            return;
        };
        let (glyph, label) = (mood.glyph.clone(), mood.label.clone());

        self.ui_state.select_mood(id);
        tracing::info!("mood selected: {}", id);

        let stamp = chrono::Local::now().format("%H:%M");
        self.ui_state.status_text =
            format!("{} {} · {} — pick a chat persona", glyph, label, stamp);

        self.transitions
            .switch_section(now_ms, Panel::Role, Panel::Mood, &mut self.ui_state);
        self.needs_render = true;
    }

    /// Pick a persona and raise the confirmation dialog.
    pub fn select_role(&mut self, id: &str) {
        if self.transitions.active_panel() != Some(Panel::Role) {
            return;
        }
        if self.ui_state.input_mode != InputMode::Normal {
            return;
        }
        if self.config.role(id).is_none() {
            return;
        }

        let persona = persona_name(id).to_string();
        tracing::debug!("role picked: {} -> {}", id, persona);
        self.ui_state.pending_role = Some(RoleConfirmation {
            role_id: id.to_string(),
            persona,
        });
        self.ui_state.input_mode = InputMode::ConfirmRole;
        self.needs_render = true;
    }

    /// Dismiss the confirmation dialog and notify the navigator.
    pub fn acknowledge_role(&mut self) {
        let Some(confirmation) = self.ui_state.pending_role.take() else {
            return;
        };
        self.ui_state.input_mode = InputMode::Normal;
        self.ui_state.status_text = format!("{} is ready to chat", confirmation.persona);
        self.navigator
            .on_role_confirmed(&confirmation.role_id, &confirmation.persona);
        self.needs_render = true;
    }

    /// Return from the role panel to the mood panel.
    pub fn go_back(&mut self, now_ms: u64) {
        if self.transitions.active_panel() != Some(Panel::Role) {
            return;
        }
        if self.ui_state.input_mode != InputMode::Normal {
            return;
        }

        self.transitions
            .switch_section(now_ms, Panel::Mood, Panel::Role, &mut self.ui_state);
        self.needs_render = true;
    }

    /// Flip the light/dark theme flag. Two flips restore the original state.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        tracing::debug!(
            "theme toggled: {:?} (icon {})",
            self.theme_mode,
            self.theme_mode.icon().glyph()
        );
        self.needs_render = true;
    }

    /// Advance the logical clock, applying any due transition steps.
    pub fn tick(&mut self, now_ms: u64) {
        let was_transitioning = self.transitions.is_transitioning();
        self.transitions.advance(now_ms, &mut self.ui_state);
        if was_transitioning {
            self.needs_render = true;
        }
    }

    /// Request shutdown
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Fade;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn core() -> AppCore {
        AppCore::new(Config::embedded_default().unwrap()).unwrap()
    }

    #[test]
    fn test_mood_pick_scenario() {
        // Initial state: light theme, mood panel active
        let mut app = core();
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.section_state(), SectionState::MoodActive);

        app.select_mood(0, "happy");
        assert_eq!(app.ui_state.selected_mood.as_deref(), Some("happy"));
        assert!(app.transitions.is_transitioning());

        // 500ms in: role panel fading in, mood panel fully hidden
        app.tick(500);
        assert_eq!(app.ui_state.role_panel.fade, Fade::In);
        assert!(app.ui_state.role_panel.is_visible());
        assert!(app.ui_state.mood_panel.hidden);
        assert!(!app.ui_state.mood_panel.interactive);

        // 1000ms in: settled on the role panel
        app.tick(1000);
        assert_eq!(app.section_state(), SectionState::RoleActive);
        assert!(!app.ui_state.mood_panel.interactive);
    }

    #[test]
    fn test_unknown_mood_is_ignored() {
        let mut app = core();
        app.select_mood(0, "not-a-mood");
        assert_eq!(app.ui_state.selected_mood, None);
        assert_eq!(app.section_state(), SectionState::MoodActive);
    }

    #[test]
    fn test_back_returns_to_mood_panel() {
        let mut app = core();
        app.select_mood(0, "happy");
        app.tick(1000);
        assert_eq!(app.section_state(), SectionState::RoleActive);

        app.go_back(2000);
        app.tick(3000);
        assert_eq!(app.section_state(), SectionState::MoodActive);
        assert!(app.ui_state.mood_panel.interactive);
        assert!(!app.ui_state.role_panel.is_visible());
    }

    #[test]
    fn test_role_confirmation_blocks_and_notifies() {
        struct Recorder(Rc<RefCell<Vec<String>>>);
        impl ChatNavigator for Recorder {
            fn on_role_confirmed(&mut self, _role_id: &str, persona: &str) {
                self.0.borrow_mut().push(persona.to_string());
            }
        }

        let mut app = core();
        let confirmed = Rc::new(RefCell::new(Vec::new()));
        app.set_navigator(Box::new(Recorder(confirmed.clone())));

        app.select_mood(0, "happy");
        app.tick(1000);

        app.select_role("calm");
        assert_eq!(app.ui_state.input_mode, InputMode::ConfirmRole);
        assert_eq!(
            app.ui_state.pending_role.as_ref().unwrap().persona,
            "冷靜思考 BOT"
        );

        // The dialog swallows everything but the acknowledgment
        app.go_back(1500);
        assert_eq!(app.section_state(), SectionState::RoleActive);

        app.acknowledge_role();
        assert_eq!(app.ui_state.input_mode, InputMode::Normal);
        assert_eq!(confirmed.borrow().as_slice(), ["冷靜思考 BOT"]);
    }

    #[test]
    fn test_theme_toggle_is_an_involution() {
        let mut app = core();
        let start_mode = app.theme_mode;
        let start_icon = app.theme_mode.icon();

        app.toggle_theme();
        assert_ne!(app.theme_mode, start_mode);
        assert_ne!(app.theme_mode.icon(), start_icon);

        app.toggle_theme();
        assert_eq!(app.theme_mode, start_mode);
        assert_eq!(app.theme_mode.icon(), start_icon);
    }

    #[test]
    fn test_mood_pick_ignored_mid_transition() {
        let mut app = core();
        app.select_mood(0, "happy");
        app.tick(400);

        // Still transitioning; a second pick must not restart the chain
        app.select_mood(450, "sad");
        assert_eq!(app.ui_state.selected_mood.as_deref(), Some("happy"));

        app.tick(1000);
        assert_eq!(app.section_state(), SectionState::RoleActive);
    }
}
