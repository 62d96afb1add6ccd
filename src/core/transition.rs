//! Section-switch state machine
//!
//! Drives the two-phase cross-fade between the mood and role panels over a
//! logical millisecond clock. The caller owns the clock: the main loop feeds
//! in wall-clock elapsed milliseconds, tests feed in whatever they like.
//!
//! A swap runs in three steps, matching the card's animation timings:
//! - t = 0: lock the card height, start fading the old panel out
//! - t + fade_ms: hide the old panel, reveal the new one fading in,
//!   re-lock the card to the new panel's natural height
//! - t + 2 * fade_ms: release the height constraint, settle on the new panel

use crate::data::{CardHeight, Fade, Panel, PanelVisual, UiState};

/// Default duration of one fade stage in milliseconds
pub const DEFAULT_FADE_MS: u64 = 500;

/// Where the card currently is in the panel life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Mood panel is settled and interactive
    MoodActive,
    /// A swap is in flight; neither panel is settled
    Transitioning { show: Panel, hide: Panel },
    /// Role panel is settled and interactive
    RoleActive,
}

impl SectionState {
    /// The settled state for a panel
    fn settled(panel: Panel) -> Self {
        match panel {
            Panel::Mood => SectionState::MoodActive,
            Panel::Role => SectionState::RoleActive,
        }
    }
}

/// A deferred mutation queued by `switch_section`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Hide the old panel completely and reveal the new one fading in
    Reveal { show: Panel, hide: Panel },
    /// Release the card height back to automatic sizing and settle
    Release { show: Panel },
}

/// A step with its due time on the logical clock
#[derive(Debug, Clone, Copy)]
struct ScheduledStep {
    due_ms: u64,
    step: Step,
}

/// Timed panel-swap controller
///
/// Exactly one step chain is queued per `switch_section` call. A trigger that
/// arrives while a swap is in flight is ignored; the queued chain runs to
/// completion untouched.
#[derive(Debug, Clone)]
pub struct TransitionController {
    state: SectionState,
    queue: Vec<ScheduledStep>,
    fade_ms: u64,
}

impl TransitionController {
    pub fn new(fade_ms: u64) -> Self {
        Self {
            state: SectionState::MoodActive,
            queue: Vec::new(),
            fade_ms,
        }
    }

    /// Current section state
    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Whether a swap is currently in flight
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, SectionState::Transitioning { .. })
    }

    /// The panel the user can currently interact with, if settled
    pub fn active_panel(&self) -> Option<Panel> {
        match self.state {
            SectionState::MoodActive => Some(Panel::Mood),
            SectionState::RoleActive => Some(Panel::Role),
            SectionState::Transitioning { .. } => None,
        }
    }

    /// Begin a timed swap from `hide` to `show`.
    ///
    /// Locks the card at its current measured height, starts the fade-out,
    /// and queues the reveal and release steps. Ignored if a swap is already
    /// in flight.
    pub fn switch_section(&mut self, now_ms: u64, show: Panel, hide: Panel, ui: &mut UiState) {
        if self.is_transitioning() {
            return;
        }

        // Pin the card so the swap doesn't jump
        ui.card_height = CardHeight::Locked(ui.natural_rows(hide));

        let hiding = ui.panel_mut(hide);
        hiding.fade = Fade::Out;
        hiding.interactive = false;

        self.state = SectionState::Transitioning { show, hide };
        self.queue.push(ScheduledStep {
            due_ms: now_ms + self.fade_ms,
            step: Step::Reveal { show, hide },
        });
        self.queue.push(ScheduledStep {
            due_ms: now_ms + 2 * self.fade_ms,
            step: Step::Release { show },
        });
    }

    /// Apply every queued step whose due time has passed, in due order.
    pub fn advance(&mut self, now_ms: u64, ui: &mut UiState) {
        while let Some(pos) = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= now_ms)
            .min_by_key(|(_, s)| s.due_ms)
            .map(|(pos, _)| pos)
        {
            let scheduled = self.queue.remove(pos);
            self.apply(scheduled.step, ui);
        }
    }

    fn apply(&mut self, step: Step, ui: &mut UiState) {
        match step {
            Step::Reveal { show, hide } => {
                *ui.panel_mut(hide) = PanelVisual::inactive();

                let showing = ui.panel_mut(show);
                showing.hidden = false;
                showing.interactive = true;
                showing.fade = Fade::In;

                // Re-pin at the incoming panel's content height
                ui.card_height = CardHeight::Locked(ui.natural_rows(show));
            }
            Step::Release { show } => {
                ui.card_height = CardHeight::Auto;
                self.state = SectionState::settled(show);
            }
        }
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (TransitionController, UiState) {
        let mut ui = UiState::new();
        ui.mood_natural_rows = 12;
        ui.role_natural_rows = 9;
        (TransitionController::new(DEFAULT_FADE_MS), ui)
    }

    #[test]
    fn test_swap_runs_through_both_stages() {
        let (mut tc, mut ui) = setup();

        tc.switch_section(0, Panel::Role, Panel::Mood, &mut ui);
        assert!(tc.is_transitioning());
        assert_eq!(ui.mood_panel.fade, Fade::Out);
        assert!(!ui.mood_panel.interactive);
        assert_eq!(ui.card_height, CardHeight::Locked(12));
        // Role panel has not appeared yet
        assert!(ui.role_panel.hidden);

        // Mid-fade: old panel fully hidden, new one fading in
        tc.advance(500, &mut ui);
        assert!(tc.is_transitioning());
        assert!(ui.mood_panel.hidden);
        assert!(!ui.mood_panel.interactive);
        assert_eq!(ui.role_panel.fade, Fade::In);
        assert!(ui.role_panel.interactive);
        assert_eq!(ui.card_height, CardHeight::Locked(9));

        // Settled: height released, role panel active
        tc.advance(1000, &mut ui);
        assert_eq!(tc.state(), SectionState::RoleActive);
        assert_eq!(ui.card_height, CardHeight::Auto);
        assert!(ui.role_panel.is_visible());
        assert!(!ui.mood_panel.is_visible());
    }

    #[test]
    fn test_back_swap_is_the_inverse() {
        let (mut tc, mut ui) = setup();
        tc.switch_section(0, Panel::Role, Panel::Mood, &mut ui);
        tc.advance(1000, &mut ui);
        assert_eq!(tc.state(), SectionState::RoleActive);

        tc.switch_section(2000, Panel::Mood, Panel::Role, &mut ui);
        tc.advance(3000, &mut ui);
        assert_eq!(tc.state(), SectionState::MoodActive);
        assert!(ui.mood_panel.is_visible());
        assert!(ui.mood_panel.interactive);
        assert!(!ui.role_panel.is_visible());
        assert!(!ui.role_panel.interactive);
    }

    #[test]
    fn test_retrigger_in_flight_is_ignored() {
        let (mut tc, mut ui) = setup();
        tc.switch_section(0, Panel::Role, Panel::Mood, &mut ui);

        // A second trigger mid-swap must not queue another chain
        tc.switch_section(100, Panel::Mood, Panel::Role, &mut ui);
        assert_eq!(
            tc.state(),
            SectionState::Transitioning {
                show: Panel::Role,
                hide: Panel::Mood
            }
        );

        tc.advance(1000, &mut ui);
        assert_eq!(tc.state(), SectionState::RoleActive);
    }

    #[test]
    fn test_advance_applies_overdue_steps_in_order() {
        let (mut tc, mut ui) = setup();
        tc.switch_section(0, Panel::Role, Panel::Mood, &mut ui);

        // Jumping the clock past both due times still lands on the settled
        // state with the height released.
        tc.advance(5000, &mut ui);
        assert_eq!(tc.state(), SectionState::RoleActive);
        assert_eq!(ui.card_height, CardHeight::Auto);
    }

    #[test]
    fn test_exactly_one_panel_settled_outside_transition() {
        let (mut tc, mut ui) = setup();
        assert_eq!(tc.active_panel(), Some(Panel::Mood));

        tc.switch_section(0, Panel::Role, Panel::Mood, &mut ui);
        assert_eq!(tc.active_panel(), None);

        tc.advance(1000, &mut ui);
        assert_eq!(tc.active_panel(), Some(Panel::Role));
        assert_ne!(ui.mood_panel.is_visible(), ui.role_panel.is_visible());
    }
}
