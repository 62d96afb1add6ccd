//! Widget rendering layer
//!
//! Draws the card, its two panels, the confirmation dialog, and the status
//! bar from `AppCore` state. Rendering also records a click hit-map so the
//! main loop can resolve mouse clicks back to semantic targets.

pub mod card;
pub mod confirm_dialog;
pub mod mood_panel;
pub mod role_panel;
pub mod status_bar;

use ratatui::layout::Rect;

pub use card::render_root;

/// A clickable region's semantic meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The n-th mood button
    Mood(usize),
    /// The n-th role card
    Role(usize),
    /// The back control on the role panel
    Back,
    /// The theme toggle control
    ThemeToggle,
    /// The confirmation dialog body
    Dialog,
}

/// Click regions recorded during the last render pass
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// Resolve a click position to the target under it.
    ///
    /// Regions are checked last-pushed first so overlays win over the
    /// panels beneath them.
    pub fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
            })
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_resolution() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 3), HitTarget::Mood(0));
        hits.push(Rect::new(0, 3, 10, 3), HitTarget::Mood(1));

        assert_eq!(hits.hit(5, 1), Some(HitTarget::Mood(0)));
        assert_eq!(hits.hit(5, 4), Some(HitTarget::Mood(1)));
        assert_eq!(hits.hit(20, 1), None);
    }

    #[test]
    fn test_later_regions_win() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 20, 10), HitTarget::Mood(0));
        hits.push(Rect::new(5, 2, 8, 4), HitTarget::Dialog);

        assert_eq!(hits.hit(6, 3), Some(HitTarget::Dialog));
        assert_eq!(hits.hit(1, 1), Some(HitTarget::Mood(0)));
    }
}
