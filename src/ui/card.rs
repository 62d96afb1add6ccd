//! Main card container
//!
//! Lays out the centered card, decides which panel is drawn this frame,
//! applies the card height constraint during section swaps, and composes
//! the status bar and confirmation dialog around it.

use crate::core::AppCore;
use crate::data::{CardHeight, InputMode, Panel};
use crate::ui::{confirm_dialog, mood_panel, role_panel, status_bar, HitMap};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders},
    Frame,
};

/// Maximum card width in columns
const CARD_WIDTH: u16 = 44;

/// Render the whole screen from core state.
///
/// Clears and refills the hit-map; also records each panel's natural
/// content height so the transition controller can pin the card.
pub fn render_root(f: &mut Frame, core: &mut AppCore, hits: &mut HitMap) {
    hits.clear();
    let screen = f.area();

    // Renderer-measured content heights, read back by switch_section
    core.ui_state.mood_natural_rows = mood_panel::natural_rows(core.config.moods.len());
    core.ui_state.role_natural_rows = role_panel::natural_rows(core.config.roles.len());

    let theme = core.theme().clone();
    let ui = &core.ui_state;

    let background = Block::default().style(Style::default().bg(theme.background_primary));
    f.render_widget(background, screen);

    // At most one panel is drawn per frame: the fading-out panel before the
    // reveal step, the incoming panel after it.
    let visible = if ui.mood_panel.is_visible() {
        Some(Panel::Mood)
    } else if ui.role_panel.is_visible() {
        Some(Panel::Role)
    } else {
        None
    };

    let panel_rows = match ui.card_height {
        CardHeight::Locked(rows) => rows,
        CardHeight::Auto => visible.map(|p| ui.natural_rows(p)).unwrap_or(0),
    };

    let width = CARD_WIDTH.min(screen.width.saturating_sub(2));
    let height = (panel_rows + 2).min(screen.height.saturating_sub(2));
    let card_area = Rect::new(
        screen.x + (screen.width.saturating_sub(width)) / 2,
        screen.y + 1,
        width,
        height,
    );

    let card = Block::default()
        .title(" moodmate · 心情紀錄 ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.card_border))
        .title_style(Style::default().fg(theme.card_title))
        .style(Style::default().bg(theme.card_background));
    let inner = card.inner(card_area);
    f.render_widget(card, card_area);

    match visible {
        Some(Panel::Mood) => mood_panel::render(
            f,
            inner,
            &core.config.moods,
            ui,
            &ui.mood_panel,
            &theme,
            hits,
        ),
        Some(Panel::Role) => role_panel::render(
            f,
            inner,
            &core.config.roles,
            ui,
            &ui.role_panel,
            &theme,
            hits,
        ),
        None => {}
    }

    if screen.height > 0 {
        let bar_area = Rect::new(screen.x, screen.y + screen.height - 1, screen.width, 1);
        status_bar::render(
            f,
            bar_area,
            &ui.status_text,
            core.theme_mode,
            &theme,
            hits,
        );
    }

    if ui.input_mode == InputMode::ConfirmRole {
        if let Some(confirmation) = &ui.pending_role {
            confirm_dialog::render(f, screen, confirmation, &theme, hits);
        }
    }
}
