//! Bottom status bar
//!
//! Shows the status text on the left and the theme toggle with key hints on
//! the right. The toggle icon is the clickable theme control.

use crate::theme::{AppTheme, ThemeMode};
use crate::ui::{HitMap, HitTarget};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(
    f: &mut Frame,
    area: Rect,
    status_text: &str,
    mode: ThemeMode,
    theme: &AppTheme,
    hits: &mut HitMap,
) {
    let bar_style = Style::default()
        .fg(theme.status_text)
        .bg(theme.status_background);

    let left = Paragraph::new(Line::from(format!(" {}", status_text))).style(bar_style);
    f.render_widget(left, area);

    // Theme toggle sits at the right edge: "[🌙] t 主題 · q 離開"
    let toggle_label = format!("[{}]", mode.icon().glyph());
    let hints = " t 主題 · q 離開 ";
    let right_width = (toggle_label.chars().count() + hints.chars().count() + 1) as u16;
    if area.width > right_width {
        let right_area = Rect::new(
            area.x + area.width - right_width,
            area.y,
            right_width,
            area.height,
        );
        let right = Paragraph::new(Line::from(vec![
            Span::styled(toggle_label, bar_style),
            Span::styled(hints, bar_style),
        ]));
        f.render_widget(right, right_area);

        let toggle_area = Rect::new(right_area.x, right_area.y, 4, 1);
        hits.push(toggle_area, HitTarget::ThemeToggle);
    }
}
