//! Role confirmation dialog
//!
//! Centered modal drawn over everything else. While open it is the only
//! clickable region; the input router swallows all other keys.

use crate::data::RoleConfirmation;
use crate::theme::AppTheme;
use crate::ui::{HitMap, HitTarget};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(
    f: &mut Frame,
    screen: Rect,
    confirmation: &RoleConfirmation,
    theme: &AppTheme,
    hits: &mut HitMap,
) {
    let width = screen.width.min(44);
    let height = 7;
    let area = Rect::new(
        screen.x + (screen.width.saturating_sub(width)) / 2,
        screen.y + (screen.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme.dialog_border))
        .style(Style::default().bg(theme.dialog_background));

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            format!("你選擇了 {}！", confirmation.persona),
            Style::default().fg(theme.dialog_text),
        ),
        Line::styled("準備開始聊天囉！", Style::default().fg(theme.dialog_text)),
        Line::from(""),
        Line::styled("[Enter] 確認", Style::default().fg(theme.text_secondary)),
    ])
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(body, area);
    hits.push(area, HitTarget::Dialog);
}
