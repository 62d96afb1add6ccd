//! Chat persona selection panel
//!
//! One card per configured role plus the back control. Cards show the
//! persona title with its tagline underneath.

use crate::data::{Fade, PanelVisual, UiState};
use crate::data::persona::RoleCard;
use crate::theme::AppTheme;
use crate::ui::{HitMap, HitTarget};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows of one role card including its border
const CARD_ROWS: u16 = 4;

/// Natural content height of the panel for `count` roles
pub fn natural_rows(count: usize) -> u16 {
    // Heading, spacer, the cards, spacer, back control
    2 + count as u16 * CARD_ROWS + 2
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    roles: &[RoleCard],
    ui: &UiState,
    visual: &PanelVisual,
    theme: &AppTheme,
    hits: &mut HitMap,
) {
    let fading_out = visual.fade == Fade::Out;
    let text_style = if fading_out {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.text_primary)
    };
    let tagline_style = if fading_out {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.text_secondary)
    };

    let heading = Paragraph::new(Line::from("選一個聊天夥伴"))
        .style(text_style)
        .alignment(Alignment::Center);
    f.render_widget(heading, Rect { height: 1, ..area });

    let mut y = area.y + 2;
    for (idx, role) in roles.iter().enumerate() {
        if y + CARD_ROWS > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, CARD_ROWS);

        let highlighted = ui.highlighted_role == idx;
        let border_color = if fading_out {
            theme.text_muted
        } else if highlighted {
            theme.item_border_highlighted
        } else {
            theme.item_border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let body = Paragraph::new(vec![
            Line::styled(format!("{}  {}", role.glyph, role.title), text_style),
            Line::styled(format!("   {}", role.tagline), tagline_style),
        ])
        .block(block);
        f.render_widget(body, card_area);

        if visual.interactive {
            hits.push(card_area, HitTarget::Role(idx));
        }
        y += CARD_ROWS;
    }

    // Back control on the panel's last row
    if area.height >= 2 {
        let back_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let back = Paragraph::new(Line::from("← 返回 (Esc)"))
            .style(tagline_style)
            .alignment(Alignment::Center);
        f.render_widget(back, back_area);
        if visual.interactive {
            hits.push(back_area, HitTarget::Back);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_rows() {
        assert_eq!(natural_rows(2), 12);
    }
}
