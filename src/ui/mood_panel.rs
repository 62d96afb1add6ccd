//! Mood selection panel
//!
//! One bordered button per configured mood. The keyboard highlight and the
//! committed selection get distinct border treatments; a fading panel is
//! drawn entirely in the muted text color to approximate opacity.

use crate::data::{Fade, PanelVisual, UiState};
use crate::data::persona::MoodOption;
use crate::theme::AppTheme;
use crate::ui::{HitMap, HitTarget};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows of one mood button including its border
const ITEM_ROWS: u16 = 3;

/// Natural content height of the panel for `count` moods
pub fn natural_rows(count: usize) -> u16 {
    // Heading, spacer, then the buttons
    2 + count as u16 * ITEM_ROWS
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    moods: &[MoodOption],
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

    let heading = Paragraph::new(Line::from("今天的心情是？"))
        .style(text_style)
        .alignment(Alignment::Center);
    f.render_widget(heading, Rect { height: 1, ..area });

    let mut y = area.y + 2;
    for (idx, mood) in moods.iter().enumerate() {
        if y + ITEM_ROWS > area.y + area.height {
            break;
        }
        let item_area = Rect::new(area.x, y, area.width, ITEM_ROWS);

        let selected = ui.selected_mood.as_deref() == Some(mood.id.as_str());
        let highlighted = ui.highlighted_mood == idx;

        let border_color = if fading_out {
            theme.text_muted
        } else if selected {
            theme.item_selected
        } else if highlighted {
            theme.item_border_highlighted
        } else {
            theme.item_border
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        if selected && !fading_out {
            block = block.style(Style::default().bg(theme.item_selected_background));
        }

        let label = Paragraph::new(Line::from(format!("{}  {}", mood.glyph, mood.label)))
            .style(text_style)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(label, item_area);

        if visual.interactive {
            hits.push(item_area, HitTarget::Mood(idx));
        }
        y += ITEM_ROWS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_rows() {
        assert_eq!(natural_rows(0), 2);
        assert_eq!(natural_rows(5), 17);
    }
}
