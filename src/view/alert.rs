//! Blocking alert popup.
//!
//! Used for load failures and rejected edits. While shown it swallows every
//! key except the ones that dismiss it.

use crate::view::constants::{ALERT_HEIGHT, ALERT_WIDTH};
use crate::view::styles::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Center a `width` x `height` box in `area`, shrinking it to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render `message` in a centered popup over whatever is on screen.
pub fn render_alert(frame: &mut Frame, message: &str, palette: &Palette) {
    let popup = centered_box(ALERT_WIDTH, ALERT_HEIGHT, frame.area());
    frame.render_widget(Clear, popup);

    let body = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("Press Enter to dismiss", palette.muted)),
    ];
    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .title(" Alert ")
                .borders(Borders::ALL)
                .border_style(palette.alert),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup);
}
