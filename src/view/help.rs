//! Help overlay widget displaying keyboard shortcuts.
//!
//! Triggered by '?', dismissed by 'Esc', '?' or 'q'.

use super::alert::centered_box;
use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    Frame,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Shortcut groups: category title, then (keys, description) pairs.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[
            ("j/↓  k/↑", "Move cursor"),
            ("Space", "Select row"),
            ("a", "Select all on page"),
        ],
    ),
    (
        "Pages",
        &[
            ("l/→  h/←", "Next / previous page"),
            ("L  H", "Skip two pages"),
            ("1-9", "Go to page 1-9"),
            ("Home  End", "First / last page"),
        ],
    ),
    (
        "Changes",
        &[
            ("e/Enter", "Edit row"),
            ("Tab", "Next field (while editing)"),
            ("Enter  Esc", "Save / cancel edit"),
            ("d/Del", "Delete row"),
            ("D", "Delete selected"),
        ],
    ),
    (
        "Search",
        &[
            ("/  Ctrl+f", "Focus search"),
            ("Ctrl+u", "Clear search"),
            ("Enter  Esc", "Back to table"),
        ],
    ),
    ("Application", &[("?", "Toggle help"), ("q  Ctrl+c", "Quit")]),
];

fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (title, entries)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*title, palette.header)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), palette.editing),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup = centered_box(
        area.width * HELP_POPUP_WIDTH_PERCENT / 100,
        area.height * HELP_POPUP_HEIGHT_PERCENT / 100,
        area,
    );

    frame.render_widget(Clear, popup);

    let paragraph = Paragraph::new(help_lines(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .title_bottom(Line::from(" Esc or ? to close ").alignment(Alignment::Center))
                .borders(Borders::ALL)
                .border_style(palette.focus_border),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, popup);
}
