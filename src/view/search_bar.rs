//! Search bar widget.

use crate::state::SearchInput;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search by name, email or role";

/// Search bar.
///
/// While typing it shows the live text with a block cursor. When idle it
/// shows the applied query, or a placeholder when there is none.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    applied_query: &'a str,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    /// Create new SearchBar widget.
    pub fn new(input: &'a SearchInput, applied_query: &'a str, palette: &'a Palette) -> Self {
        Self {
            input,
            applied_query,
            palette,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.input {
            SearchInput::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                // Past the end the cursor sits on a blank cell.
                let under_cursor = after.next().map_or(" ".to_string(), String::from);
                let rest: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        under_cursor,
                        self.palette.cursor_row.add_modifier(Modifier::REVERSED),
                    ),
                    Span::raw(rest),
                ]);
                Paragraph::new(line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" Search ")
                            .border_style(self.palette.focus_border),
                    )
                    .render(area, buf);
            }
            SearchInput::Idle => {
                let line = if self.applied_query.is_empty() {
                    Line::from(Span::styled(PLACEHOLDER, self.palette.muted))
                } else {
                    Line::from(self.applied_query)
                };
                Paragraph::new(line)
                    .block(Block::default().borders(Borders::ALL).title(" Search (/) "))
                    .render(area, buf);
            }
        }
    }
}
