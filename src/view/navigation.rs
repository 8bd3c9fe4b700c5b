//! Navigation row: bulk delete button and page bubbles.
//!
//! Layout: `Delete Selected (n)` on the left, `« ‹ 1 2 [3] 4 › »` on the
//! right. Controls that would be refused are drawn muted.

use crate::view::constants::MAX_PAGE_BUBBLES;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::ops::RangeInclusive;

/// Pages to draw as bubbles: at most `max` of them, centered on `current`
/// where possible.
pub fn bubble_range(current: usize, total: usize, max: usize) -> RangeInclusive<usize> {
    let total = total.max(1);
    let max = max.max(1);
    if total <= max {
        return 1..=total;
    }
    let half = max / 2;
    let start = current.saturating_sub(half).max(1).min(total + 1 - max);
    start..=start + max - 1
}

/// Navigation row widget.
pub struct PageNavigation<'a> {
    current: usize,
    total: usize,
    selected: usize,
    palette: &'a Palette,
}

impl<'a> PageNavigation<'a> {
    /// Create the row for `current` of `total` pages with `selected` rows
    /// selected.
    pub fn new(current: usize, total: usize, selected: usize, palette: &'a Palette) -> Self {
        Self {
            current,
            total,
            selected,
            palette,
        }
    }

    fn control(&self, label: &'static str, enabled: bool) -> Span<'static> {
        if enabled {
            Span::raw(label)
        } else {
            Span::styled(label, self.palette.muted)
        }
    }

    fn delete_button(&self) -> Line<'static> {
        let label = format!("Delete Selected ({})", self.selected);
        if self.selected == 0 {
            Line::from(Span::styled(label, self.palette.muted))
        } else {
            Line::from(Span::styled(label, self.palette.danger))
        }
    }

    fn pager(&self) -> Line<'static> {
        let range = bubble_range(self.current, self.total, MAX_PAGE_BUBBLES);
        let mut spans = vec![
            self.control("«", self.current > 2),
            Span::raw(" "),
            self.control("‹", self.current > 1),
            Span::raw(" "),
        ];
        if *range.start() > 1 {
            spans.push(Span::styled("… ", self.palette.muted));
        }
        for page in range.clone() {
            if page == self.current {
                spans.push(Span::styled(format!("[{page}]"), self.palette.current_page));
            } else {
                spans.push(Span::raw(format!(" {page} ")));
            }
        }
        if *range.end() < self.total {
            spans.push(Span::styled(" …", self.palette.muted));
        }
        spans.extend([
            Span::raw(" "),
            self.control("›", self.current < self.total),
            Span::raw(" "),
            self.control("»", self.current + 2 <= self.total),
        ]);
        Line::from(spans)
    }
}

impl Widget for PageNavigation<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(area);

        Paragraph::new(self.delete_button()).render(left, buf);
        Paragraph::new(self.pager())
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
