//! Screen layout.
//!
//! Top to bottom: search bar, roster table, navigation row, status bar.
//! Overlays (help, alert) draw last, over everything else.

use crate::model::RecordId;
use crate::state::{CollectionManager, SearchInput};
use crate::view::alert::render_alert;
use crate::view::constants::{
    NAVIGATION_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT, TABLE_HEIGHT,
};
use crate::view::help::render_help_overlay;
use crate::view::navigation::PageNavigation;
use crate::view::search_bar::SearchBar;
use crate::view::styles::Palette;
use crate::view::table::RosterTable;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Modal layer above the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Nothing on top.
    #[default]
    None,
    /// Key reference.
    Help,
    /// Blocking message that must be dismissed.
    Alert(String),
}

/// Everything the layout reads for one frame.
pub struct Screen<'a> {
    /// Roster state.
    pub manager: &'a CollectionManager,
    /// Search bar state.
    pub search: &'a SearchInput,
    /// Cursor row within the page.
    pub cursor: usize,
    /// Row whose draft receives keystrokes.
    pub focused_edit: Option<&'a RecordId>,
    /// Modal layer.
    pub overlay: &'a Overlay,
    /// Styles.
    pub palette: &'a Palette,
}

/// Status line text: counts and page position.
pub fn status_text(manager: &CollectionManager) -> String {
    let mut text = format!(
        "{} of {} members · page {}/{}",
        manager.visible_count(),
        manager.all_records().len(),
        manager.current_page(),
        manager.total_pages(),
    );
    let selected = manager.selected_ids().len();
    if selected > 0 {
        text.push_str(&format!(" · {selected} selected"));
    }
    text
}

/// Render one full frame.
pub fn render_layout(frame: &mut Frame, screen: &Screen) {
    let [search_area, table_area, nav_area, _spacer, status_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Length(TABLE_HEIGHT),
        Constraint::Length(NAVIGATION_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    let manager = screen.manager;

    frame.render_widget(
        SearchBar::new(screen.search, manager.query(), screen.palette),
        search_area,
    );
    frame.render_widget(
        RosterTable::new(manager, screen.cursor, screen.focused_edit, screen.palette),
        table_area,
    );
    frame.render_widget(
        PageNavigation::new(
            manager.current_page(),
            manager.total_pages(),
            manager.selected_ids().len(),
            screen.palette,
        ),
        nav_area,
    );

    let status = Line::from(vec![
        Span::raw(status_text(manager)),
        Span::styled("   ? help  q quit", screen.palette.muted),
    ]);
    frame.render_widget(Paragraph::new(status), status_area);

    match screen.overlay {
        Overlay::None => {}
        Overlay::Help => render_help_overlay(frame, screen.palette),
        Overlay::Alert(message) => render_alert(frame, message, screen.palette),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectAllMode;
    use crate::test_harness::sample_records;

    #[test]
    fn status_text_reports_counts_and_page() {
        let mut manager = CollectionManager::new(SelectAllMode::Toggle);
        manager.load(sample_records(25));
        manager.next_page(1);

        assert_eq!(status_text(&manager), "25 of 25 members · page 2/3");
    }

    #[test]
    fn status_text_mentions_selection_and_filtered_count() {
        let mut manager = CollectionManager::new(SelectAllMode::Toggle);
        manager.load(sample_records(25));
        manager.search("Person 2");
        let first = manager.records()[0].id().clone();
        manager.toggle_select_one(&first);

        // "Person 2" and "Person 20".."Person 25"
        assert_eq!(
            status_text(&manager),
            "7 of 25 members · page 1/1 · 1 selected"
        );
    }
}
