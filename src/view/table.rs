//! Roster table widget.
//!
//! Always draws exactly one page worth of row slots. Slots past the end of
//! the visible list are blank so the table keeps a fixed height.

use crate::model::{Record, RecordId, Role};
use crate::state::{CollectionManager, EditDraft, EditField};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const CURSOR_MARK: &str = "›";

/// The current page of the roster.
pub struct RosterTable<'a> {
    manager: &'a CollectionManager,
    cursor: usize,
    focused_edit: Option<&'a RecordId>,
    palette: &'a Palette,
}

impl<'a> RosterTable<'a> {
    /// Create the table for the manager's current page.
    ///
    /// `cursor` is the row index within the page. `focused_edit` names the
    /// row whose draft receives typed characters, if any.
    pub fn new(
        manager: &'a CollectionManager,
        cursor: usize,
        focused_edit: Option<&'a RecordId>,
        palette: &'a Palette,
    ) -> Self {
        Self {
            manager,
            cursor,
            focused_edit,
            palette,
        }
    }

    fn checkbox(&self, checked: bool) -> Cell<'static> {
        if checked {
            Cell::from(Span::styled(CHECKED, self.palette.selected))
        } else {
            Cell::from(UNCHECKED)
        }
    }

    fn role_span(&self, role: Role) -> Span<'static> {
        match role {
            Role::Admin => Span::styled(role.label(), self.palette.admin),
            Role::Member => Span::raw(role.label()),
        }
    }

    fn viewing_cells(&self, record: &Record) -> [Cell<'static>; 3] {
        [
            Cell::from(record.name.clone()),
            Cell::from(record.email.clone()),
            Cell::from(self.role_span(record.role)),
        ]
    }

    fn editing_cells(&self, draft: &EditDraft, focused: bool) -> [Cell<'static>; 3] {
        let style_for = |field: EditField| -> Style {
            if focused && draft.focus() == field {
                self.palette.focused_field
            } else {
                self.palette.editing
            }
        };
        let role_text = if focused && draft.focus() == EditField::Role {
            format!("‹{}›", draft.role.label())
        } else {
            draft.role.label().to_string()
        };
        [
            Cell::from(Span::styled(draft.name.clone(), style_for(EditField::Name))),
            Cell::from(Span::styled(draft.email.clone(), style_for(EditField::Email))),
            Cell::from(Span::styled(role_text, style_for(EditField::Role))),
        ]
    }

    fn record_row(&self, index: usize, record: &Record) -> Row<'static> {
        let id = record.id();
        let at_cursor = index == self.cursor;
        let mark = if at_cursor { CURSOR_MARK } else { " " };

        let [name, email, role] = match self.manager.draft(id) {
            Some(draft) => self.editing_cells(draft, self.focused_edit == Some(id)),
            None => self.viewing_cells(record),
        };

        let row = Row::new(vec![
            Cell::from(mark),
            self.checkbox(self.manager.is_selected(id)),
            name,
            email,
            role,
        ]);
        if at_cursor {
            row.style(self.palette.cursor_row)
        } else {
            row
        }
    }

    fn empty_message(&self) -> Line<'static> {
        let text = if self.manager.query().is_empty() {
            "No members".to_string()
        } else {
            format!("No members match '{}'", self.manager.query())
        };
        Line::from(Span::styled(text, self.palette.muted))
    }
}

impl Widget for RosterTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec![
            Cell::from(""),
            self.checkbox(self.manager.is_current_page_marked()),
            Cell::from("Name"),
            Cell::from("Email"),
            Cell::from("Role"),
        ])
        .style(self.palette.header);

        let is_empty = self.manager.visible_count() == 0;
        let rows: Vec<Row> = self
            .manager
            .visible_rows()
            .into_iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Some(record) => self.record_row(index, record),
                None if is_empty && index == 0 => Row::new(vec![
                    Cell::from(""),
                    Cell::from(""),
                    Cell::from(self.empty_message()),
                ]),
                None => Row::new(Vec::<Cell>::new()),
            })
            .collect();

        let widths = [
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(8),
        ];

        let title = format!(" Members ({}) ", self.manager.visible_count());
        Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
