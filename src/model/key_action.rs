//! Domain-level keyboard actions independent of key bindings.

/// Operator intent, not specific keys.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`]. Text entry in the search bar and edit form
/// bypasses this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up within the page. Default: k/↑
    CursorUp,
    /// Move the row cursor down within the page. Default: j/↓
    CursorDown,

    // Pages
    /// Next page. Default: l/→
    NextPage,
    /// Previous page. Default: h/←
    PrevPage,
    /// Skip two pages forward. Default: L/Shift+→
    NextPageTwo,
    /// Skip two pages back. Default: H/Shift+←
    PrevPageTwo,
    /// Jump to a page by its bubble number. Default: 1-9, Home/g for page 1
    SelectPage(usize),
    /// Jump to the last page, however many there are. Default: End/G
    LastPage,

    // Selection
    /// Toggle the row under the cursor. Default: Space
    ToggleSelect,
    /// Toggle "select all" for the current page. Default: a
    ToggleSelectAll,

    // Mutations
    /// Delete the row under the cursor. Default: d/Delete
    DeleteRow,
    /// Delete every selected row. Default: D/Shift+d
    DeleteSelected,
    /// Open the row under the cursor for editing. Default: e/Enter
    BeginEdit,

    // Search
    /// Focus the search bar. Default: /
    StartSearch,

    // Application
    /// Dismiss the alert or quit. Default: q
    Quit,
    /// Show the key reference. Default: ?
    Help,
}
