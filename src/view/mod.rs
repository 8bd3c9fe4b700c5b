//! TUI rendering and terminal management (impure shell)
//!
//! Maps keys to [`CollectionManager`] operations and draws the result. The
//! shell keeps only presentation state: cursor row, search bar focus, which
//! draft has keyboard focus, and the overlay.

mod alert;
pub mod constants;
mod help;
mod layout;
pub mod navigation;
mod search_bar;
pub mod styles;
mod table;

pub use layout::{Overlay, Screen, render_layout, status_text};
pub use navigation::PageNavigation;
pub use search_bar::SearchBar;
pub use styles::{ColorConfig, Palette};
pub use table::RosterTable;

use crate::config::keybindings::KeyBindings;
use crate::model::{InputError, KeyAction, Record, RecordId};
use crate::state::search_input;
use crate::state::{CollectionManager, SearchInput, SelectAllMode};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup settings for the TUI, resolved by `main`.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Select-all marker policy.
    pub select_all_mode: SelectAllMode,
    /// Query applied before the first frame (`--search`).
    pub initial_query: Option<String>,
    /// Page shown first (`--page`). Ignored when out of range.
    pub initial_page: Option<usize>,
    /// Color setting.
    pub color: ColorConfig,
}

/// Build the starting collection from the one-time fetch.
///
/// A failed fetch yields an empty collection plus the alert text to show.
/// There is no retry.
pub fn prepare_manager(
    roster: Result<Vec<Record>, InputError>,
    options: &ViewOptions,
) -> (CollectionManager, Option<String>) {
    let mut manager = CollectionManager::new(options.select_all_mode);

    let alert = match roster {
        Ok(records) => {
            manager.load(records);
            None
        }
        Err(e) => {
            warn!(error = %e, "Roster fetch failed, starting empty");
            Some(format!("Could not load roster: {e}"))
        }
    };

    if let Some(query) = options.initial_query.as_deref() {
        manager.search(query);
    }
    if let Some(page) = options.initial_page {
        if (1..=manager.total_pages()).contains(&page) {
            manager.select_page(page);
        } else {
            warn!(
                page,
                total_pages = manager.total_pages(),
                "Requested start page out of range, ignoring"
            );
        }
    }

    (manager, alert)
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    manager: CollectionManager,
    key_bindings: KeyBindings,
    search: SearchInput,
    cursor: usize,
    focused_edit: Option<RecordId>,
    overlay: Overlay,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(manager: CollectionManager, palette: Palette) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, manager, palette))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after every handled
    /// key and on resize; idle polling does not redraw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an app around an already configured terminal.
    pub fn with_terminal(terminal: Terminal<B>, manager: CollectionManager, palette: Palette) -> Self {
        Self {
            terminal,
            manager,
            key_bindings: KeyBindings::default(),
            search: SearchInput::Idle,
            cursor: 0,
            focused_edit: None,
            overlay: Overlay::None,
            palette,
        }
    }

    /// Roster state.
    pub fn manager(&self) -> &CollectionManager {
        &self.manager
    }

    /// Modal layer currently shown.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Cursor row within the page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Search bar state.
    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    /// Row whose draft receives keystrokes.
    pub fn focused_edit(&self) -> Option<&RecordId> {
        self.focused_edit.as_ref()
    }

    /// The terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Show a blocking alert.
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.overlay = Overlay::Alert(message.into());
    }

    /// Handle a keyboard event.
    ///
    /// Returns true when the app should quit. Key routing, first match wins:
    /// Ctrl+C, overlay, search bar, focused edit row, key bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.overlay {
            Overlay::Alert(_) => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
                ) {
                    self.overlay = Overlay::None;
                }
                return false;
            }
            Overlay::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.overlay = Overlay::None;
                }
                return false;
            }
            Overlay::None => {}
        }

        if self.search.is_typing() {
            self.handle_search_key(key);
            return false;
        }

        if let Some(id) = self.focused_edit.clone() {
            if self.handle_edit_key(&id, key) {
                return false;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        let quit = self.apply_action(action);
        self.reconcile();
        quit
    }

    /// Draw one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let screen = Screen {
            manager: &self.manager,
            search: &self.search,
            cursor: self.cursor,
            focused_edit: self.focused_edit.as_ref(),
            overlay: &self.overlay,
            palette: &self.palette,
        };
        self.terminal.draw(|frame| render_layout(frame, &screen))?;
        Ok(())
    }

    // ===== Key routing =====

    fn handle_search_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let state = std::mem::take(&mut self.search);
        self.search = match key.code {
            KeyCode::Char('u') if ctrl => search_input::clear(state),
            KeyCode::Char(ch) if !ctrl => search_input::handle_char_input(state, ch),
            KeyCode::Backspace => search_input::handle_backspace(state),
            KeyCode::Left => search_input::handle_cursor_left(state),
            KeyCode::Right => search_input::handle_cursor_right(state),
            KeyCode::Enter | KeyCode::Esc => search_input::deactivate(state),
            _ => state,
        };

        // Results follow every keystroke.
        if let Some(query) = self.search.query() {
            if query != self.manager.query() {
                let query = query.to_string();
                self.manager.search(&query);
                self.cursor = 0;
            }
        }
        self.reconcile();
    }

    /// Route a key to the focused draft. Returns whether it was consumed.
    ///
    /// Up and Down release focus (the draft stays open) and fall through so
    /// the cursor moves. Every other key is consumed.
    fn handle_edit_key(&mut self, id: &RecordId, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.focused_edit = None;
                false
            }
            KeyCode::Enter => {
                match self.manager.save_draft(id) {
                    Ok(()) => self.focused_edit = None,
                    Err(e) => {
                        info!(%id, reason = %e, "Edit rejected");
                        self.show_alert(e.to_string());
                    }
                }
                true
            }
            KeyCode::Esc => {
                self.manager.cancel_edit(id);
                self.focused_edit = None;
                true
            }
            _ => {
                let Some(draft) = self.manager.draft_mut(id) else {
                    self.focused_edit = None;
                    return false;
                };
                // The form swallows every other key while it has focus.
                match key.code {
                    KeyCode::Tab => draft.focus_next(),
                    KeyCode::Backspace => draft.backspace(),
                    KeyCode::Char(ch) if !ctrl => draft.push_char(ch),
                    _ => debug!(code = ?key.code, "Key ignored while editing"),
                }
                true
            }
        }
    }

    /// Run a browse-mode action. Returns true to quit.
    fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            KeyAction::CursorDown => {
                if self.cursor + 1 < self.manager.page_records().len() {
                    self.cursor += 1;
                }
            }
            KeyAction::NextPage => self.turn_page(|m| m.next_page(1)),
            KeyAction::PrevPage => self.turn_page(|m| m.prev_page(1)),
            KeyAction::NextPageTwo => self.turn_page(|m| m.next_page(2)),
            KeyAction::PrevPageTwo => self.turn_page(|m| m.prev_page(2)),
            KeyAction::SelectPage(page) => {
                if page <= self.manager.total_pages() {
                    self.manager.select_page(page);
                    self.cursor = 0;
                } else {
                    debug!(page, "No such page bubble");
                }
            }
            KeyAction::LastPage => {
                let last = self.manager.total_pages();
                if last != self.manager.current_page() {
                    self.manager.select_page(last);
                    self.cursor = 0;
                }
            }
            KeyAction::ToggleSelect => {
                if let Some(id) = self.cursor_id() {
                    self.manager.toggle_select_one(&id);
                }
            }
            KeyAction::ToggleSelectAll => {
                let checked = !self.manager.is_current_page_marked();
                self.manager.toggle_select_all_on_page(checked);
            }
            KeyAction::DeleteRow => {
                if let Some(id) = self.cursor_id() {
                    self.manager.delete_one(&id);
                }
            }
            KeyAction::DeleteSelected => {
                if self.manager.selected_ids().is_empty() {
                    debug!("Delete selected is disabled with nothing selected");
                } else {
                    self.manager.delete_selected();
                }
            }
            KeyAction::BeginEdit => {
                if let Some(id) = self.cursor_id() {
                    if self.manager.begin_edit(&id) {
                        self.focused_edit = Some(id);
                    }
                }
            }
            KeyAction::StartSearch => {
                let state = std::mem::take(&mut self.search);
                self.search = search_input::activate(state, self.manager.query());
            }
            KeyAction::Quit => return true,
            KeyAction::Help => self.overlay = Overlay::Help,
        }
        false
    }

    fn turn_page(&mut self, step: impl FnOnce(&mut CollectionManager) -> bool) {
        if step(&mut self.manager) {
            self.cursor = 0;
        } else {
            debug!(page = self.manager.current_page(), "Page change refused");
        }
    }

    fn cursor_id(&self) -> Option<RecordId> {
        self.manager
            .page_records()
            .get(self.cursor)
            .map(|r| r.id().clone())
    }

    /// Keep presentation state pointing at rows that are still on screen.
    fn reconcile(&mut self) {
        let rows = self.manager.page_records();
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));

        let stale = self.focused_edit.as_ref().is_some_and(|id| {
            !rows.iter().any(|r| r.id() == id) || !self.manager.is_editing(id)
        });
        if stale {
            self.focused_edit = None;
        }
    }
}

/// Initialize and run the TUI with the outcome of the roster fetch.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. A failed fetch is shown as an alert over an empty table.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_roster(
    roster: Result<Vec<Record>, InputError>,
    options: ViewOptions,
) -> Result<(), TuiError> {
    let (manager, alert) = prepare_manager(roster, &options);
    let mut app = TuiApp::new(manager, Palette::new(options.color))?;
    if let Some(message) = alert {
        app.show_alert(message);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
