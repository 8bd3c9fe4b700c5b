//! Acceptance test harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with helpers for simulating operator input
//! and reading back what is on screen.

use crate::model::{Record, RecordId, Role};
use crate::state::{CollectionManager, SelectAllMode};
use crate::view::{Palette, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are dropped and trailing spaces trimmed.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// `n` records with ids "1".."n", named "Person i".
///
/// Every fifth record is an admin.
pub(crate) fn sample_records(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            let role = if i % 5 == 0 { Role::Admin } else { Role::Member };
            Record::new(
                RecordId::new(i.to_string()).unwrap(),
                format!("Person {i}"),
                format!("person{i}@example.com"),
                role,
            )
        })
        .collect()
}

/// Test harness for acceptance testing
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
}

impl AcceptanceTestHarness {
    /// Load `records` into an 80x24 app.
    pub(crate) fn with_records(records: Vec<Record>, mode: SelectAllMode) -> Self {
        let mut manager = CollectionManager::new(mode);
        manager.load(records);
        Self::with_manager(manager)
    }

    /// Wrap an already prepared manager.
    pub(crate) fn with_manager(manager: CollectionManager) -> Self {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        Self {
            app: TuiApp::with_terminal(terminal, manager, Palette::default()),
        }
    }

    /// Send a key without modifiers. Returns whether the app asked to quit.
    pub(crate) fn press(&mut self, code: KeyCode) -> bool {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Send a key with modifiers.
    pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.app.handle_key(KeyEvent::new(code, modifiers))
    }

    /// Send an uppercase letter the way terminals report it (with Shift).
    pub(crate) fn press_shifted(&mut self, ch: char) -> bool {
        self.press_with(KeyCode::Char(ch), KeyModifiers::SHIFT)
    }

    /// Type each character of `text`.
    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Draw a frame and return the screen as text.
    pub(crate) fn render(&mut self) -> String {
        self.app.draw().unwrap();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// The app under test.
    pub(crate) fn app(&self) -> &TuiApp<TestBackend> {
        &self.app
    }

    /// Shortcut for the app's collection manager.
    pub(crate) fn manager(&self) -> &CollectionManager {
        self.app.manager()
    }
}
