//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Covers browse mode only. The search bar and edit form take raw keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Row cursor
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::CursorDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::CursorUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::CursorDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::CursorUp,
        );

        // Pages: single step
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PrevPage,
        );

        // Pages: double step
        bindings.insert(
            KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT),
            KeyAction::NextPageTwo,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT),
            KeyAction::PrevPageTwo,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT),
            KeyAction::NextPageTwo,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT),
            KeyAction::PrevPageTwo,
        );

        // Page bubbles 1-9
        for n in 1..=9u8 {
            bindings.insert(
                KeyEvent::new(KeyCode::Char(char::from(b'0' + n)), KeyModifiers::NONE),
                KeyAction::SelectPage(usize::from(n)),
            );
        }
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::SelectPage(1),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::SelectPage(1),
        );

        // Pages past 9 have no digit
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::LastPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::LastPage,
        );

        // Selection
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleSelect,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::ToggleSelectAll,
        );

        // Mutations
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            KeyAction::DeleteRow,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            KeyAction::DeleteRow,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT),
            KeyAction::DeleteSelected,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
            KeyAction::BeginEdit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::BeginEdit,
        );

        // Search
        bindings.insert(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            KeyAction::StartSearch,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL),
            KeyAction::StartSearch,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn lookup(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        KeyBindings::default().get(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn digits_map_to_page_bubbles() {
        assert_eq!(
            lookup(KeyCode::Char('1'), KeyModifiers::NONE),
            Some(KeyAction::SelectPage(1))
        );
        assert_eq!(
            lookup(KeyCode::Char('9'), KeyModifiers::NONE),
            Some(KeyAction::SelectPage(9))
        );
        assert_eq!(lookup(KeyCode::Char('0'), KeyModifiers::NONE), None);
    }

    #[test]
    fn lowercase_d_deletes_row_and_uppercase_deletes_selected() {
        assert_eq!(
            lookup(KeyCode::Char('d'), KeyModifiers::NONE),
            Some(KeyAction::DeleteRow)
        );
        assert_eq!(
            lookup(KeyCode::Char('D'), KeyModifiers::SHIFT),
            Some(KeyAction::DeleteSelected),
            "Uppercase 'D' (shift+d) should map to DeleteSelected"
        );
    }

    #[test]
    fn shift_arrows_skip_two_pages() {
        assert_eq!(
            lookup(KeyCode::Right, KeyModifiers::SHIFT),
            Some(KeyAction::NextPageTwo)
        );
        assert_eq!(
            lookup(KeyCode::Left, KeyModifiers::SHIFT),
            Some(KeyAction::PrevPageTwo)
        );
    }

    #[test]
    fn home_and_end_reach_first_and_last_page() {
        assert_eq!(
            lookup(KeyCode::Home, KeyModifiers::NONE),
            Some(KeyAction::SelectPage(1))
        );
        assert_eq!(
            lookup(KeyCode::End, KeyModifiers::NONE),
            Some(KeyAction::LastPage)
        );
        assert_eq!(
            lookup(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(KeyAction::LastPage)
        );
    }

    #[test]
    fn unbound_key_has_no_action() {
        assert_eq!(lookup(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }
}
