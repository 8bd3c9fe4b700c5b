//! Search bar input handling (pure state transitions).
//!
//! The bar is either idle or being typed into. Every edit yields the new
//! query text; the shell feeds it to [`crate::state::CollectionManager::search`]
//! on each keystroke, so results update live.
//!
//! Cursor positions count characters, not bytes.

/// Search bar focus and edit state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchInput {
    /// Bar not focused. Keys go to the table.
    #[default]
    Idle,
    /// Operator is typing.
    Typing {
        /// Text in the bar.
        query: String,
        /// Cursor position in characters.
        cursor: usize,
    },
}

impl SearchInput {
    /// Whether the bar has focus.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchInput::Typing { .. })
    }

    /// Text in the bar while typing.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchInput::Typing { query, .. } => Some(query),
            SearchInput::Idle => None,
        }
    }
}

fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(offset, _)| offset)
}

/// Focus the bar, seeded with the query already applied.
///
/// The cursor starts at the end. No-op when already typing.
pub fn activate(state: SearchInput, current_query: &str) -> SearchInput {
    match state {
        SearchInput::Idle => SearchInput::Typing {
            query: current_query.to_string(),
            cursor: current_query.chars().count(),
        },
        typing => typing,
    }
}

/// Leave the bar. The applied query stays in effect.
pub fn deactivate(_state: SearchInput) -> SearchInput {
    SearchInput::Idle
}

/// Insert `ch` at the cursor and advance it.
pub fn handle_char_input(state: SearchInput, ch: char) -> SearchInput {
    match state {
        SearchInput::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchInput::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        idle => idle,
    }
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchInput::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor left, saturating at 0.
pub fn handle_cursor_left(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { query, cursor } => SearchInput::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        idle => idle,
    }
}

/// Move the cursor right, saturating at the end of the text.
pub fn handle_cursor_right(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchInput::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        idle => idle,
    }
}

/// Empty the bar, keeping focus.
pub fn clear(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { .. } => SearchInput::Typing {
            query: String::new(),
            cursor: 0,
        },
        idle => idle,
    }
}

// ===== Tests =====
