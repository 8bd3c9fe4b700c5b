//! Roster state (pure).
//!
//! All state transitions are plain method calls testable without the TUI.
//! [`CollectionManager`] is the only type the shell talks to; the other
//! modules are its parts.

pub mod collection;
pub mod edit;
pub mod filter;
pub mod pagination;
pub mod search_input;
pub mod selection;
pub mod store;

// Re-export for convenience
pub use collection::CollectionManager;
pub use edit::{EditDraft, EditField};
pub use filter::FilterOutcome;
pub use pagination::{PAGE_SIZE, PageWindow, Pagination};
pub use search_input::SearchInput;
pub use selection::{SelectAllMode, Selection};
pub use store::RecordStore;
