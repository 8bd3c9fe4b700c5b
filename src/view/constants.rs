//! Layout dimension constants for TUI rendering.

use crate::state::PAGE_SIZE;

/// Height of the search bar in lines (border + content).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the roster table: one row per page slot, a header and borders.
///
/// The table never changes height, a short page is padded with blank rows.
pub const TABLE_HEIGHT: u16 = PAGE_SIZE as u16 + 3;

/// Height of the navigation row (delete button + page bubbles).
pub const NAVIGATION_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Most page bubbles shown at once; the rest collapse into ellipses.
pub const MAX_PAGE_BUBBLES: usize = 9;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width of the alert popup in columns, capped by the screen width.
pub const ALERT_WIDTH: u16 = 50;

/// Height of the alert popup in lines.
pub const ALERT_HEIGHT: u16 = 7;
