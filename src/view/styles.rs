//! Roster styling.
//!
//! Every widget takes its styles from one [`Palette`], so turning colors off
//! is a single switch. Without colors the palette falls back to modifiers
//! (bold, reversed, underline) so the cursor and selection stay visible.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Resolved from `--no-color`, `NO_COLOR` and the `no_color` config key by
/// the config layer; this type only carries the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors on unless `no_color` is set.
    pub fn from_no_color(no_color: bool) -> Self {
        Self { enabled: !no_color }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ===== Palette =====

/// Styles for every roster widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Table header and section titles.
    pub header: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Checkbox of a selected row.
    pub selected: Style,
    /// Row in editing.
    pub editing: Style,
    /// Field receiving typed characters in the focused edit row.
    pub focused_field: Style,
    /// Hints, placeholders and disabled controls.
    pub muted: Style,
    /// Current page bubble.
    pub current_page: Style,
    /// Admin role text.
    pub admin: Style,
    /// Enabled delete button.
    pub danger: Style,
    /// Borders of the focused widget.
    pub focus_border: Style,
    /// Blocking alert frame.
    pub alert: Style,
}

impl Palette {
    /// Build the palette for the given color setting.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                cursor_row: Style::default().bg(Color::DarkGray),
                selected: Style::default().fg(Color::Green),
                editing: Style::default().fg(Color::Yellow),
                focused_field: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                current_page: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                admin: Style::default().fg(Color::Magenta),
                danger: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                focus_border: Style::default().fg(Color::Cyan),
                alert: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                cursor_row: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default().add_modifier(Modifier::BOLD),
                editing: Style::default().add_modifier(Modifier::ITALIC),
                focused_field: Style::default().add_modifier(Modifier::UNDERLINED),
                muted: Style::default().add_modifier(Modifier::DIM),
                current_page: Style::default().add_modifier(Modifier::REVERSED),
                admin: Style::default(),
                danger: Style::default().add_modifier(Modifier::BOLD),
                focus_border: Style::default().add_modifier(Modifier::BOLD),
                alert: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

// ===== Tests =====
