//! Dashboard styling configuration.
//!
//! All colors come from [`Styles`], so `--no-color` and `NO_COLOR` can turn
//! them off in one place.

use crate::model::Status;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, ignoring the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Whether styles may use colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Styles =====

/// Styles for every dashboard element.
///
/// Modifiers (bold, reversed) are kept when colors are off so the cursor
/// row and focus stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Header bar and pane titles.
    pub title: Style,
    /// Table column headers.
    pub table_header: Style,
    /// Header of the column the table is sorted by.
    pub active_sort: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Checked row checkbox.
    pub selected_marker: Style,
    /// Border of the pane with keyboard focus.
    pub focused_border: Style,
    /// Border of unfocused panes.
    pub border: Style,
    /// Placeholders, hints, and disabled controls.
    pub muted: Style,
    /// Key names in hints and help.
    pub key_hint: Style,
    /// Success banner.
    pub banner: Style,
    /// Sidebar buttons.
    pub button: Style,
    /// Sidebar button under the cursor.
    pub focused_button: Style,
    /// `Onboarded` status cells.
    pub onboarded: Style,
    /// `Rejected` status cells.
    pub rejected: Style,
}

impl Styles {
    /// Palette for `config`. Without colors only modifiers remain.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        if !config.colors_enabled() {
            return Self {
                title: bold,
                table_header: bold,
                active_sort: bold.add_modifier(Modifier::UNDERLINED),
                cursor_row: reversed,
                selected_marker: bold,
                focused_border: bold,
                border: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
                key_hint: bold,
                banner: bold,
                button: Style::default(),
                focused_button: reversed,
                onboarded: Style::default(),
                rejected: Style::default(),
            };
        }

        Self {
            title: bold.fg(Color::Cyan),
            table_header: bold.fg(Color::White),
            active_sort: bold.fg(Color::Yellow),
            cursor_row: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            selected_marker: bold.fg(Color::Green),
            focused_border: Style::default().fg(Color::Cyan),
            border: Style::default().fg(Color::Gray),
            muted: Style::default().fg(Color::DarkGray),
            key_hint: bold.fg(Color::Yellow),
            banner: bold.fg(Color::Black).bg(Color::Green),
            button: Style::default().fg(Color::White).bg(Color::DarkGray),
            focused_button: bold.fg(Color::Black).bg(Color::Cyan),
            onboarded: Style::default().fg(Color::Green),
            rejected: Style::default().fg(Color::Red),
        }
    }

    /// Style for a status cell.
    pub fn status(&self, status: Status) -> Style {
        match status {
            Status::Onboarded => self.onboarded,
            Status::Rejected => self.rejected,
            Status::Empty => self.muted,
        }
    }

    /// Border style for a pane, depending on focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
