//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for focus and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + input).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the page controls row.
pub const PAGE_CONTROLS_HEIGHT: u16 = 1;

/// Width of the filter sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Width of the success banner, border included.
pub const BANNER_WIDTH: u16 = 36;

/// Height of the success banner, border included.
pub const BANNER_HEIGHT: u16 = 3;

/// Width of the record detail modal.
pub const DETAIL_MODAL_WIDTH: u16 = 64;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

