//! View state controller (pure).
//!
//! All state transitions are synchronous methods testable without a TUI.
//! Key handlers translate crossterm events into controller intents for the
//! pane or overlay that owns input.

pub mod app_state;
pub mod banner;
pub mod detail_modal;
pub mod detail_modal_handler;
pub mod filter_form;
pub mod filter_sidebar_handler;
pub mod record_action;
pub mod search_input_handler;
pub mod selection;
pub mod sidebar;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use banner::{Banner, DEFAULT_BANNER_DURATION, SUCCESS_MESSAGE};
pub use detail_modal::DetailModalState;
pub use detail_modal_handler::handle_detail_modal_key;
pub use filter_form::FilterForm;
pub use filter_sidebar_handler::handle_filter_sidebar_key;
pub use record_action::RecordAction;
pub use search_input_handler::handle_search_key;
pub use selection::{HeaderCheckbox, Selection};
pub use sidebar::{SidebarItem, SidebarState};
