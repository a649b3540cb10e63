//! TUI rendering and terminal management (impure shell)

mod banner;
pub mod constants;
mod detail_modal;
mod help;
mod helpers;
mod layout;
mod pagination;
mod search_input;
mod sidebar;
mod styles;
mod table;

pub use banner::render_banner;
pub use detail_modal::{detail_lines, render_detail_modal, DEFAULT_LOCATION, NO_NOTES, UNNAMED_PROVIDER};
pub use help::render_help_overlay;
pub use layout::{focus_label, render_layout, status_hint};
pub use pagination::{page_controls_label, PageControls};
pub use search_input::{SearchInput, SEARCH_PLACEHOLDER};
pub use sidebar::{field_value, FilterSidebar, ANY_VALUE};
pub use styles::{ColorConfig, Styles};
pub use table::{
    cell_text, column_title, header_checkbox_symbol, truncate_to_width, RecordTable,
    EMPTY_TABLE_MESSAGE,
};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::KeyAction;
use crate::source::RecordStore;
use crate::state::{
    handle_detail_modal_key, handle_filter_sidebar_key, handle_search_key, AppState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: Styles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, color: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: Styles::with_color_config(color),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Between key events the loop
    /// wakes on a timer so the success banner can expire on its own.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            } else if self.app_state.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Detail modal captures keys while open
        if handle_detail_modal_key(&mut self.app_state, key, now) {
            return false;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        // Focused text inputs read raw keys before bindings
        if !self.app_state.help_visible
            && (handle_search_key(&mut self.app_state, key)
                || handle_filter_sidebar_key(&mut self.app_state, key, now))
        {
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // Help overlay blocks everything except closing it and quitting
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        debug!(?action, "Key action");
        self.dispatch(action, now)
    }

    /// Apply a bound action. Returns true if app should quit.
    fn dispatch(&mut self, action: KeyAction, now: Instant) -> bool {
        let state = &mut self.app_state;
        match action {
            KeyAction::CursorUp => state.cursor_up(),
            KeyAction::CursorDown => state.cursor_down(),
            KeyAction::PreviousPage => state.previous_page(),
            KeyAction::NextPage => state.next_page(),
            KeyAction::JumpToPage(page) => {
                if state.direct_jump_pages().contains(&page) {
                    state.on_page_change(page);
                }
            }
            KeyAction::ToggleRowSelection => state.toggle_cursor_row(),
            KeyAction::ToggleSelectAllVisible => state.toggle_select_all_visible(),
            KeyAction::SortBy(column) => state.on_sort_column(column),
            KeyAction::OpenDetail => state.open_cursor_detail(),
            KeyAction::Close => {}
            KeyAction::StartSearch => state.focus_search(),
            KeyAction::FocusFilters => state.focus_filters(),
            KeyAction::ToggleFilters => state.toggle_filters(),
            KeyAction::ApplyFilters => state.on_apply_filters(now),
            KeyAction::ClearFilters => state.on_clear_filters(now),
            KeyAction::Help => state.toggle_help(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let now = Instant::now();
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles, now);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: Styles::with_color_config(ColorConfig::enabled()),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of command-line arguments that shape the dashboard's first
/// frame rather than the loaded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Initial search query (`--search`).
    pub search: Option<String>,

    /// Color output, from `--no-color` and `NO_COLOR`.
    pub color: ColorConfig,
}

impl CliArgs {
    /// Create CLI arguments from a search query and color config.
    pub fn new(search: Option<String>, color: ColorConfig) -> Self {
        Self { search, color }
    }
}

/// Build the starting state from the loaded store, config, and CLI args.
pub fn initial_state(store: RecordStore, config: &ResolvedConfig, args: &CliArgs) -> AppState {
    let state = AppState::new(store)
        .with_sort(config.sort)
        .with_banner_duration(config.banner_duration)
        .with_filters_visible(config.show_filters);
    match &args.search {
        Some(query) => state.with_search(query.clone()),
        None => state,
    }
}

/// Initialize and run the TUI application over a loaded store
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    store: RecordStore,
    config: &ResolvedConfig,
    args: CliArgs,
) -> Result<(), TuiError> {
    let state = initial_state(store, config, &args);
    let mut app = TuiApp::new(state, args.color)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
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
#[path = "tui_app_tests.rs"]
mod tests;
