//! Page controls row: previous/next arrows, direct-jump pages, position.

use super::styles::Styles;
use crate::query::direct_jump_pages;
use crate::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Plain-text form of the page controls.
///
/// The current page is bracketed. Only the fixed direct-jump window is
/// listed, so later pages appear in the position text but not as buttons.
pub fn page_controls_label(current: usize, total: usize) -> String {
    let jumps: Vec<String> = direct_jump_pages(total)
        .map(|page| {
            if page == current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    format!("< {} >  Page {current} of {total}", jumps.join(" "))
}

/// Page arrows, direct-jump buttons, and the page count.
///
/// Arrows are muted where navigation is disabled.
pub struct PageControls<'a> {
    state: &'a AppState,
    styles: &'a Styles,
}

impl<'a> PageControls<'a> {
    /// Controls for the state's current page.
    pub fn new(state: &'a AppState, styles: &'a Styles) -> Self {
        Self { state, styles }
    }
}

impl Widget for PageControls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let current = self.state.current_page();
        let arrow = |enabled: bool| {
            if enabled {
                self.styles.key_hint
            } else {
                self.styles.muted
            }
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled("<", arrow(self.state.can_go_previous())),
        ];
        for page in self.state.direct_jump_pages() {
            spans.push(Span::raw(" "));
            if page == current {
                spans.push(Span::styled(format!("[{page}]"), self.styles.focused_button));
            } else {
                spans.push(Span::raw(page.to_string()));
            }
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(">", arrow(self.state.can_go_next())));
        spans.push(Span::styled(
            format!("  Page {current} of {}", self.state.total_pages()),
            self.styles.muted,
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
