//! Search input widget for rendering the search bar.

use super::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown when the query is empty and the bar is not focused.
pub const SEARCH_PLACEHOLDER: &str = "Search by email, phone or postcode";

/// Search input widget.
///
/// The query is edited at its end only, so the cursor is drawn after the
/// last character while the bar has focus.
pub struct SearchInput<'a> {
    query: &'a str,
    focused: bool,
    styles: &'a Styles,
}

impl<'a> SearchInput<'a> {
    /// Input showing `query`, or the placeholder when empty.
    pub fn new(query: &'a str, focused: bool, styles: &'a Styles) -> Self {
        Self {
            query,
            focused,
            styles,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.focused {
            Line::from(vec![
                Span::raw(self.query.to_string()),
                Span::styled(
                    " ",
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else if self.query.is_empty() {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, self.styles.muted))
        } else {
            Line::from(self.query.to_string())
        };

        let title = if self.focused { "Search (typing)" } else { "Search" };
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(self.styles.border_for(self.focused)),
            )
            .render(area, buf);
    }
}
