//! Small line builders shared by the overlays.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Blank spacer line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `  Label: value` with the label in `label_style`.
pub fn key_value_line(label: &str, value: impl Into<String>, label_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), label_style),
        Span::raw(value.into()),
    ])
}
