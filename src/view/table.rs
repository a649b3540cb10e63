//! Record table widget.
//!
//! Draws the visible page only. Column text is truncated to the laid-out
//! column width with a trailing ellipsis so rows never wrap.

use super::styles::Styles;
use crate::model::Record;
use crate::query::{SortColumn, SortState};
use crate::state::{AppState, FocusPane, HeaderCheckbox};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown in place of rows when the page is empty.
pub const EMPTY_TABLE_MESSAGE: &str = "No providers match the current search and filters";

const ELLIPSIS: char = '…';

/// Widths for the checkbox column followed by [`SortColumn::ALL`].
fn column_constraints() -> [Constraint; 8] {
    [
        Constraint::Length(3),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Fill(2),
        Constraint::Length(11),
        Constraint::Length(10),
    ]
}

/// Record table for the visible page.
pub struct RecordTable<'a> {
    state: &'a AppState,
    styles: &'a Styles,
}

impl<'a> RecordTable<'a> {
    /// Table for the state's visible page.
    pub fn new(state: &'a AppState, styles: &'a Styles) -> Self {
        Self { state, styles }
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::Table;
        let title = format!(
            " Providers: {} matching, {} selected ",
            self.state.matching_count(),
            self.state.selection().len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(self.styles.border_for(focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let constraints = column_constraints();
        let widths: Vec<u16> = Layout::horizontal(constraints)
            .spacing(1)
            .split(inner)
            .iter()
            .map(|r| r.width)
            .collect();

        let header = header_row(self.state.header_checkbox(), self.state.sort(), &widths, self.styles);
        let records = self.state.visible_records();
        let rows: Vec<Row> = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = record_row(record, self.state.is_selected(&record.id), &widths, self.styles);
                if i == self.state.cursor() {
                    row.style(self.styles.cursor_row)
                } else {
                    row
                }
            })
            .collect();

        Widget::render(
            Table::new(rows, constraints).header(header).column_spacing(1),
            inner,
            buf,
        );

        if records.is_empty() && inner.height > 2 {
            let message_area = Rect {
                y: inner.y + 2,
                height: 1,
                ..inner
            };
            Paragraph::new(Line::from(Span::styled(EMPTY_TABLE_MESSAGE, self.styles.muted)))
                .centered()
                .render(message_area, buf);
        }
    }
}

fn header_row(
    checkbox: HeaderCheckbox,
    sort: SortState,
    widths: &[u16],
    styles: &Styles,
) -> Row<'static> {
    let mut cells = vec![Cell::from(header_checkbox_symbol(checkbox)).style(styles.selected_marker)];
    for (i, column) in SortColumn::ALL.into_iter().enumerate() {
        let width = widths.get(i + 1).copied().unwrap_or(0);
        let text = truncate_to_width(&column_title(column, sort), width as usize);
        let style = if column == sort.column {
            styles.active_sort
        } else {
            styles.table_header
        };
        cells.push(Cell::from(text).style(style));
    }
    Row::new(cells).bottom_margin(1)
}

fn record_row(record: &Record, selected: bool, widths: &[u16], styles: &Styles) -> Row<'static> {
    let marker = if selected { "[x]" } else { "[ ]" };
    let mut cells = vec![Cell::from(marker).style(styles.selected_marker)];
    for (i, column) in SortColumn::ALL.into_iter().enumerate() {
        let width = widths.get(i + 1).copied().unwrap_or(0);
        let text = truncate_to_width(cell_text(record, column), width as usize);
        let cell = Cell::from(text);
        cells.push(if column == SortColumn::Status {
            cell.style(styles.status(record.status))
        } else {
            cell
        });
    }
    Row::new(cells)
}

/// Raw text of one column for one record.
pub fn cell_text(record: &Record, column: SortColumn) -> &str {
    match column {
        SortColumn::Email => &record.email,
        SortColumn::PhoneNumber => &record.phone_number,
        SortColumn::Postcode => &record.postcode,
        SortColumn::VendorType => record.vendor_type.label(),
        SortColumn::ServiceOffering => &record.service_offering,
        SortColumn::SignupDate => &record.signup_date,
        SortColumn::Status => record.status.display_label(),
    }
}

/// Header checkbox glyph.
pub fn header_checkbox_symbol(state: HeaderCheckbox) -> &'static str {
    match state {
        HeaderCheckbox::Checked => "[x]",
        HeaderCheckbox::Indeterminate => "[-]",
        HeaderCheckbox::Unchecked => "[ ]",
    }
}

/// Header label, with the direction arrow on the active column.
pub fn column_title(column: SortColumn, sort: SortState) -> String {
    if column == sort.column {
        format!("{} {}", column.label(), sort.direction.arrow())
    } else {
        column.label().to_string()
    }
}

/// Cut `text` to at most `max_width` display columns.
///
/// Truncated text ends in `…`, which counts toward the width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;
    use crate::source::RecordStore;
    use crate::test_fixtures::scenario;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let styles = Styles::with_color_config(ColorConfig::enabled());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(RecordTable::new(state, &styles), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("N1", 5), "N1");
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }

    #[test]
    fn truncate_adds_ellipsis_within_width() {
        let out = truncate_to_width("someone@example.com", 8);
        assert_eq!(out, "someone…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn truncate_respects_wide_characters() {
        // each ideograph is two columns wide
        let out = truncate_to_width("東京都港区", 6);
        assert_eq!(out, "東京…");
        assert!(out.width() <= 6);
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn header_checkbox_symbols() {
        assert_eq!(header_checkbox_symbol(HeaderCheckbox::Checked), "[x]");
        assert_eq!(header_checkbox_symbol(HeaderCheckbox::Indeterminate), "[-]");
        assert_eq!(header_checkbox_symbol(HeaderCheckbox::Unchecked), "[ ]");
    }

    #[test]
    fn active_column_title_has_arrow() {
        let sort = SortState::new(SortColumn::Postcode, SortDirection::Asc);
        assert_eq!(column_title(SortColumn::Postcode, sort), "Postcode ▲");
        assert_eq!(column_title(SortColumn::Email, sort), "Email");
    }

    #[test]
    fn cell_text_renders_empty_status_as_dash() {
        let records = scenario();
        assert_eq!(cell_text(&records[2], SortColumn::Status), "-");
        assert_eq!(cell_text(&records[0], SortColumn::VendorType), "Independent");
    }

    #[test]
    fn table_renders_rows_in_display_order() {
        let state = AppState::new(RecordStore::new(scenario()).unwrap());
        let lines = render(&state, 140, 10);
        let row_of = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();
        assert!(row_of("d@example.com") < row_of("a@example.com"));
        assert!(row_of("a@example.com") < row_of("c@example.com"));
        assert!(row_of("c@example.com") < row_of("b@example.com"));
        assert!(lines.iter().any(|l| l.contains("Signup Date ▼")));
        assert!(lines[0].contains("4 matching, 0 selected"));
    }

    #[test]
    fn selected_rows_show_marker() {
        let mut state = AppState::new(RecordStore::new(scenario()).unwrap());
        state.toggle_cursor_row();
        let lines = render(&state, 140, 10);
        let d_row = lines.iter().find(|l| l.contains("d@example.com")).unwrap();
        assert!(d_row.contains("[x]"));
        let header = lines.iter().find(|l| l.contains("Email")).unwrap();
        assert!(header.contains("[-]"));
    }

    #[test]
    fn empty_page_shows_message() {
        let state = AppState::new(RecordStore::new(scenario()).unwrap()).with_search("nobody");
        let lines = render(&state, 140, 10);
        assert!(lines.iter().any(|l| l.contains(EMPTY_TABLE_MESSAGE)));
    }
}
