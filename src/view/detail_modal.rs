//! Record detail modal.
//!
//! A centered overlay showing one record's contact details, services, and
//! internal notes, with the review actions as key hints along the bottom.

use super::constants::DETAIL_MODAL_WIDTH;
use super::helpers::{empty_line, key_value_line};
use super::styles::{ColorConfig, Styles};
use crate::model::Record;
use crate::state::RecordAction;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Heading when the record has no name.
pub const UNNAMED_PROVIDER: &str = "Unnamed provider";

/// Location when the record has none.
pub const DEFAULT_LOCATION: &str = "United Kingdom";

/// Notes text when the record has none.
pub const NO_NOTES: &str = "No notes added yet";

fn detail_content(record: &Record, styles: &Styles) -> Vec<Line<'static>> {
    let section = |title: &str| Line::from(Span::styled(title.to_string(), styles.title));
    let label = styles.table_header;

    let mut lines = vec![
        Line::from(Span::styled(
            record.name.clone().unwrap_or_else(|| UNNAMED_PROVIDER.to_string()),
            styles.title,
        )),
        Line::from(Span::styled(record.email.clone(), styles.muted)),
        empty_line(),
        section("Contact Information"),
        key_value_line(
            "Email",
            record.contact_email.as_deref().unwrap_or(&record.email),
            label,
        ),
        key_value_line("Phone", record.phone_number.as_str(), label),
        key_value_line(
            "Location",
            record.location.as_deref().unwrap_or(DEFAULT_LOCATION),
            label,
        ),
        Line::from(format!("  Signed up {}", record.signup_date)),
        empty_line(),
        section("Customer Details"),
        key_value_line("Vendor type", record.vendor_type.label().to_lowercase(), label),
        key_value_line("Postcode", record.postcode.as_str(), label),
        Line::from(vec![
            Span::styled("  Status: ", label),
            Span::styled(record.status.display_label(), styles.status(record.status)),
        ]),
        empty_line(),
        section("Services"),
    ];
    lines.extend(
        record
            .service_names()
            .into_iter()
            .map(|name| Line::from(format!("  - {name}"))),
    );
    lines.push(empty_line());
    lines.push(section("Internal Notes"));
    lines.push(match record.internal_notes.as_deref() {
        Some(notes) if !notes.trim().is_empty() => Line::from(format!("  {notes}")),
        _ => Line::from(Span::styled(format!("  {NO_NOTES}"), styles.muted)),
    });
    lines
}

/// Plain text of the modal body, one string per line.
pub fn detail_lines(record: &Record) -> Vec<String> {
    let styles = Styles::with_color_config(ColorConfig::from_env_and_args(true));
    detail_content(record, &styles)
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

fn action_hints(styles: &Styles) -> Line<'static> {
    let mut spans = Vec::new();
    for action in RecordAction::ALL {
        spans.push(Span::styled(format!(" {} ", action.key_hint()), styles.key_hint));
        spans.push(Span::raw(format!("{} ", action.label())));
    }
    spans.push(Span::styled(" Esc ", styles.key_hint));
    spans.push(Span::raw("Close"));
    Line::from(spans)
}

/// Fixed-width box centered in `area`, shrunk to fit.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the detail modal for `record`.
pub fn render_detail_modal(frame: &mut Frame, record: &Record, styles: &Styles) {
    let mut lines = detail_content(record, styles);
    lines.push(empty_line());
    lines.push(action_hints(styles));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_box(DETAIL_MODAL_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Provider Details ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
