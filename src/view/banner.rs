//! Success banner overlay, drawn in the top-right corner.

use super::constants::{BANNER_HEIGHT, BANNER_WIDTH};
use super::styles::Styles;
use crate::state::SUCCESS_MESSAGE;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Banner rectangle: top-right of `area`, below the title bar.
pub fn banner_area(area: Rect) -> Rect {
    let width = BANNER_WIDTH.min(area.width);
    let height = BANNER_HEIGHT.min(area.height.saturating_sub(1));
    Rect {
        x: area.x + area.width - width,
        y: area.y + 1.min(area.height),
        width,
        height,
    }
}

/// Draw the success banner over the top-right corner.
pub fn render_banner(frame: &mut Frame, styles: &Styles) {
    let area = banner_area(frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(SUCCESS_MESSAGE)
            .style(styles.banner)
            .centered()
            .block(Block::default().borders(Borders::ALL).style(styles.banner)),
        area,
    );
}
