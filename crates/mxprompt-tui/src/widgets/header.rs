//! Header bar widget
//!
//! Logo badge and product name on the left, avatar badge on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const PRODUCT_NAME: &str = "MX Prompt Designer";
pub const SUBTITLE: &str = "Agent Orchestration v1.0";

/// Main header showing the product title and the avatar badge
pub struct MainHeader {
    avatar_initial: char,
}

impl MainHeader {
    pub fn new(avatar_initial: char) -> Self {
        Self { avatar_initial }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(" M ", styles::badge()),
            Span::raw(" "),
            Span::styled(PRODUCT_NAME, styles::text_bold()),
            Span::raw("  "),
            Span::styled(SUBTITLE, styles::text_muted()),
        ]);
        let left_width = left_line.width() as u16;

        let avatar_line = Line::from(vec![
            Span::styled(format!(" {} ", self.avatar_initial), styles::badge()),
            Span::raw(" "),
        ]);
        let avatar_width = avatar_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the avatar when it does not collide with the title
        if left_width + avatar_width < inner.width {
            let avatar_x = inner.x + inner.width - avatar_width;
            buf.set_line(avatar_x, inner.y, &avatar_line, avatar_width);
        }
    }
}
