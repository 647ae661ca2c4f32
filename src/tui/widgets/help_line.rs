use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    text::Line,
    widgets::Widget,
};

pub struct HelpLine;

impl Widget for HelpLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(
            "space play/pause · ←/→ seek · ↑/↓ volume · 1-9 select · n/p next/prev · l like · q quit",
        )
        .fg(Color::DarkGray)
        .centered()
        .render(area, buf);
    }
}
