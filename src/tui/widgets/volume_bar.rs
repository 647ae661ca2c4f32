use crate::{
    tui::{ACCENT, MUTED},
    ui_state::UiState,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    text::Text,
    widgets::{LineGauge, StatefulWidget, Widget},
};

const VOLUME_WIDTH: u16 = 24;

pub struct VolumeBar;

impl VolumeBar {
    fn split(area: Rect) -> [Rect; 4] {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(6),
                Constraint::Length(VOLUME_WIDTH),
                Constraint::Length(6),
            ])
            .areas(area)
    }

    pub fn gauge_area(area: Rect) -> Rect {
        Self::split(area)[2]
    }
}

impl StatefulWidget for VolumeBar {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [_, label, gauge, percent] = Self::split(area);
        let ratio = state.get_volume_ratio().clamp(0.0, 1.0);

        Text::from("vol").fg(Color::DarkGray).render(label, buf);

        LineGauge::default()
            .filled_style(ACCENT)
            .unfilled_style(MUTED)
            .label("")
            .ratio(ratio as f64)
            .render(gauge, buf);

        Text::from(format!("{:>3}%", (ratio * 100.0).round() as u8))
            .fg(Color::DarkGray)
            .right_aligned()
            .render(percent, buf);
    }
}
