use super::DUR_WIDTH;
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

const TIMER_GUTTER: u16 = DUR_WIDTH + 2;

pub struct SeekBar;

impl SeekBar {
    fn split(area: Rect) -> [Rect; 3] {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(TIMER_GUTTER),
                Constraint::Fill(1),
                Constraint::Length(TIMER_GUTTER),
            ])
            .areas(area)
    }

    pub fn gauge_area(area: Rect) -> Rect {
        Self::split(area)[1]
    }
}

impl StatefulWidget for SeekBar {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [elapsed, gauge, total] = Self::split(area);

        // LineGauge panics outside of 0..=1
        let ratio = state.get_progress_ratio().clamp(0.0, 1.0);

        LineGauge::default()
            .filled_style(ACCENT)
            .unfilled_style(MUTED)
            .label("")
            .ratio(ratio)
            .render(gauge, buf);

        Text::from(state.get_elapsed_display())
            .fg(Color::DarkGray)
            .centered()
            .render(elapsed, buf);

        Text::from(state.get_duration_display())
            .fg(Color::DarkGray)
            .centered()
            .render(total, buf);
    }
}
