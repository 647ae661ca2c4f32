use crate::{
    player::Severity,
    tui::{ACCENT, ERROR_RED, SURFACE},
    ui_state::UiState,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

pub struct Toasts;

impl StatefulWidget for Toasts {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let count = state.notifications.len();
        let rows = Layout::vertical(vec![Constraint::Length(3); count]).split(area);

        for (notification, row) in state.notifications.iter().zip(rows.iter()) {
            let bg = match notification.severity {
                Severity::Error => ERROR_RED,
                Severity::Success => ACCENT,
                Severity::Info => SURFACE,
            };

            Paragraph::new(notification.message.as_str())
                .fg(Color::White)
                .bg(bg)
                .block(Block::bordered().border_type(BorderType::Rounded))
                .render(*row, buf);
        }
    }
}
