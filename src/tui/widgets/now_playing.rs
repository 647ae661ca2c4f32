use super::{ARTIST_LIMIT, PAUSE_ICON, PLAY_ICON};
use crate::{
    truncate_at_last_space,
    tui::{ACCENT, MUTED},
    ui_state::UiState,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span, Text},
    widgets::{StatefulWidget, Widget},
};

pub struct NowPlaying;

impl StatefulWidget for NowPlaying {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some(track) = state.get_now_playing() else {
            return;
        };

        let icon = match state.is_playing() {
            true => Span::from(format!("{PLAY_ICON} ")).fg(ACCENT),
            false => Span::from(format!("{PAUSE_ICON} ")).fg(Color::White),
        };

        let heart = match state.is_favorite() {
            true => Span::from("  ♥").fg(ACCENT),
            false => Span::from("  ♡").fg(Color::White),
        };

        let title = Line::from_iter([icon, Span::from(track.title().to_string()).bold(), heart]);
        let artist = Line::from(truncate_at_last_space(track.artist(), ARTIST_LIMIT)).fg(MUTED);

        Text::from(vec![title, artist]).centered().render(area, buf);
    }
}
