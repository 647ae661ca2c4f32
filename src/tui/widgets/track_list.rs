use crate::{
    tui::{ACCENT, SURFACE},
    ui_state::UiState,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Padding, StatefulWidget},
};

pub struct TrackList;

impl StatefulWidget for TrackList {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let items: Vec<ListItem> = state
            .catalog()
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, track)| {
                ListItem::new(Line::from_iter([
                    Span::from(format!("{:>2}  ", i + 1)).fg(Color::DarkGray),
                    Span::from(track.title().to_string()).fg(Color::White),
                    Span::from(format!("  {}", track.artist())).fg(Color::DarkGray),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(SURFACE))
                    .title(" Tracks ")
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(Style::new().fg(ACCENT).bold())
            .highlight_symbol("» ");

        StatefulWidget::render(list, area, buf, &mut state.display_state.track_pos);
    }
}
