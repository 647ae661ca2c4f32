use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub track_list: Rect,
    pub now_playing: Rect,
    pub seek_bar: Rect,
    pub volume_bar: Rect,
    pub help_line: Rect,
    pub notifications: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, notification_count: usize) -> Self {
        let [track_list, now_playing, seek_bar, volume_bar, help_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        // Stacked in the top-right corner, one bordered box per message
        let width = area.width.min(48);
        let height = (notification_count as u16 * 3).min(area.height);
        let notifications = Rect::new(area.x + area.width - width, area.y, width, height);

        AppLayout {
            track_list,
            now_playing,
            seek_bar,
            volume_bar,
            help_line,
            notifications,
        }
    }
}
