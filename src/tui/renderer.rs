use super::{AppLayout, HelpLine, NowPlaying, SeekBar, Toasts, TrackList, VolumeBar};
use crate::ui_state::UiState;
use ratatui::{
    Frame,
    widgets::{Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area(), state.notifications.len());

    // Mouse hit-testing reads these back
    state.display_state.progress_area = SeekBar::gauge_area(layout.seek_bar);
    state.display_state.volume_area = VolumeBar::gauge_area(layout.volume_bar);

    TrackList.render(layout.track_list, f.buffer_mut(), state);
    NowPlaying.render(layout.now_playing, f.buffer_mut(), state);
    SeekBar.render(layout.seek_bar, f.buffer_mut(), state);
    VolumeBar.render(layout.volume_bar, f.buffer_mut(), state);
    HelpLine.render(layout.help_line, f.buffer_mut());

    if !state.notifications.is_empty() {
        Clear.render(layout.notifications, f.buffer_mut());
        Toasts.render(layout.notifications, f.buffer_mut(), state);
    }
}
