use super::{DisplayState, NotificationStack};
use crate::{
    Catalog, Track,
    player::{DisplaySurface, Notification},
};
use std::{sync::Arc, time::Instant};

/// What the terminal shows, as last told by the controller.
pub struct UiState {
    catalog: Arc<Catalog>,

    now_playing: Option<Track>,
    elapsed_display: String,
    duration_display: String,
    progress_ratio: f64,
    volume_ratio: f32,
    is_playing: bool,
    is_favorite: bool,

    pub(crate) notifications: NotificationStack,
    pub(crate) display_state: DisplayState,
}

impl UiState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        UiState {
            catalog,

            now_playing: None,
            elapsed_display: String::from("00:00"),
            duration_display: String::from("00:00"),
            progress_ratio: 0.0,
            volume_ratio: 0.0,
            is_playing: false,
            is_favorite: false,

            notifications: NotificationStack::default(),
            display_state: DisplayState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get_now_playing(&self) -> Option<&Track> {
        self.now_playing.as_ref()
    }

    pub fn get_elapsed_display(&self) -> &str {
        &self.elapsed_display
    }

    pub fn get_duration_display(&self) -> &str {
        &self.duration_display
    }

    pub fn get_progress_ratio(&self) -> f64 {
        self.progress_ratio
    }

    pub fn get_volume_ratio(&self) -> f32 {
        self.volume_ratio
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn set_error(&mut self, e: anyhow::Error) {
        self.notify(Notification::error(e.to_string()));
    }

    pub fn prune_notifications(&mut self) {
        self.notifications.prune(Instant::now());
    }
}

impl DisplaySurface for UiState {
    fn render_track(&mut self, index: usize, track: &Track) {
        self.display_state.track_pos.select(Some(index));
        self.now_playing = Some(track.clone());
    }

    fn render_elapsed(&mut self, elapsed: &str) {
        self.elapsed_display.clear();
        self.elapsed_display.push_str(elapsed);
    }

    fn render_total(&mut self, total: &str) {
        self.duration_display.clear();
        self.duration_display.push_str(total);
    }

    fn render_position(&mut self, ratio: f64) {
        self.progress_ratio = ratio;
    }

    fn render_volume(&mut self, ratio: f32) {
        self.volume_ratio = ratio;
    }

    fn render_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    fn render_favorite(&mut self, favorite: bool) {
        self.is_favorite = favorite;
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceRef;

    #[test]
    fn duplicate_entries_highlight_the_rendered_row() {
        let twin = Track::new("Encore", "Band", SourceRef::new("encore.mp3"));
        let catalog = Catalog::new(vec![twin.clone(), twin.clone()], 0).unwrap();
        let mut ui = UiState::new(Arc::new(catalog));

        ui.render_track(1, &twin);
        assert_eq!(ui.display_state.track_pos.selected(), Some(1));
        assert_eq!(ui.get_now_playing(), Some(&twin));
    }
}
