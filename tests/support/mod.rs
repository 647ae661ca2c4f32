#![allow(dead_code)]

use encore::{
    Catalog, PlaybackController, SourceRef, Track,
    player::{DisplaySurface, MediaTransport, Notification, PlayRequest, Severity},
};
use std::sync::Arc;

/// Transport that records what it was told and never answers on its own.
/// Tests resolve play requests by feeding events to the controller.
#[derive(Default)]
pub struct RecordingTransport {
    pub loaded: Vec<SourceRef>,
    pub play_requests: usize,
    pub last_request: Option<PlayRequest>,
    pub pause_calls: usize,
    pub paused: bool,
    pub position: f64,
    pub duration: Option<f64>,
    pub volume: f32,
}

impl MediaTransport for RecordingTransport {
    fn load(&mut self, source: &SourceRef) {
        self.loaded.push(source.clone());
        self.paused = true;
        self.position = 0.0;
    }

    fn request_play(&mut self, request: PlayRequest) {
        self.play_requests += 1;
        self.last_request = Some(request);
        self.paused = false;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) {
        self.position = secs;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub track: Option<Track>,
    pub track_index: Option<usize>,
    pub elapsed: String,
    pub total: String,
    pub position: f64,
    pub volume: f32,
    pub playing: bool,
    pub favorite: bool,
    pub notifications: Vec<Notification>,
}

impl RecordingDisplay {
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn render_track(&mut self, index: usize, track: &Track) {
        self.track_index = Some(index);
        self.track = Some(track.clone());
    }

    fn render_elapsed(&mut self, elapsed: &str) {
        self.elapsed = elapsed.to_string();
    }

    fn render_total(&mut self, total: &str) {
        self.total = total.to_string();
    }

    fn render_position(&mut self, ratio: f64) {
        self.position = ratio;
    }

    fn render_volume(&mut self, ratio: f32) {
        self.volume = ratio;
    }

    fn render_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn render_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

pub type TestController = PlaybackController<RecordingTransport, RecordingDisplay>;

pub fn catalog() -> Arc<Catalog> {
    let tracks = vec![
        Track::new("DayLight", "David Kushner", SourceRef::new("daylight.mp3")),
        Track::new("Top 50 - Global", "Various Artists", SourceRef::new("top50.mp3")),
        Track::new("Trending Hits", "Popular Artists", SourceRef::new("trending.mp3")),
    ];
    Arc::new(Catalog::new(tracks, 0).expect("valid catalog"))
}

pub fn controller() -> TestController {
    PlaybackController::new(
        RecordingTransport::default(),
        RecordingDisplay::default(),
        catalog(),
        100.0,
    )
}

/// Controller with a loaded 100 second track.
pub fn loaded_controller() -> TestController {
    let mut c = controller();
    c.on_transport_ready(Some(100.0));
    c
}

/// Controller that is confirmed playing.
pub fn playing_controller() -> TestController {
    let mut c = loaded_controller();
    c.toggle();
    confirm_play(&mut c);
    c
}

/// Answer the most recent play request the way the transport would.
pub fn confirm_play(c: &mut TestController) {
    let request = c.transport().last_request.expect("a play request was sent");
    c.on_play_started(request);
}

pub fn reject_play(c: &mut TestController, reason: &str) {
    let request = c.transport().last_request.expect("a play request was sent");
    c.on_play_rejected(request, reason);
}
