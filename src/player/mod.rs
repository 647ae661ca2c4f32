mod clock_transport;
mod controller;
mod error;
mod state;

pub use clock_transport::{ClockTransport, SourceProfile};
pub use controller::PlaybackController;
pub use error::PlayerError;
pub use state::PlaybackState;

use crate::domain::{SourceRef, Track};

/// Lifecycle callbacks a transport delivers after the fact.
#[derive(Clone, Debug, PartialEq)]
pub enum TransportEvent {
    MetadataReady(Option<f64>),
    Progress(f64),
    Ended,
    Error(String),

    // Resolution of an earlier `request_play`, tagged with its request
    PlayStarted(PlayRequest),
    PlayRejected(PlayRequest, String),
}

/// Identifies one play attempt. The transport echoes it back in the
/// event that resolves the attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayRequest(pub u64);

/// The media engine behind the controller.
///
/// `request_play` only starts an attempt. Whether it worked arrives later
/// as `TransportEvent::PlayStarted` or `TransportEvent::PlayRejected`
/// carrying the same `PlayRequest`. Loading a new source may abandon an
/// outstanding attempt; its answer can still arrive, or never arrive.
pub trait MediaTransport {
    fn load(&mut self, source: &SourceRef);
    fn request_play(&mut self, request: PlayRequest);
    fn pause(&mut self);
    fn position(&self) -> f64;
    fn set_position(&mut self, secs: f64);
    fn duration(&self) -> Option<f64>;
    fn set_volume(&mut self, level: f32);
    fn is_paused(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Notification {
            severity,
            message: message.into(),
        }
    }
}

/// Everything the controller can ask a front-end to show.
/// Ratios are already clamped to `0.0..=1.0`.
pub trait DisplaySurface {
    /// `index` is the track's position in the catalog.
    fn render_track(&mut self, index: usize, track: &Track);
    fn render_elapsed(&mut self, elapsed: &str);
    fn render_total(&mut self, total: &str);
    fn render_position(&mut self, ratio: f64);
    fn render_volume(&mut self, ratio: f32);
    fn render_playing(&mut self, playing: bool);
    fn render_favorite(&mut self, favorite: bool);
    fn notify(&mut self, notification: Notification);
}
