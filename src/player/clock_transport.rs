use super::{MediaTransport, PlayRequest, TransportEvent};
use crate::domain::SourceRef;
use crossbeam_channel::Sender;
use std::{
    collections::HashMap,
    time::{Duration, Instant},
};
use tracing::debug;

/// What the clock knows about a source it may be asked to load.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SourceProfile {
    pub duration: Option<f64>,
    pub blocked: bool,
}

/// Transport that decodes nothing. It runs a clock over the loaded
/// source's configured length and reports through `events` the way a
/// media element would: metadata on load, progress while running, and
/// play requests answered on the following tick.
pub struct ClockTransport {
    events: Sender<TransportEvent>,
    sources: HashMap<SourceRef, SourceProfile>,

    loaded: Option<SourceProfile>,
    play_requested: Option<PlayRequest>,
    paused: bool,
    position: f64,
    volume: f32,
    last_tick: Option<Instant>,
}

impl ClockTransport {
    pub fn new(events: Sender<TransportEvent>, sources: HashMap<SourceRef, SourceProfile>) -> Self {
        ClockTransport {
            events,
            sources,

            loaded: None,
            play_requested: None,
            paused: true,
            position: 0.0,
            volume: 1.0,
            last_tick: None,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let dt = match self.last_tick.replace(now) {
            Some(prev) => now.saturating_duration_since(prev),
            None => Duration::ZERO,
        };
        self.advance(dt);
    }

    /// Move the clock forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(request) = self.play_requested.take() {
            self.resolve_play(request);
            // Time spent waiting on the request doesn't count as played
            return;
        }

        if self.paused {
            return;
        }

        let Some(duration) = self.duration() else {
            return;
        };

        self.position = (self.position + dt.as_secs_f64()).min(duration);
        self.emit(TransportEvent::Progress(self.position));

        if self.position >= duration {
            self.paused = true;
            self.emit(TransportEvent::Ended);
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    fn resolve_play(&mut self, request: PlayRequest) {
        let refusal = match (self.loaded, self.duration()) {
            (None, _) => Some("no playable source loaded"),
            (Some(_), None) => Some("source failed to load"),
            (Some(SourceProfile { blocked: true, .. }), _) => Some("playback not allowed for source"),
            (Some(_), Some(_)) => None,
        };

        let event = match refusal {
            Some(reason) => TransportEvent::PlayRejected(request, String::from(reason)),
            None => {
                self.paused = false;
                TransportEvent::PlayStarted(request)
            }
        };

        self.emit(event);
    }

    fn emit(&self, event: TransportEvent) {
        // The receiving side only goes away on shutdown
        let _ = self.events.send(event);
    }
}

impl MediaTransport for ClockTransport {
    fn load(&mut self, source: &SourceRef) {
        self.paused = true;
        self.play_requested = None;
        self.position = 0.0;

        let profile = self.sources.get(source).copied();
        self.loaded = profile;
        debug!(%source, ?profile, "loaded source");

        match self.duration() {
            Some(d) => self.emit(TransportEvent::MetadataReady(Some(d))),
            None => self.emit(TransportEvent::Error(format!("cannot decode {source}"))),
        }
    }

    fn request_play(&mut self, request: PlayRequest) {
        self.play_requested = Some(request);
    }

    fn pause(&mut self) {
        self.play_requested = None;
        self.paused = true;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) {
        let upper = self.duration().unwrap_or(0.0);
        self.position = secs.max(0.0).min(upper.max(0.0));
    }

    fn duration(&self) -> Option<f64> {
        self.loaded
            .and_then(|p| p.duration)
            .filter(|d| d.is_finite() && *d > 0.0)
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
