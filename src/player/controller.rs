use super::{
    DisplaySurface, MediaTransport, Notification, PlayRequest, PlaybackState, PlayerError,
    TransportEvent,
};
use crate::{Catalog, Track, format_time};
use std::{collections::HashSet, sync::Arc};
use tracing::{debug, info, warn};

const PLAY_REJECTED_MSG: &str = "Cannot play audio. Please check your playback settings.";
const LOAD_FAILED_MSG: &str = "Audio file could not be loaded";

/// A play request the transport has not answered yet.
struct PendingPlay {
    request: PlayRequest,
    pause_on_resolve: bool,
}

/// Owns playback state and sits between user intents and the transport.
///
/// All calls happen on one thread. The only asynchronous step is starting
/// playback: `play` asks the transport, and `is_playing` flips only when
/// the transport answers with `PlayStarted`. A pause issued before that
/// answer is remembered and applied once it arrives. Answers to any
/// request other than the outstanding one are dropped.
pub struct PlaybackController<T, D> {
    transport: T,
    display: D,
    catalog: Arc<Catalog>,

    state: PlaybackState,
    pending: Option<PendingPlay>,
    next_request: u64,
    position: f64,
    duration: Option<f64>,
    favorites: HashSet<usize>,
}

impl<T: MediaTransport, D: DisplaySurface> PlaybackController<T, D> {
    /// `volume` is on the 0-100 scale and is clamped.
    pub fn new(transport: T, display: D, catalog: Arc<Catalog>, volume: f32) -> Self {
        let initial = catalog.initial();

        let mut controller = PlaybackController {
            transport,
            display,
            catalog,

            state: PlaybackState::new(initial, 0.0),
            pending: None,
            next_request: 0,
            position: 0.0,
            duration: None,
            favorites: HashSet::new(),
        };

        controller.attach(volume);
        controller
    }

    fn attach(&mut self, volume: f32) {
        self.set_volume(volume);
        self.display.render_playing(false);
        self.load_current();
    }

    pub fn handle_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::MetadataReady(d) => self.on_transport_ready(d),
            TransportEvent::Progress(p) => self.on_transport_progress(p),
            TransportEvent::Ended => self.on_transport_ended(),
            TransportEvent::Error(e) => self.on_transport_error(&e),
            TransportEvent::PlayStarted(req) => self.on_play_started(req),
            TransportEvent::PlayRejected(req, r) => self.on_play_rejected(req, &r),
        }
    }
}

// ===============
//    PLAYBACK
// ===============
impl<T: MediaTransport, D: DisplaySurface> PlaybackController<T, D> {
    pub fn toggle(&mut self) {
        match self.is_heading_to_play() {
            true => self.pause(),
            false => self.play(),
        }
    }

    /// Ask the transport to start. No-op if already playing or on the way.
    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }

        if let Some(pending) = &mut self.pending {
            pending.pause_on_resolve = false;
            return;
        }

        self.next_request += 1;
        let request = PlayRequest(self.next_request);

        debug!(track = self.state.current_track_index, ?request, "requesting playback");
        self.pending = Some(PendingPlay {
            request,
            pause_on_resolve: false,
        });
        self.transport.request_play(request);
    }

    pub fn pause(&mut self) {
        if let Some(pending) = &mut self.pending {
            debug!("pause queued behind pending play request");
            pending.pause_on_resolve = true;
            return;
        }

        if self.state.is_playing {
            self.transport.pause();
            self.state.is_playing = false;
            self.display.render_playing(false);
            debug!(position = self.position, "paused");
        }
    }

    fn is_heading_to_play(&self) -> bool {
        match &self.pending {
            Some(pending) => !pending.pause_on_resolve,
            None => self.state.is_playing,
        }
    }

    /// The request this answers is no longer outstanding.
    fn is_stale(&self, request: PlayRequest) -> bool {
        self.pending.as_ref().is_none_or(|p| p.request != request)
    }

    pub fn on_play_started(&mut self, request: PlayRequest) {
        if self.is_stale(request) {
            debug!(?request, "ignoring confirmation of a superseded play request");
            // Nothing wants sound right now, so silence whatever it started
            if self.pending.is_none() && !self.state.is_playing {
                self.transport.pause();
            }
            return;
        }

        let Some(pending) = self.pending.take() else {
            return;
        };

        if pending.pause_on_resolve {
            self.transport.pause();
            self.state.is_playing = false;
            self.display.render_playing(false);
            debug!("play confirmed after pause was requested; pausing");
            return;
        }

        self.state.is_playing = true;
        self.display.render_playing(true);
        info!(track = self.state.current_track_index, "playback started");
    }

    pub fn on_play_rejected(&mut self, request: PlayRequest, reason: &str) {
        if self.is_stale(request) {
            debug!(?request, reason, "ignoring rejection of a superseded play request");
            return;
        }

        self.pending = None;
        self.state.is_playing = false;
        self.display.render_playing(false);

        warn!("{}", PlayerError::PlaybackRejected(reason.to_string()));
        self.display.notify(Notification::error(PLAY_REJECTED_MSG));
    }
}

// ===============
//    TIMELINE
// ===============
impl<T: MediaTransport, D: DisplaySurface> PlaybackController<T, D> {
    pub fn on_transport_ready(&mut self, duration: Option<f64>) {
        let Some(duration) = duration.filter(|d| d.is_finite() && *d > 0.0) else {
            debug!(?duration, "ignoring unusable duration");
            return;
        };

        self.duration = Some(duration);
        self.display.render_total(&format_time(duration));
        self.render_timeline();
    }

    pub fn on_transport_progress(&mut self, position: f64) {
        if self.state.is_seeking || !position.is_finite() {
            return;
        }

        self.position = position;
        self.render_timeline();
    }

    /// End of a playback cycle: back to paused at zero whatever came before.
    pub fn on_transport_ended(&mut self) {
        self.pending = None;
        self.state.is_playing = false;
        self.position = 0.0;
        self.transport.set_position(0.0);

        self.display.render_playing(false);
        self.render_timeline();
        info!(track = self.state.current_track_index, "track ended");
    }

    pub fn on_transport_error(&mut self, detail: &str) {
        warn!("{}", PlayerError::LoadFailed(detail.to_string()));
        self.display.notify(Notification::error(LOAD_FAILED_MSG));
    }

    pub fn seek_begin(&mut self) {
        self.state.is_seeking = true;
    }

    pub fn seek_end(&mut self) {
        self.state.is_seeking = false;
    }

    /// Jump to `position`, clamped to the track. Ignored until a duration is known.
    pub fn seek_to(&mut self, position: f64) {
        let Some(duration) = self.duration else {
            return;
        };

        if position.is_nan() {
            return;
        }

        self.position = position.clamp(0.0, duration);
        self.transport.set_position(self.position);
        self.render_timeline();
    }

    pub fn seek_relative(&mut self, delta: f64) {
        self.seek_to(self.position + delta);
    }

    fn render_timeline(&mut self) {
        let ratio = match self.duration {
            Some(d) => (self.position / d).clamp(0.0, 1.0),
            None => 0.0,
        };

        self.display.render_elapsed(&format_time(self.position));
        self.display.render_position(ratio);
    }
}

// ===============
//     VOLUME
// ===============
impl<T: MediaTransport, D: DisplaySurface> PlaybackController<T, D> {
    /// `level` is on the 0-100 scale and is clamped before it is stored.
    pub fn set_volume(&mut self, level: f32) {
        if level.is_nan() {
            return;
        }

        let volume = level.clamp(0.0, 100.0) / 100.0;
        self.state.volume = volume;
        self.transport.set_volume(volume);
        self.display.render_volume(volume);
    }

    pub fn adjust_volume_relative(&mut self, delta_percent: f32) {
        let current = (self.state.volume * 100.0).round();
        self.set_volume(current + delta_percent);
    }
}

// ===============
//     TRACKS
// ===============
impl<T: MediaTransport, D: DisplaySurface> PlaybackController<T, D> {
    /// Switch tracks. Playback resumes on the new track if it was playing.
    pub fn select_track(&mut self, index: usize) -> Result<(), PlayerError> {
        if index >= self.catalog.len() {
            return Err(PlayerError::TrackOutOfRange {
                index,
                len: self.catalog.len(),
            });
        }

        let resume = self.is_heading_to_play();

        if self.state.is_playing {
            self.transport.pause();
            self.state.is_playing = false;
            self.display.render_playing(false);
        }
        if let Some(dropped) = self.pending.take() {
            debug!(request = ?dropped.request, "abandoning play request for track change");
            self.transport.pause();
        }

        self.state.current_track_index = index;
        self.load_current();

        let title = self.current_track().title().to_string();
        self.display
            .notify(Notification::info(format!("Now playing: {title}")));
        info!(index, %title, "selected track");

        if resume {
            self.play();
        }

        Ok(())
    }

    pub fn select_next(&mut self) -> Result<(), PlayerError> {
        let next = (self.state.current_track_index + 1) % self.catalog.len();
        self.select_track(next)
    }

    pub fn select_prev(&mut self) -> Result<(), PlayerError> {
        let len = self.catalog.len();
        let prev = (self.state.current_track_index + len - 1) % len;
        self.select_track(prev)
    }

    fn load_current(&mut self) {
        let track = self.current_track().clone();

        self.position = 0.0;
        self.duration = None;

        self.display
            .render_track(self.state.current_track_index, &track);
        self.display.render_total(&format_time(0.0));
        let favorite = self.is_favorite(self.state.current_track_index);
        self.display.render_favorite(favorite);
        self.render_timeline();

        self.transport.load(track.source());
        self.transport.set_position(0.0);
    }

    pub fn toggle_favorite(&mut self) {
        let index = self.state.current_track_index;

        let now_favorite = match self.favorites.remove(&index) {
            true => false,
            false => self.favorites.insert(index),
        };

        self.display.render_favorite(now_favorite);
        let message = match now_favorite {
            true => "Added to Liked Songs",
            false => "Removed from Liked Songs",
        };
        self.display.notify(Notification::success(message));
    }
}

// ===============
//    ACCESSORS
// ===============
impl<T, D> PlaybackController<T, D> {
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> &Track {
        &self.catalog.tracks()[self.state.current_track_index]
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_play_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_favorite(&self, index: usize) -> bool {
        self.favorites.contains(&index)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
