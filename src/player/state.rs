/// Playback flags owned by `PlaybackController`. Read-only to everyone else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    pub(super) is_playing: bool,
    pub(super) is_seeking: bool,
    pub(super) current_track_index: usize,
    pub(super) volume: f32,
}

impl PlaybackState {
    pub(super) fn new(current_track_index: usize, volume: f32) -> Self {
        PlaybackState {
            is_playing: false,
            is_seeking: false,
            current_track_index,
            volume,
        }
    }

    /// True only once the transport has confirmed playback.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_seeking(&self) -> bool {
        self.is_seeking
    }

    pub fn current_track_index(&self) -> usize {
        self.current_track_index
    }

    /// Normalized to `0.0..=1.0`.
    pub fn volume(&self) -> f32 {
        self.volume
    }
}
