use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PlayerError {
    #[error("No track at position {index} (catalog holds {len})")]
    TrackOutOfRange { index: usize, len: usize },

    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    #[error("Audio file could not be loaded: {0}")]
    LoadFailed(String),
}
