mod action;

pub use action::{handle_key_event, handle_mouse_event, next_event};

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

#[derive(Debug, PartialEq)]
pub enum Action {
    // Player Controls
    TogglePause,
    SeekForward,
    SeekBack,
    VolumeUp,
    VolumeDown,

    // Scrub gesture on the progress bar
    ScrubStart(f64),
    ScrubMove(f64),
    ScrubEnd,
    SetVolume(f32),

    // Tracks
    SelectTrack(usize),
    NextTrack,
    PrevTrack,
    ToggleFavorite,

    QUIT,
}
