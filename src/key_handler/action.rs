use super::{Action, C, S, X};
use crate::{
    REFRESH_RATE,
    app_core::Encore,
    ui_state::{UiState, ratio_along, ratio_within},
};
use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use KeyCode::*;

pub fn handle_key_event(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) | (X, Char('q')) => Some(Action::QUIT),

        (X, Char(' ')) => Some(Action::TogglePause),
        (X, Right) => Some(Action::SeekForward),
        (X, Left) => Some(Action::SeekBack),
        (X, Up) => Some(Action::VolumeUp),
        (X, Down) => Some(Action::VolumeDown),

        (X, Char('n')) => Some(Action::NextTrack),
        (X, Char('p')) => Some(Action::PrevTrack),
        (X, Char('l')) | (S, Char('L')) => Some(Action::ToggleFavorite),

        (X, Char(c @ '1'..='9')) => c
            .to_digit(10)
            .map(|d| Action::SelectTrack(d as usize - 1)),

        _ => None,
    }
}

pub fn handle_mouse_event(mouse: &MouseEvent, state: &UiState) -> Option<Action> {
    let progress = state.display_state.progress_area;
    let volume = state.display_state.volume_area;
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(ratio) = ratio_within(progress, col, row) {
                return Some(Action::ScrubStart(ratio));
            }
            ratio_within(volume, col, row).map(|r| Action::SetVolume(r as f32 * 100.0))
        }
        MouseEventKind::Drag(MouseButton::Left) if state.display_state.scrubbing => {
            Some(Action::ScrubMove(ratio_along(progress, col)))
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            ratio_within(volume, col, row).map(|r| Action::SetVolume(r as f32 * 100.0))
        }
        MouseEventKind::Up(MouseButton::Left) if state.display_state.scrubbing => {
            Some(Action::ScrubEnd)
        }
        _ => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(Duration::from_millis(REFRESH_RATE))? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}

impl Encore {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        let seek_step = self.settings.seek_step_secs;
        let volume_step = self.settings.volume_step;

        match action {
            // Player
            Action::TogglePause     => self.controller.toggle(),
            Action::SeekForward     => self.controller.seek_relative(seek_step),
            Action::SeekBack        => self.controller.seek_relative(-seek_step),
            Action::VolumeUp        => self.controller.adjust_volume_relative(volume_step),
            Action::VolumeDown      => self.controller.adjust_volume_relative(-volume_step),
            Action::SetVolume(v)    => self.controller.set_volume(v),

            // Scrubbing
            Action::ScrubStart(r)   => self.scrub_start(r),
            Action::ScrubMove(r)    => self.scrub_to(r),
            Action::ScrubEnd        => self.scrub_end(),

            // Tracks
            Action::SelectTrack(i)  => self.controller.select_track(i)?,
            Action::NextTrack       => self.controller.select_next()?,
            Action::PrevTrack       => self.controller.select_prev()?,
            Action::ToggleFavorite  => self.controller.toggle_favorite(),

            Action::QUIT            => self.quit = true,
        }
        Ok(())
    }
}
