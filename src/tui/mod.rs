mod layout;
mod renderer;
mod widgets;

pub use layout::AppLayout;
pub use renderer::render;
pub use widgets::{HelpLine, NowPlaying, SeekBar, Toasts, TrackList, VolumeBar};

use ratatui::style::Color;

pub(crate) const ACCENT: Color = Color::Rgb(27, 215, 96);
pub(crate) const ERROR_RED: Color = Color::Rgb(226, 33, 52);
pub(crate) const MUTED: Color = Color::Rgb(79, 79, 79);
pub(crate) const SURFACE: Color = Color::Rgb(51, 51, 51);
