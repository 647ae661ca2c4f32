mod help_line;
mod now_playing;
mod seek_bar;
mod toasts;
mod track_list;
mod volume_bar;

pub use help_line::HelpLine;
pub use now_playing::NowPlaying;
pub use seek_bar::SeekBar;
pub use toasts::Toasts;
pub use track_list::TrackList;
pub use volume_bar::VolumeBar;

const DUR_WIDTH: u16 = 5;
const PAUSE_ICON: &str = "⏸";
const PLAY_ICON: &str = "▶";
const ARTIST_LIMIT: usize = 30;
