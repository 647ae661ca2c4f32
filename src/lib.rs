use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

pub mod app_core;
pub mod domain;
pub mod key_handler;
pub mod logging;
pub mod player;
pub mod settings;
pub mod tui;
pub mod ui_state;

pub use domain::{Catalog, SourceRef, Track};
pub use player::{PlaybackController, PlaybackState};
pub use settings::Settings;

// ~30fps
pub const REFRESH_RATE: u64 = 33;

/// Render seconds as zero-padded `MM:SS`.
///
/// Anything that is not a positive, finite number (NaN, infinities,
/// negatives, and zero, which callers use as "unset") reads `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::from("00:00");
    }

    let total = seconds.floor() as u64;
    let mins = total / 60;
    let secs = total % 60;

    format!("{mins:02}:{secs:02}")
}

/// Shorten `s` to at most `limit` characters, ellipsis included.
/// Cuts at the last space that fits, or mid-word when none does.
pub fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    if limit == 0 {
        return String::new();
    }

    let head: String = s.chars().take(limit - 1).collect();
    let kept = match head.rfind(' ') {
        Some(space) if space > 0 => head[..space].trim_end(),
        _ => head.as_str(),
    };

    format!("{kept}…")
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Cannot expand path: {path_str}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(75.0), "01:15");
        assert_eq!(format_time(59.99), "00:59");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn format_time_treats_unset_values_as_zero() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-4.0), "00:00");
    }

    #[test]
    fn truncation_prefers_word_boundaries() {
        assert_eq!(truncate_at_last_space("David Kushner", 30), "David Kushner");
        assert_eq!(
            truncate_at_last_space("Various Artists and Many Friends Besides", 30),
            "Various Artists and Many…"
        );
        assert_eq!(truncate_at_last_space("Supercalifragilistic", 5), "Supe…");
        assert_eq!(truncate_at_last_space("Supercalifragilistic", 1), "…");
    }

    #[test]
    fn truncation_never_exceeds_the_limit() {
        let artist = "Orchestre Symphonique de Montréal";
        for limit in 0..=artist.chars().count() {
            let cut = truncate_at_last_space(artist, limit);
            assert!(cut.chars().count() <= limit, "{cut:?} is over {limit}");
        }
    }

    #[test]
    fn tilde_expansion_leaves_plain_paths_alone() {
        let plain = expand_tilde("/tmp/encore.log").unwrap();
        assert_eq!(plain, PathBuf::from("/tmp/encore.log"));
        assert!(expand_tilde("~").is_err());
    }
}
