use crate::{
    Catalog, SourceRef, Track, expand_tilde,
    player::SourceProfile,
};
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

const CONFIG_DIR: &str = "encore";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub initial_track: usize,
    pub initial_volume: f32,
    pub seek_step_secs: f64,
    pub volume_step: f32,
    pub log_file: Option<PathBuf>,
    pub tracks: Vec<TrackConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TrackConfig {
    pub title: String,
    pub artist: String,
    pub source: String,

    /// Length reported once the source loads. Sources without one fail to load.
    #[serde(default)]
    pub duration_secs: Option<f64>,

    /// Refuse playback of this source, as a browser autoplay policy would.
    #[serde(default)]
    pub blocked: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            initial_track: 0,
            initial_volume: 100.0,
            seek_step_secs: 10.0,
            volume_step: 10.0,
            log_file: None,
            tracks: default_tracks(),
        }
    }
}

fn default_tracks() -> Vec<TrackConfig> {
    [
        ("DayLight", "David Kushner"),
        ("Top 50 - Global", "Various Artists"),
        ("Trending Hits", "Popular Artists"),
    ]
    .into_iter()
    .map(|(title, artist)| TrackConfig {
        title: title.to_string(),
        artist: artist.to_string(),
        source: String::from("./assets/song.mp3"),
        duration_secs: Some(212.0),
        blocked: false,
    })
    .collect()
}

impl Settings {
    /// Load from `path` when given, otherwise from the user's config dir.
    /// A missing default file is not an error; defaults apply instead.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => match default_config_path() {
                Some(p) if p.exists() => Self::load_from_file(p),
                _ => Ok(Settings::default()),
            },
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_tilde(path)?;
        let file_str = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;

        let settings = toml::from_str::<Settings>(&file_str)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.initial_volume) {
            return Err(anyhow!(
                "initial_volume must be between 0 and 100, got {}",
                self.initial_volume
            ));
        }

        if !self.seek_step_secs.is_finite() || self.seek_step_secs <= 0.0 {
            return Err(anyhow!("seek_step_secs must be a positive number"));
        }

        if !self.volume_step.is_finite() || self.volume_step <= 0.0 {
            return Err(anyhow!("volume_step must be a positive number"));
        }

        let bad_length = self.tracks.iter().find(|t| {
            t.duration_secs
                .is_some_and(|d| !(d.is_finite() && d > 0.0))
        });
        if let Some(track) = bad_length {
            return Err(anyhow!(
                "duration_secs for \"{}\" must be a positive number",
                track.title
            ));
        }

        // Catalog construction owns the empty/out-of-range checks
        self.catalog().map(|_| ())
    }

    pub fn catalog(&self) -> Result<Catalog> {
        let tracks = self
            .tracks
            .iter()
            .map(|t| Track::new(&t.title, &t.artist, SourceRef::new(&t.source)))
            .collect();

        Catalog::new(tracks, self.initial_track)
    }

    /// What the simulated transport knows about each configured source.
    pub fn source_profiles(&self) -> HashMap<SourceRef, SourceProfile> {
        self.tracks
            .iter()
            .map(|t| {
                let profile = SourceProfile {
                    duration: t.duration_secs,
                    blocked: t.blocked,
                };
                (SourceRef::new(&t.source), profile)
            })
            .collect()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_stock_catalog() {
        let settings = Settings::default();
        let catalog = settings.catalog().unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.initial(), 0);
        assert_eq!(catalog.get(0).unwrap().title(), "DayLight");
        assert_eq!(catalog.get(0).unwrap().artist(), "David Kushner");
        assert_eq!(catalog.get(2).unwrap().title(), "Trending Hits");
        assert_eq!(settings.seek_step_secs, 10.0);
        assert_eq!(settings.volume_step, 10.0);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("seek_step_secs = 5.0").unwrap();
        assert_eq!(settings.seek_step_secs, 5.0);
        assert_eq!(settings.initial_volume, 100.0);
        assert_eq!(settings.tracks.len(), 3);
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let settings = Settings {
            initial_volume: 140.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            initial_track: 7,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn profiles_are_keyed_by_source() {
        let settings: Settings = toml::from_str(
            r#"
            [[tracks]]
            title = "Locked"
            artist = "Nobody"
            source = "locked.mp3"
            duration_secs = 30.0
            blocked = true
            "#,
        )
        .unwrap();

        let profiles = settings.source_profiles();
        let locked = profiles.get(&SourceRef::new("locked.mp3")).unwrap();
        assert!(locked.blocked);
        assert_eq!(locked.duration, Some(30.0));
    }
}
