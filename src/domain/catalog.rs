use super::Track;
use anyhow::{Result, anyhow};

/// Fixed, ordered list of tracks along with the selection made at startup.
#[derive(Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
    initial: usize,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>, initial: usize) -> Result<Self> {
        if tracks.is_empty() {
            return Err(anyhow!("Track catalog is empty!"));
        }

        if initial >= tracks.len() {
            return Err(anyhow!(
                "Initial track {initial} is out of range for a catalog of {} tracks",
                tracks.len()
            ));
        }

        Ok(Catalog { tracks, initial })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn initial(&self) -> usize {
        self.initial
    }
}
