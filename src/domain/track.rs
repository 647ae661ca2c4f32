use std::fmt;

/// Opaque handle a transport knows how to load.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceRef(String);

impl SourceRef {
    pub fn new(source: impl Into<String>) -> Self {
        SourceRef(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    title: String,
    artist: String,
    source: SourceRef,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, source: SourceRef) -> Self {
        Track {
            title: title.into(),
            artist: artist.into(),
            source,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn source(&self) -> &SourceRef {
        &self.source
    }
}
