//! Core type definitions for the application

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog track
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a playlist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(pub u32);

impl PlaylistId {
    /// The following id, or `None` once the id space is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(PlaylistId)
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A track in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length in seconds, finite and > 0 once in the catalog
    pub duration: f64,
    #[serde(default)]
    pub cover: String,
    /// Source reference handed to the media backend
    pub audio: String,
}

impl Track {
    /// Case-insensitive substring match over title, artist and album.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
            || self.album.to_lowercase().contains(needle)
    }
}

/// A named, ordered, deduplicated collection of track references
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<TrackId>,
    pub owner: String,
    #[serde(default, rename = "isPublic")]
    pub is_public: bool,
}

impl Playlist {
    pub fn contains(&self, track_id: TrackId) -> bool {
        self.tracks.contains(&track_id)
    }

    pub fn track_count_label(&self) -> String {
        let n = self.tracks.len();
        format!("{} track{}", n, if n == 1 { "" } else { "s" })
    }
}

/// One resolved row of a playlist: either a catalog track or a dangling id
#[derive(Clone, Debug, PartialEq)]
pub enum PlaylistRow<'a> {
    Track { index: usize, track: &'a Track },
    Missing(TrackId),
}

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Sidebar,
    MainContent,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Sidebar,
            ActiveSection::Sidebar => ActiveSection::MainContent,
            ActiveSection::MainContent => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::MainContent,
            ActiveSection::Sidebar => ActiveSection::Search,
            ActiveSection::MainContent => ActiveSection::Sidebar,
        }
    }
}

/// Overlay currently shown above the main layout
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    /// Blocking notice; swallows input until dismissed
    Notice(String),
    /// Share link for a public playlist
    Share { link: String },
    /// New playlist name being typed
    CreatePlaylist { name: String },
    /// Choosing a playlist to add `track_id` to
    AddToPlaylist { track_id: TrackId, selected: usize },
    Help,
}
