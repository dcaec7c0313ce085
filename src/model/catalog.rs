//! Catalog store: the track list and the playlists built on top of it

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use super::types::{Playlist, PlaylistId, PlaylistRow, Track, TrackId};

/// Raw catalog as supplied by a data source, before validation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl CatalogData {
    /// Read a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let data: CatalogData = serde_json::from_str(&content)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        Ok(data)
    }

    /// The built-in five track catalog with two playlists
    pub fn fixture() -> Self {
        let track = |id: u32, title: &str, artist: &str, album: &str, duration: f64| Track {
            id: TrackId(id),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            duration,
            cover: "/api/placeholder/300/300".to_string(),
            audio: format!("https://example.com/audio/track{}.mp3", id + 1),
        };

        Self {
            tracks: vec![
                track(0, "Summer Breeze", "Coastal Waves", "Ocean Sounds", 237.0),
                track(1, "Mountain Echo", "Nature Sounds", "Wilderness", 184.0),
                track(2, "Urban Rhythm", "City Beats", "Downtown", 198.0),
                track(3, "Midnight Jazz", "Smooth Quartet", "Late Hours", 245.0),
                track(4, "Electronic Dreams", "Digital Artist", "Future Sounds", 221.0),
            ],
            playlists: vec![
                Playlist {
                    id: PlaylistId(1),
                    name: "Favorites".to_string(),
                    tracks: vec![TrackId(0), TrackId(1), TrackId(3)],
                    owner: "You".to_string(),
                    is_public: true,
                },
                Playlist {
                    id: PlaylistId(2),
                    name: "Workout Mix".to_string(),
                    tracks: vec![TrackId(2), TrackId(4)],
                    owner: "You".to_string(),
                    is_public: false,
                },
            ],
        }
    }
}

/// Owns the tracks and playlists for the session
#[derive(Clone, Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    /// `None` once every id has been handed out
    next_playlist_id: Option<PlaylistId>,
    owner: String,
}

impl Catalog {
    /// Validate raw data into a catalog owned by `owner`.
    ///
    /// Tracks with duplicate ids or a non-positive duration and playlists with
    /// duplicate ids or blank names are dropped. Duplicate references inside a
    /// playlist are collapsed, keeping the first occurrence. Dangling
    /// references are kept.
    pub fn from_data(data: CatalogData, owner: impl Into<String>) -> Self {
        let mut seen_tracks = HashSet::new();
        let mut tracks = Vec::with_capacity(data.tracks.len());
        for track in data.tracks {
            if !(track.duration.is_finite() && track.duration > 0.0) {
                tracing::warn!(track_id = %track.id, title = %track.title, duration = track.duration, "Dropping track without a positive duration");
                continue;
            }
            if !seen_tracks.insert(track.id) {
                tracing::warn!(track_id = %track.id, "Dropping track with duplicate id");
                continue;
            }
            tracks.push(track);
        }

        let mut seen_playlists = HashSet::new();
        let mut playlists = Vec::with_capacity(data.playlists.len());
        for mut playlist in data.playlists {
            if playlist.name.trim().is_empty() {
                tracing::warn!(playlist_id = %playlist.id, "Dropping playlist with blank name");
                continue;
            }
            if !seen_playlists.insert(playlist.id) {
                tracing::warn!(playlist_id = %playlist.id, "Dropping playlist with duplicate id");
                continue;
            }
            let before = playlist.tracks.len();
            let mut seen_refs = HashSet::new();
            playlist.tracks.retain(|id| seen_refs.insert(*id));
            if playlist.tracks.len() != before {
                tracing::warn!(
                    playlist_id = %playlist.id,
                    removed = before - playlist.tracks.len(),
                    "Collapsed duplicate track references"
                );
            }
            let dangling = playlist.tracks.iter().filter(|id| !seen_tracks.contains(id)).count();
            if dangling > 0 {
                tracing::debug!(playlist_id = %playlist.id, dangling, "Playlist references unknown tracks");
            }
            playlists.push(playlist);
        }

        let next_playlist_id = playlists
            .iter()
            .map(|p| p.id)
            .max()
            .map(PlaylistId::next)
            .unwrap_or(Some(PlaylistId(1)));

        tracing::info!(tracks = tracks.len(), playlists = playlists.len(), "Catalog loaded");

        Self {
            tracks,
            playlists,
            next_playlist_id,
            owner: owner.into(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    fn playlist_mut(&mut self, id: PlaylistId) -> Result<&mut Playlist, CatalogError> {
        self.playlists
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::PlaylistNotFound(id))
    }

    /// Position of a track in the global track sequence
    pub fn track_index(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<&Playlist, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidInput);
        }

        let Some(id) = self.next_playlist_id else {
            tracing::warn!("Playlist id space exhausted");
            return Err(CatalogError::IdSpaceExhausted);
        };
        self.next_playlist_id = id.next();
        self.playlists.push(Playlist {
            id,
            name: name.to_string(),
            tracks: Vec::new(),
            owner: self.owner.clone(),
            is_public: false,
        });
        tracing::info!(playlist_id = %id, name, "Playlist created");

        let index = self.playlists.len() - 1;
        Ok(&self.playlists[index])
    }

    /// Append `track_id` unless already present. Returns whether it was added.
    pub fn add_track_to_playlist(
        &mut self,
        playlist_id: PlaylistId,
        track_id: TrackId,
    ) -> Result<bool, CatalogError> {
        if self.track_index(track_id).is_none() {
            return Err(CatalogError::TrackNotFound(track_id));
        }
        let playlist = self.playlist_mut(playlist_id)?;
        if playlist.contains(track_id) {
            return Ok(false);
        }
        playlist.tracks.push(track_id);
        Ok(true)
    }

    /// Remove every occurrence of `track_id`. Returns how many were removed.
    pub fn remove_track_from_playlist(
        &mut self,
        playlist_id: PlaylistId,
        track_id: TrackId,
    ) -> Result<usize, CatalogError> {
        let playlist = self.playlist_mut(playlist_id)?;
        let before = playlist.tracks.len();
        playlist.tracks.retain(|id| *id != track_id);
        Ok(before - playlist.tracks.len())
    }

    pub fn set_playlist_visibility(
        &mut self,
        playlist_id: PlaylistId,
        is_public: bool,
    ) -> Result<(), CatalogError> {
        self.playlist_mut(playlist_id)?.is_public = is_public;
        Ok(())
    }

    /// Tracks whose title, artist or album contains `query`, ignoring case.
    /// An empty query matches nothing.
    pub fn search_tracks(&self, query: &str) -> Vec<(usize, &Track)> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.matches(&needle))
            .collect()
    }

    /// Resolve a playlist's references in order
    pub fn playlist_rows(&self, playlist_id: PlaylistId) -> Vec<PlaylistRow<'_>> {
        let Some(playlist) = self.playlist(playlist_id) else {
            return Vec::new();
        };
        playlist
            .tracks
            .iter()
            .map(|id| match self.track_index(*id) {
                Some(index) => PlaylistRow::Track { index, track: &self.tracks[index] },
                None => PlaylistRow::Missing(*id),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_data(CatalogData::fixture(), "You")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::default()
    }

    fn titles(results: &[(usize, &Track)]) -> Vec<String> {
        results.iter().map(|(_, t)| t.title.clone()).collect()
    }

    #[test]
    fn fixture_has_five_tracks_in_order() {
        let c = catalog();
        assert_eq!(c.tracks().len(), 5);
        assert_eq!(c.tracks()[0].title, "Summer Breeze");
        assert_eq!(c.tracks()[4].title, "Electronic Dreams");
        assert_eq!(c.playlists().len(), 2);
    }

    #[test]
    fn create_playlist_rejects_blank_names() {
        let mut c = catalog();
        assert_eq!(c.create_playlist("   ").unwrap_err(), CatalogError::InvalidInput);
        assert_eq!(c.create_playlist("").unwrap_err(), CatalogError::InvalidInput);
        assert_eq!(c.playlists().len(), 2);
    }

    #[test]
    fn create_playlist_defaults() {
        let mut c = catalog();
        let p = c.create_playlist("  Chill ").unwrap().clone();
        assert_eq!(p.id, PlaylistId(3));
        assert_eq!(p.name, "Chill");
        assert!(p.tracks.is_empty());
        assert_eq!(p.owner, "You");
        assert!(!p.is_public);
    }

    #[test]
    fn playlist_ids_never_collide() {
        let data = CatalogData {
            tracks: CatalogData::fixture().tracks,
            playlists: vec![Playlist {
                id: PlaylistId(10),
                name: "Old".to_string(),
                tracks: vec![],
                owner: "You".to_string(),
                is_public: false,
            }],
        };
        let mut c = Catalog::from_data(data, "You");
        let a = c.create_playlist("a").unwrap().id;
        let b = c.create_playlist("b").unwrap().id;
        assert_eq!(a, PlaylistId(11));
        assert_eq!(b, PlaylistId(12));
        let ids: HashSet<_> = c.playlists().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), c.playlists().len());
    }

    #[test]
    fn id_allocator_refuses_past_max() {
        let mut data = CatalogData::fixture();
        data.playlists[1].id = PlaylistId(u32::MAX);
        let mut c = Catalog::from_data(data, "You");
        assert_eq!(c.create_playlist("a").unwrap_err(), CatalogError::IdSpaceExhausted);
        assert_eq!(c.create_playlist("b").unwrap_err(), CatalogError::IdSpaceExhausted);
        let ids: HashSet<_> = c.playlists().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), c.playlists().len());
        assert_eq!(c.playlists().len(), 2);
    }

    #[test]
    fn id_allocator_hands_out_last_id_once() {
        let mut data = CatalogData::fixture();
        data.playlists[1].id = PlaylistId(u32::MAX - 1);
        let mut c = Catalog::from_data(data, "You");
        assert_eq!(c.create_playlist("a").unwrap().id, PlaylistId(u32::MAX));
        assert_eq!(c.create_playlist("b").unwrap_err(), CatalogError::IdSpaceExhausted);
    }

    #[test]
    fn loading_drops_blank_named_playlists() {
        let mut data = CatalogData::fixture();
        data.playlists[0].name = "   ".to_string();
        let c = Catalog::from_data(data, "You");
        assert_eq!(c.playlists().len(), 1);
        assert_eq!(c.playlists()[0].name, "Workout Mix");
    }

    #[test]
    fn fractional_durations_load_and_non_positive_ones_drop() {
        let json = r#"{
            "tracks": [
                {"id": 1, "title": "Half", "artist": "A", "album": "B", "duration": 237.5, "audio": "a.mp3"},
                {"id": 2, "title": "Neg", "artist": "A", "album": "B", "duration": -1.0, "audio": "b.mp3"}
            ]
        }"#;
        let data: CatalogData = serde_json::from_str(json).unwrap();
        let c = Catalog::from_data(data, "You");
        assert_eq!(c.tracks().len(), 1);
        assert_eq!(c.tracks()[0].duration, 237.5);
    }

    #[test]
    fn chill_scenario_add_is_idempotent() {
        let mut c = catalog();
        let id = c.create_playlist("Chill").unwrap().id;
        assert_eq!(c.add_track_to_playlist(id, TrackId(2)), Ok(true));
        assert_eq!(c.add_track_to_playlist(id, TrackId(2)), Ok(false));
        assert_eq!(c.playlist(id).unwrap().tracks, vec![TrackId(2)]);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut c = catalog();
        let id = c.create_playlist("Mix").unwrap().id;
        for t in [3, 0, 4] {
            c.add_track_to_playlist(id, TrackId(t)).unwrap();
        }
        assert_eq!(c.playlist(id).unwrap().tracks, vec![TrackId(3), TrackId(0), TrackId(4)]);
    }

    #[test]
    fn add_to_unknown_playlist_or_track_is_noop() {
        let mut c = catalog();
        let before = c.playlists().to_vec();
        assert_eq!(
            c.add_track_to_playlist(PlaylistId(99), TrackId(0)),
            Err(CatalogError::PlaylistNotFound(PlaylistId(99)))
        );
        assert_eq!(
            c.add_track_to_playlist(PlaylistId(1), TrackId(42)),
            Err(CatalogError::TrackNotFound(TrackId(42)))
        );
        assert_eq!(c.playlists(), &before[..]);
    }

    #[test]
    fn remove_deletes_every_occurrence() {
        let data = CatalogData {
            tracks: CatalogData::fixture().tracks,
            playlists: vec![Playlist {
                id: PlaylistId(1),
                name: "Dupes".to_string(),
                tracks: vec![TrackId(1), TrackId(2), TrackId(1)],
                owner: "You".to_string(),
                is_public: false,
            }],
        };
        let mut c = Catalog::from_data(data, "You");
        // loading already collapses the duplicate
        assert_eq!(c.playlist(PlaylistId(1)).unwrap().tracks, vec![TrackId(1), TrackId(2)]);
        assert_eq!(c.remove_track_from_playlist(PlaylistId(1), TrackId(1)), Ok(1));
        assert!(!c.playlist(PlaylistId(1)).unwrap().contains(TrackId(1)));
        assert_eq!(c.remove_track_from_playlist(PlaylistId(1), TrackId(1)), Ok(0));
    }

    #[test]
    fn remove_accepts_dangling_ids() {
        let mut data = CatalogData::fixture();
        data.playlists[0].tracks.push(TrackId(77));
        let mut c = Catalog::from_data(data, "You");
        let rows = c.playlist_rows(PlaylistId(1));
        assert_eq!(rows.last(), Some(&PlaylistRow::Missing(TrackId(77))));
        assert_eq!(c.remove_track_from_playlist(PlaylistId(1), TrackId(77)), Ok(1));
        assert!(c.playlist_rows(PlaylistId(1)).iter().all(|r| matches!(r, PlaylistRow::Track { .. })));
    }

    #[test]
    fn visibility_set_is_idempotent() {
        let mut c = catalog();
        c.set_playlist_visibility(PlaylistId(2), true).unwrap();
        c.set_playlist_visibility(PlaylistId(2), true).unwrap();
        assert!(c.playlist(PlaylistId(2)).unwrap().is_public);
        c.set_playlist_visibility(PlaylistId(2), false).unwrap();
        assert!(!c.playlist(PlaylistId(2)).unwrap().is_public);
        assert_eq!(
            c.set_playlist_visibility(PlaylistId(9), true),
            Err(CatalogError::PlaylistNotFound(PlaylistId(9)))
        );
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let c = catalog();
        assert_eq!(titles(&c.search_tracks("SUMMER")), vec!["Summer Breeze"]);
        assert_eq!(titles(&c.search_tracks("sounds")), vec!["Summer Breeze", "Mountain Echo", "Electronic Dreams"]);
        assert_eq!(titles(&c.search_tracks("downtown")), vec!["Urban Rhythm"]);
        assert!(c.search_tracks("zzz").is_empty());
        assert!(c.search_tracks("").is_empty());
    }

    #[test]
    fn search_results_carry_catalog_index() {
        let c = catalog();
        let results = c.search_tracks("jazz");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, 3);
    }

    #[test]
    fn loading_drops_invalid_tracks_and_playlists() {
        let mut data = CatalogData::fixture();
        let mut dup = data.tracks[0].clone();
        dup.title = "Shadow".to_string();
        data.tracks.push(dup);
        let mut silent = data.tracks[1].clone();
        silent.id = TrackId(50);
        silent.duration = 0.0;
        data.tracks.push(silent);
        let dup_playlist = data.playlists[0].clone();
        data.playlists.push(dup_playlist);

        let c = Catalog::from_data(data, "You");
        assert_eq!(c.tracks().len(), 5);
        assert_eq!(c.tracks()[0].title, "Summer Breeze");
        assert_eq!(c.playlists().len(), 2);
    }

    #[test]
    fn catalog_json_round_trips_field_names() {
        let json = r#"{
            "tracks": [{"id": 9, "title": "T", "artist": "A", "album": "B", "duration": 60, "audio": "a.mp3"}],
            "playlists": [{"id": 4, "name": "P", "tracks": [9], "owner": "Me", "isPublic": true}]
        }"#;
        let data: CatalogData = serde_json::from_str(json).unwrap();
        let mut c = Catalog::from_data(data, "Me");
        assert!(c.playlist(PlaylistId(4)).unwrap().is_public);
        assert_eq!(c.create_playlist("New").unwrap().id, PlaylistId(5));
    }
}
