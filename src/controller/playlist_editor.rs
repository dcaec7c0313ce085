//! Playlist editing on top of the catalog store

use crate::error::CatalogError;
use crate::model::{Catalog, Playlist, PlaylistId, TrackId};

pub const SHARE_PRIVATE_NOTICE: &str = "Make this playlist public first to share it!";

pub struct PlaylistEditor<'a> {
    catalog: &'a mut Catalog,
    share_host: &'a str,
}

impl<'a> PlaylistEditor<'a> {
    pub fn new(catalog: &'a mut Catalog, share_host: &'a str) -> Self {
        Self { catalog, share_host }
    }

    pub fn create(&mut self, name: &str) -> Result<&Playlist, CatalogError> {
        self.catalog.create_playlist(name)
    }

    pub fn add_track(&mut self, playlist_id: PlaylistId, track_id: TrackId) -> Result<bool, CatalogError> {
        let added = self.catalog.add_track_to_playlist(playlist_id, track_id)?;
        tracing::info!(playlist_id = %playlist_id, track_id = %track_id, added, "Add track to playlist");
        Ok(added)
    }

    pub fn remove_track(&mut self, playlist_id: PlaylistId, track_id: TrackId) -> Result<usize, CatalogError> {
        let removed = self.catalog.remove_track_from_playlist(playlist_id, track_id)?;
        tracing::info!(playlist_id = %playlist_id, track_id = %track_id, removed, "Remove track from playlist");
        Ok(removed)
    }

    pub fn set_visibility(&mut self, playlist_id: PlaylistId, is_public: bool) -> Result<(), CatalogError> {
        self.catalog.set_playlist_visibility(playlist_id, is_public)
    }

    pub fn toggle_visibility(&mut self, playlist_id: PlaylistId) -> Result<bool, CatalogError> {
        let is_public = !self
            .catalog
            .playlist(playlist_id)
            .ok_or(CatalogError::PlaylistNotFound(playlist_id))?
            .is_public;
        self.set_visibility(playlist_id, is_public)?;
        tracing::info!(playlist_id = %playlist_id, is_public, "Playlist visibility changed");
        Ok(is_public)
    }

    /// Share link for a public playlist. Private playlists are refused.
    pub fn share(&self, playlist_id: PlaylistId) -> Result<String, CatalogError> {
        let playlist = self
            .catalog
            .playlist(playlist_id)
            .ok_or(CatalogError::PlaylistNotFound(playlist_id))?;
        if !playlist.is_public {
            return Err(CatalogError::PreconditionFailed(SHARE_PRIVATE_NOTICE));
        }
        Ok(format!("https://{}/playlist/{}", self.share_host, playlist.id))
    }
}
