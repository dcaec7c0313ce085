//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (ids, tracks, playlists, focus, overlays)
//! - `catalog`: Catalog store holding tracks and playlists
//! - `view_state`: Which top-level view is active
//! - `playback`: Transport state (track index, position, volume)
//! - `app_model`: Session state aggregating the above for the controller and view

mod types;
mod catalog;
mod view_state;
mod playback;
mod app_model;

pub use types::{
    ActiveSection, Overlay, Playlist, PlaylistId, PlaylistRow, Track, TrackId,
};

pub use catalog::{Catalog, CatalogData};

pub use view_state::ActiveView;

pub use playback::{PlaybackInfo, PlaybackState, DEFAULT_VOLUME};

pub use app_model::{AppModel, ContentSelection};
