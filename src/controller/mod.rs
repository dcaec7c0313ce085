//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and drives the transport.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and mouse event handling
//! - `playback`: Transport actions triggered from the UI
//! - `navigation`: Library/playlist/search navigation and playlist editing
//! - `player_events`: Media backend notifications and the progress tick
//! - `transport`: Playback state and the media backend
//! - `playlist_editor`: Playlist mutations and sharing

mod input;
mod playback;
mod navigation;
mod player_events;
mod transport;
mod playlist_editor;

pub use transport::TransportController;
pub use playlist_editor::{PlaylistEditor, SHARE_PRIVATE_NOTICE};

use crate::audio::MediaBackend;
use crate::model::{AppModel, PlaybackInfo};

/// Owns the whole session: model state plus the transport
pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) transport: TransportController,
}

impl AppController {
    pub fn new(model: AppModel, backend: Box<dyn MediaBackend>, initial_volume: f32) -> Self {
        let mut transport = TransportController::new(backend, initial_volume);
        let result = transport.load_current(model.catalog.tracks());
        crate::log_op_result!("load_current", result);
        Self { model, transport }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn playback_info(&self) -> PlaybackInfo<'_> {
        self.transport.info(self.model.catalog.tracks())
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit()
    }

    pub(crate) fn editor(&mut self) -> PlaylistEditor<'_> {
        let (catalog, share_host) = self.model.catalog_and_share_host();
        PlaylistEditor::new(catalog, share_host)
    }

    /// Stop playback; called once when the session loop exits
    pub fn shutdown(&mut self) {
        self.transport.shutdown();
        tracing::info!("Session shut down");
    }
}
