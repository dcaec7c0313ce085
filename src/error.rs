//! Typed errors for catalog and transport operations.
//!
//! None of these are fatal: the controller logs them and leaves state as it
//! was. Only `PreconditionFailed` is shown to the user.

use thiserror::Error;

use crate::model::{PlaylistId, TrackId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("playlist name must not be empty")]
    InvalidInput,
    #[error("unknown playlist {0}")]
    PlaylistNotFound(PlaylistId),
    #[error("unknown track {0}")]
    TrackNotFound(TrackId),
    #[error("{0}")]
    PreconditionFailed(&'static str),
    #[error("no playlist ids left to allocate")]
    IdSpaceExhausted,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("catalog is empty")]
    EmptyCatalog,
    #[error("track index {index} out of range (catalog has {len} tracks)")]
    OutOfRange { index: usize, len: usize },
    #[error("position is not a finite number")]
    InvalidPosition,
}
