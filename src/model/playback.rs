//! Playback-related types and state

use super::types::Track;

pub const DEFAULT_VOLUME: f32 = 0.7;

/// Transport state for the session
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    /// Index into the catalog's track sequence
    pub current_track_index: usize,
    pub is_playing: bool,
    /// Seconds into the current track
    pub current_time: f64,
    /// 0.0 to 1.0
    pub volume: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track_index: 0,
            is_playing: false,
            current_time: 0.0,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// Complete playback information for rendering the now playing bar
#[derive(Clone, Debug)]
pub struct PlaybackInfo<'a> {
    pub track: Option<&'a Track>,
    pub current_track_index: usize,
    pub current_time: f64,
    pub is_playing: bool,
    pub volume: f32,
}

impl PlaybackInfo<'_> {
    pub fn duration(&self) -> f64 {
        self.track.map(|t| t.duration).unwrap_or(0.0)
    }

    pub fn progress_ratio(&self) -> f64 {
        let duration = self.duration();
        if duration > 0.0 {
            (self.current_time / duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
