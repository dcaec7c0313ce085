//! Playback control methods

use crate::log_op_result;
use crate::model::ContentSelection;

use super::AppController;

pub const VOLUME_STEP: f32 = 0.05;
pub const SEEK_STEP_FRACTION: f64 = 0.05;

impl AppController {
    pub fn toggle_playback(&mut self) {
        tracing::debug!(is_playing = self.transport.state().is_playing, "Toggling playback");
        let result = self.transport.toggle_play(self.model.catalog.tracks());
        log_op_result!("toggle_play", result);
    }

    pub fn next_track(&mut self) {
        let result = self.transport.play_next(self.model.catalog.tracks());
        log_op_result!("play_next", result);
    }

    pub fn previous_track(&mut self) {
        let result = self.transport.play_previous(self.model.catalog.tracks());
        log_op_result!("play_previous", result);
    }

    pub fn play_track(&mut self, index: usize) {
        let result = self.transport.change_track(self.model.catalog.tracks(), index);
        log_op_result!("change_track", result);
    }

    /// Play the row under the content cursor. Dangling rows do nothing.
    pub fn play_selected(&mut self) {
        match self.model.selected_content() {
            Some(ContentSelection { catalog_index: Some(index), .. }) => self.play_track(index),
            Some(ContentSelection { track_id, catalog_index: None }) => {
                tracing::debug!(track_id = %track_id, "Selected row refers to a missing track");
            }
            None => {}
        }
    }

    pub fn volume_up(&mut self) {
        let volume = self.transport.state().volume + VOLUME_STEP;
        let result = self.transport.set_volume(self.model.catalog.tracks(), volume);
        log_op_result!("set_volume", result);
    }

    pub fn volume_down(&mut self) {
        let volume = self.transport.state().volume - VOLUME_STEP;
        let result = self.transport.set_volume(self.model.catalog.tracks(), volume);
        log_op_result!("set_volume", result);
    }

    /// Seek to a fraction of the progress bar
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        let result = self.transport.seek(self.model.catalog.tracks(), fraction);
        log_op_result!("seek", result);
    }

    pub fn seek_forward(&mut self) {
        self.seek_step(SEEK_STEP_FRACTION);
    }

    pub fn seek_backward(&mut self) {
        self.seek_step(-SEEK_STEP_FRACTION);
    }

    fn seek_step(&mut self, fraction: f64) {
        let tracks = self.model.catalog.tracks();
        let Some(track) = tracks.get(self.transport.state().current_track_index) else {
            return;
        };
        let delta = fraction * track.duration;
        let result = self.transport.seek_by(tracks, delta);
        log_op_result!("seek", result);
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::test_support::controller;
    use crate::model::{ActiveSection, PlaylistId};

    #[test]
    fn volume_steps_are_clamped() {
        let mut c = controller();
        for _ in 0..20 {
            c.volume_up();
        }
        assert_eq!(c.transport.state().volume, 1.0);
        for _ in 0..40 {
            c.volume_down();
        }
        assert_eq!(c.transport.state().volume, 0.0);
    }

    #[test]
    fn play_selected_uses_catalog_index() {
        let mut c = controller();
        assert!(c.model.open_playlist(PlaylistId(2)));
        c.model.set_active_section(ActiveSection::MainContent);
        c.model.move_selection_down();
        c.play_selected();
        assert_eq!(c.transport.state().current_track_index, 4);
        assert!(c.transport.state().is_playing);
    }

    #[test]
    fn seek_steps_move_by_track_fraction() {
        let mut c = controller();
        c.seek_forward();
        let step = 0.05 * 237.0;
        assert!((c.transport.state().current_time - step).abs() < 1e-9);
        c.seek_backward();
        c.seek_backward();
        assert_eq!(c.transport.state().current_time, 0.0);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut c = controller();
        c.previous_track();
        assert_eq!(c.transport.state().current_track_index, 4);
        c.next_track();
        assert_eq!(c.transport.state().current_track_index, 0);
    }
}
