//! Media backend notifications and the periodic progress tick

use crate::audio::MediaEvent;
use crate::log_op_result;

use super::AppController;

impl AppController {
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Ready(id) => {
                tracing::trace!(load_id = id.0, "MediaEvent::Ready");
                self.transport.on_source_ready(id);
            }
            MediaEvent::Ended(id) => {
                tracing::debug!(load_id = id.0, "MediaEvent::Ended");
                let result = self.transport.on_track_ended(self.model.catalog.tracks(), id);
                log_op_result!("on_track_ended", result);
            }
        }
    }

    /// Re-read the playback position from the backend
    pub fn tick(&mut self) {
        if let Err(e) = self.transport.tick(self.model.catalog.tracks()) {
            tracing::trace!(error = %e, "Tick skipped");
        }
    }
}
