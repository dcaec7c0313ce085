//! Transport controller: owns playback state and drives the media backend

use crate::audio::{LoadId, MediaBackend, MediaSource};
use crate::error::TransportError;
use crate::model::{PlaybackInfo, PlaybackState, Track};

pub struct TransportController {
    backend: Box<dyn MediaBackend>,
    state: PlaybackState,
    /// Most recent load issued to the backend
    loaded: Option<LoadId>,
    source_ready: bool,
    /// Issue `play` once the current load reports ready
    play_on_ready: bool,
}

impl TransportController {
    pub fn new(mut backend: Box<dyn MediaBackend>, initial_volume: f32) -> Self {
        let volume = if initial_volume.is_finite() {
            initial_volume.clamp(0.0, 1.0)
        } else {
            crate::model::DEFAULT_VOLUME
        };
        backend.set_volume(volume);
        Self {
            backend,
            state: PlaybackState {
                volume,
                ..PlaybackState::default()
            },
            loaded: None,
            source_ready: false,
            play_on_ready: false,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn info<'a>(&self, tracks: &'a [Track]) -> PlaybackInfo<'a> {
        PlaybackInfo {
            track: tracks.get(self.state.current_track_index),
            current_track_index: self.state.current_track_index,
            current_time: self.state.current_time,
            is_playing: self.state.is_playing,
            volume: self.state.volume,
        }
    }

    fn current_track<'a>(&self, tracks: &'a [Track]) -> Result<&'a Track, TransportError> {
        tracks
            .get(self.state.current_track_index)
            .ok_or(TransportError::EmptyCatalog)
    }

    fn load_source(&mut self, track: &Track) {
        let id = self.backend.load(MediaSource {
            uri: track.audio.clone(),
            duration: track.duration,
        });
        self.loaded = Some(id);
        self.source_ready = false;
    }

    /// Load the current track's source without starting playback
    pub fn load_current(&mut self, tracks: &[Track]) -> Result<(), TransportError> {
        let track = self.current_track(tracks)?;
        tracing::debug!(index = self.state.current_track_index, title = %track.title, "Loading initial track");
        self.load_source(track);
        self.play_on_ready = false;
        Ok(())
    }

    pub fn toggle_play(&mut self, tracks: &[Track]) -> Result<(), TransportError> {
        let track = self.current_track(tracks)?;

        if self.state.is_playing {
            self.play_on_ready = false;
            self.backend.pause();
            self.state.is_playing = false;
            tracing::info!(action = "paused", "Playback toggled");
            return Ok(());
        }

        self.state.is_playing = true;
        if self.loaded.is_none() {
            self.load_source(track);
        }
        if self.source_ready {
            self.backend.play();
        } else {
            self.play_on_ready = true;
        }
        tracing::info!(action = "resumed", "Playback toggled");
        Ok(())
    }

    /// Switch to `index` and start playing it once its source is ready
    pub fn change_track(&mut self, tracks: &[Track], index: usize) -> Result<(), TransportError> {
        if tracks.is_empty() {
            return Err(TransportError::EmptyCatalog);
        }
        let Some(track) = tracks.get(index) else {
            return Err(TransportError::OutOfRange { index, len: tracks.len() });
        };

        self.state.current_track_index = index;
        self.state.current_time = 0.0;
        self.state.is_playing = true;
        self.load_source(track);
        self.play_on_ready = true;
        tracing::info!(index, title = %track.title, artist = %track.artist, "Track changed");
        Ok(())
    }

    pub fn play_next(&mut self, tracks: &[Track]) -> Result<(), TransportError> {
        if tracks.is_empty() {
            return Err(TransportError::EmptyCatalog);
        }
        let next = (self.state.current_track_index + 1) % tracks.len();
        self.change_track(tracks, next)
    }

    pub fn play_previous(&mut self, tracks: &[Track]) -> Result<(), TransportError> {
        if tracks.is_empty() {
            return Err(TransportError::EmptyCatalog);
        }
        let previous = match self.state.current_track_index {
            0 => tracks.len() - 1,
            i => (i - 1).min(tracks.len() - 1),
        };
        self.change_track(tracks, previous)
    }

    /// Backend reported a source ready; stale loads are ignored
    pub fn on_source_ready(&mut self, id: LoadId) {
        if self.loaded != Some(id) {
            tracing::trace!(load_id = id.0, "Ignoring ready for superseded load");
            return;
        }
        self.source_ready = true;
        if self.play_on_ready {
            self.play_on_ready = false;
            self.backend.play();
        }
    }

    /// Backend reported the end of a track; advances unless the load is stale
    pub fn on_track_ended(&mut self, tracks: &[Track], id: LoadId) -> Result<(), TransportError> {
        if self.loaded != Some(id) {
            tracing::trace!(load_id = id.0, "Ignoring end of superseded load");
            return Ok(());
        }
        if !self.state.is_playing {
            tracing::trace!(load_id = id.0, "Ignoring end reported after pause");
            return Ok(());
        }
        tracing::debug!("Track ended, advancing");
        self.play_next(tracks)
    }

    /// Refresh the position from the backend
    pub fn tick(&mut self, tracks: &[Track]) -> Result<(), TransportError> {
        let track = self.current_track(tracks)?;
        let position = self.backend.current_time();
        self.state.current_time = if position.is_finite() {
            position.clamp(0.0, track.duration)
        } else {
            0.0
        };
        Ok(())
    }

    /// Seek to a fraction (0.0 to 1.0) of the current track
    pub fn seek(&mut self, tracks: &[Track], fraction: f64) -> Result<(), TransportError> {
        let track = self.current_track(tracks)?;
        if !fraction.is_finite() {
            return Err(TransportError::InvalidPosition);
        }
        let seek_time = fraction.clamp(0.0, 1.0) * track.duration;
        self.state.current_time = seek_time;
        self.backend.seek_to(seek_time);
        tracing::debug!(seek_time, "Seeked");
        Ok(())
    }

    /// Seek relative to the current position, in seconds
    pub fn seek_by(&mut self, tracks: &[Track], delta: f64) -> Result<(), TransportError> {
        let duration = self.current_track(tracks)?.duration;
        let fraction = (self.state.current_time + delta) / duration;
        self.seek(tracks, fraction)
    }

    pub fn set_volume(&mut self, tracks: &[Track], volume: f32) -> Result<(), TransportError> {
        self.current_track(tracks)?;
        if !volume.is_finite() {
            return Err(TransportError::InvalidPosition);
        }
        let volume = volume.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.backend.set_volume(volume);
        Ok(())
    }

    /// Stop output before the session is torn down
    pub fn shutdown(&mut self) {
        self.play_on_ready = false;
        self.backend.pause();
        self.state.is_playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogData;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Load(String),
        Play,
        Pause,
        Seek(f64),
        Volume(f32),
    }

    #[derive(Default)]
    struct Recorded {
        calls: Vec<Call>,
        position: f64,
        loads: u64,
    }

    struct RecordingBackend(Rc<RefCell<Recorded>>);

    impl MediaBackend for RecordingBackend {
        fn load(&mut self, source: MediaSource) -> LoadId {
            let mut r = self.0.borrow_mut();
            r.calls.push(Call::Load(source.uri));
            r.loads += 1;
            LoadId(r.loads)
        }
        fn play(&mut self) {
            self.0.borrow_mut().calls.push(Call::Play);
        }
        fn pause(&mut self) {
            self.0.borrow_mut().calls.push(Call::Pause);
        }
        fn seek_to(&mut self, seconds: f64) {
            self.0.borrow_mut().calls.push(Call::Seek(seconds));
        }
        fn set_volume(&mut self, fraction: f32) {
            self.0.borrow_mut().calls.push(Call::Volume(fraction));
        }
        fn current_time(&self) -> f64 {
            self.0.borrow().position
        }
    }

    fn setup() -> (TransportController, Rc<RefCell<Recorded>>, Vec<Track>) {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let transport = TransportController::new(Box::new(RecordingBackend(recorded.clone())), 0.7);
        recorded.borrow_mut().calls.clear();
        (transport, recorded, CatalogData::fixture().tracks)
    }

    fn calls(recorded: &Rc<RefCell<Recorded>>) -> Vec<Call> {
        recorded.borrow().calls.clone()
    }

    #[test]
    fn change_track_waits_for_ready_before_play() {
        let (mut t, rec, tracks) = setup();
        t.change_track(&tracks, 2).unwrap();
        assert_eq!(calls(&rec), vec![Call::Load(tracks[2].audio.clone())]);
        assert!(t.state().is_playing);

        t.on_source_ready(LoadId(1));
        assert_eq!(calls(&rec).last(), Some(&Call::Play));
    }

    #[test]
    fn stale_ready_does_not_play() {
        let (mut t, rec, tracks) = setup();
        t.change_track(&tracks, 1).unwrap();
        t.change_track(&tracks, 3).unwrap();
        t.on_source_ready(LoadId(1));
        assert!(!calls(&rec).contains(&Call::Play));
        t.on_source_ready(LoadId(2));
        assert_eq!(calls(&rec).last(), Some(&Call::Play));
        assert_eq!(t.state().current_track_index, 3);
    }

    #[test]
    fn scenario_change_to_last_then_next_wraps() {
        let (mut t, rec, tracks) = setup();
        rec.borrow_mut().position = 30.0;
        t.tick(&tracks).unwrap();
        assert_eq!(t.state().current_time, 30.0);

        t.change_track(&tracks, 4).unwrap();
        assert_eq!(t.state().current_time, 0.0);
        t.tick(&tracks).unwrap();
        t.play_next(&tracks).unwrap();
        assert_eq!(t.state().current_track_index, 0);
        assert_eq!(t.state().current_time, 0.0);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let (mut t, _rec, tracks) = setup();
        t.play_previous(&tracks).unwrap();
        assert_eq!(t.state().current_track_index, 4);
        t.play_previous(&tracks).unwrap();
        assert_eq!(t.state().current_track_index, 3);
    }

    #[test]
    fn out_of_range_keeps_state() {
        let (mut t, rec, tracks) = setup();
        t.change_track(&tracks, 1).unwrap();
        let before = t.state().clone();
        let n = calls(&rec).len();
        assert_eq!(
            t.change_track(&tracks, 5),
            Err(TransportError::OutOfRange { index: 5, len: 5 })
        );
        assert_eq!(t.state(), &before);
        assert_eq!(calls(&rec).len(), n);
    }

    #[test]
    fn toggle_play_pauses_and_resumes() {
        let (mut t, rec, tracks) = setup();
        t.load_current(&tracks).unwrap();
        t.on_source_ready(LoadId(1));
        assert!(!calls(&rec).contains(&Call::Play));

        t.toggle_play(&tracks).unwrap();
        assert!(t.state().is_playing);
        assert_eq!(calls(&rec).last(), Some(&Call::Play));

        t.toggle_play(&tracks).unwrap();
        assert!(!t.state().is_playing);
        assert_eq!(calls(&rec).last(), Some(&Call::Pause));
    }

    #[test]
    fn pause_before_ready_cancels_pending_play() {
        let (mut t, rec, tracks) = setup();
        t.change_track(&tracks, 0).unwrap();
        t.toggle_play(&tracks).unwrap();
        t.on_source_ready(LoadId(1));
        assert!(!calls(&rec).contains(&Call::Play));
    }

    #[test]
    fn ended_advances_only_for_current_load() {
        let (mut t, _rec, tracks) = setup();
        t.change_track(&tracks, 1).unwrap();
        t.change_track(&tracks, 2).unwrap();
        t.on_track_ended(&tracks, LoadId(1)).unwrap();
        assert_eq!(t.state().current_track_index, 2);
        t.on_track_ended(&tracks, LoadId(2)).unwrap();
        assert_eq!(t.state().current_track_index, 3);
    }

    #[test]
    fn ended_after_pause_does_not_resume() {
        let (mut t, rec, tracks) = setup();
        t.change_track(&tracks, 1).unwrap();
        t.on_source_ready(LoadId(1));
        t.toggle_play(&tracks).unwrap();
        assert!(!t.state().is_playing);
        let n = calls(&rec).len();

        t.on_track_ended(&tracks, LoadId(1)).unwrap();
        assert_eq!(t.state().current_track_index, 1);
        assert!(!t.state().is_playing);
        assert_eq!(calls(&rec).len(), n);
    }

    #[test]
    fn seek_scales_by_duration() {
        let (mut t, rec, tracks) = setup();
        t.seek(&tracks, 0.5).unwrap();
        assert_eq!(t.state().current_time, 118.5);
        assert_eq!(calls(&rec).last(), Some(&Call::Seek(118.5)));

        t.seek(&tracks, 2.0).unwrap();
        assert_eq!(t.state().current_time, 237.0);
        assert_eq!(t.seek(&tracks, f64::NAN), Err(TransportError::InvalidPosition));
    }

    #[test]
    fn tick_clamps_backend_position() {
        let (mut t, rec, tracks) = setup();
        rec.borrow_mut().position = 1000.0;
        t.tick(&tracks).unwrap();
        assert_eq!(t.state().current_time, 237.0);
        rec.borrow_mut().position = -3.0;
        t.tick(&tracks).unwrap();
        assert_eq!(t.state().current_time, 0.0);
    }

    #[test]
    fn volume_is_clamped() {
        let (mut t, rec, tracks) = setup();
        t.set_volume(&tracks, -0.5).unwrap();
        assert_eq!(t.state().volume, 0.0);
        assert_eq!(calls(&rec).last(), Some(&Call::Volume(0.0)));
        t.set_volume(&tracks, 1.5).unwrap();
        assert_eq!(t.state().volume, 1.0);
        assert_eq!(calls(&rec).last(), Some(&Call::Volume(1.0)));
    }

    #[test]
    fn empty_catalog_makes_everything_a_noop() {
        let (mut t, rec, _) = setup();
        let tracks: Vec<Track> = Vec::new();
        let before = t.state().clone();
        assert_eq!(t.toggle_play(&tracks), Err(TransportError::EmptyCatalog));
        assert_eq!(t.change_track(&tracks, 0), Err(TransportError::EmptyCatalog));
        assert_eq!(t.play_next(&tracks), Err(TransportError::EmptyCatalog));
        assert_eq!(t.play_previous(&tracks), Err(TransportError::EmptyCatalog));
        assert_eq!(t.tick(&tracks), Err(TransportError::EmptyCatalog));
        assert_eq!(t.seek(&tracks, 0.5), Err(TransportError::EmptyCatalog));
        assert_eq!(t.set_volume(&tracks, 0.2), Err(TransportError::EmptyCatalog));
        assert_eq!(t.state(), &before);
        assert!(calls(&rec).is_empty());
    }
}
