//! Media-playback collaborator.
//!
//! The transport talks to audio output through [`MediaBackend`]. The shipped
//! implementation, [`SimulatedBackend`], keeps a clock instead of decoding
//! audio: it reports a source ready after a load latency and reports the end
//! of a track once its duration has elapsed while playing. Notifications are
//! delivered on an unbounded channel, tagged with the [`LoadId`] of the load
//! they belong to.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Identifies one `load` call; notifications for older loads are stale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct MediaSource {
    pub uri: String,
    /// Seconds
    pub duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    /// The source from this load can start playing
    Ready(LoadId),
    /// Playback of this load reached the end
    Ended(LoadId),
}

pub type MediaEventReceiver = mpsc::UnboundedReceiver<MediaEvent>;

pub trait MediaBackend {
    /// Replace the current source. Playback stops and the position resets.
    fn load(&mut self, source: MediaSource) -> LoadId;
    /// Start or resume. May be ignored while the source is still loading.
    fn play(&mut self);
    fn pause(&mut self);
    fn seek_to(&mut self, seconds: f64);
    fn set_volume(&mut self, fraction: f32);
    fn current_time(&self) -> f64;
}

struct LoadedSource {
    id: LoadId,
    uri: String,
    duration: f64,
    ready_at: Instant,
}

pub struct SimulatedBackend {
    event_tx: mpsc::UnboundedSender<MediaEvent>,
    load_latency: Duration,
    next_load_id: u64,
    source: Option<LoadedSource>,
    position: f64,
    playing_since: Option<Instant>,
    volume: f32,
    ready_timer: Option<JoinHandle<()>>,
    end_timer: Option<JoinHandle<()>>,
}

impl SimulatedBackend {
    /// Create the backend and the receiving end of its notification channel
    pub fn new(load_latency: Duration) -> (Self, MediaEventReceiver) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let backend = Self {
            event_tx,
            load_latency,
            next_load_id: 0,
            source: None,
            position: 0.0,
            playing_since: None,
            volume: 1.0,
            ready_timer: None,
            end_timer: None,
        };
        (backend, event_rx)
    }

    #[cfg(test)]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }

    fn is_ready(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|s| Instant::now() >= s.ready_at)
    }

    fn cancel_end_timer(&mut self) {
        if let Some(handle) = self.end_timer.take() {
            handle.abort();
        }
    }

    fn arm_end_timer(&mut self) {
        self.cancel_end_timer();
        let Some(source) = &self.source else {
            return;
        };
        let remaining = (source.duration - self.position).max(0.0);
        let id = source.id;
        let tx = self.event_tx.clone();
        self.end_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs_f64(remaining)).await;
            let _ = tx.send(MediaEvent::Ended(id));
        }));
    }
}

impl MediaBackend for SimulatedBackend {
    fn load(&mut self, source: MediaSource) -> LoadId {
        if let Some(handle) = self.ready_timer.take() {
            handle.abort();
        }
        self.cancel_end_timer();

        self.next_load_id += 1;
        let id = LoadId(self.next_load_id);
        let ready_at = Instant::now() + self.load_latency;
        tracing::debug!(load_id = id.0, uri = %source.uri, "Loading source");

        self.source = Some(LoadedSource {
            id,
            uri: source.uri,
            duration: source.duration.max(0.0),
            ready_at,
        });
        self.position = 0.0;
        self.playing_since = None;

        let tx = self.event_tx.clone();
        self.ready_timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(ready_at).await;
            let _ = tx.send(MediaEvent::Ready(id));
        }));
        id
    }

    fn play(&mut self) {
        if !self.is_ready() {
            tracing::trace!("Play ignored, source not ready");
            return;
        }
        if self.is_playing() {
            return;
        }
        if let Some(source) = &self.source {
            if self.position >= source.duration {
                self.position = 0.0;
            }
            tracing::debug!(uri = %source.uri, position = self.position, volume = self.volume, "Playing");
        }
        self.playing_since = Some(Instant::now());
        self.arm_end_timer();
    }

    fn pause(&mut self) {
        self.position = self.current_time();
        self.playing_since = None;
        self.cancel_end_timer();
    }

    fn seek_to(&mut self, seconds: f64) {
        let Some(source) = &self.source else {
            return;
        };
        self.position = seconds.clamp(0.0, source.duration);
        if self.playing_since.is_some() {
            self.playing_since = Some(Instant::now());
            self.arm_end_timer();
        }
    }

    fn set_volume(&mut self, fraction: f32) {
        self.volume = fraction.clamp(0.0, 1.0);
    }

    fn current_time(&self) -> f64 {
        let Some(source) = &self.source else {
            return 0.0;
        };
        let elapsed = self
            .playing_since
            .map(|since| since.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        (self.position + elapsed).min(source.duration)
    }
}

impl Drop for SimulatedBackend {
    fn drop(&mut self) {
        if let Some(handle) = self.ready_timer.take() {
            handle.abort();
        }
        self.cancel_end_timer();
    }
}
