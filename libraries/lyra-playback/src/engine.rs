//! Playback engine - core orchestration
//!
//! Coordinates the audio handle lifecycle, queue, history, volume, and
//! position tracking. The engine is the sole writer of the handle.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    handle::{AudioBackend, AudioHandle, HandleEvent},
    history::RecentlyPlayed,
    position::PositionTracker,
    queue::PlayQueue,
    types::{EngineState, PlaybackConfig},
};
use lyra_core::types::Song;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Central playback engine
///
/// Process-wide singleton state for the persistent player: created once at
/// application start with defaults (no song, idle, volume 1.0, empty
/// queue/history) and mutated only through these operations. All
/// transitions occur through `&mut self` on one logical thread; handle
/// notifications are delivered into [`handle_event`](Self::handle_event)
/// one at a time in arrival order.
pub struct PlaybackEngine {
    state: EngineState,
    current_song: Option<Song>,
    volume: f32,

    /// Exclusively owned; at most one live handle at any time
    handle: Option<Box<dyn AudioHandle>>,

    /// Tag for the current handle, checked against incoming notifications
    generation: u64,

    queue: PlayQueue,
    history: RecentlyPlayed,
    position: PositionTracker,

    backend: Box<dyn AudioBackend>,

    /// Event buffer for presentation synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackEngine {
    /// Create a new playback engine
    pub fn new(backend: Box<dyn AudioBackend>, config: PlaybackConfig) -> Self {
        Self {
            state: EngineState::Idle,
            current_song: None,
            volume: config.volume,
            handle: None,
            generation: 0,
            queue: PlayQueue::new(),
            history: RecentlyPlayed::new(config.history_size),
            position: PositionTracker::new(),
            backend,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play a song, or resume the current one
    ///
    /// Passing the song already bound to a live handle resumes it in place
    /// without reloading. Passing a different song releases the previous
    /// handle, binds a new one at the current volume, and begins playback;
    /// the song is recorded in the recently-played history and matching
    /// queue entries get their play count bumped.
    ///
    /// `None` is reported as [`PlaybackError::NoSong`] and leaves all state
    /// unchanged.
    pub fn play(&mut self, song: Option<&Song>) -> Result<()> {
        let Some(song) = song else {
            error!("no song provided to play");
            self.push_event(PlaybackEvent::Error {
                message: "no song provided to play".to_string(),
            });
            return Err(PlaybackError::NoSong);
        };

        let is_current = self
            .current_song
            .as_ref()
            .is_some_and(|current| current.id == song.id);

        if is_current && self.handle.is_some() {
            debug!(song = %song.title, "resuming current song");
            if let Some(handle) = self.handle.as_mut() {
                handle.play();
            }
            // Still waiting on the resource: stay in Loading
            if self.state != EngineState::Loading {
                self.set_state(EngineState::Playing);
            }
            return Ok(());
        }

        self.load_and_play(song)
    }

    /// Pause the current song in place
    ///
    /// Position and resources are retained. No-op when no handle is live.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.pause();
            self.set_state(EngineState::Paused);
        }
    }

    /// Skip to the next queued song
    ///
    /// Dequeues the head of the queue and plays it. No-op when the queue
    /// is empty; playback of the current song is left alone.
    pub fn next(&mut self) -> Result<()> {
        let Some(song) = self.queue.pop_next() else {
            debug!("next: queue is empty");
            return Ok(());
        };

        self.push_event(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
        self.play(Some(&song))
    }

    /// Go back to the song before the current one in queue order
    ///
    /// The queue itself is not modified. Soft no-op (warning, no state
    /// mutation) when the current song is absent from the queue or is its
    /// first element.
    pub fn previous(&mut self) -> Result<()> {
        let Some(current_id) = self.current_song.as_ref().map(|s| s.id.clone()) else {
            warn!("previous: no song is currently bound");
            return Ok(());
        };

        let Some(prev) = self.queue.predecessor_of(&current_id).cloned() else {
            warn!("no previous song in the queue");
            return Ok(());
        };

        self.play(Some(&prev))
    }

    /// Append a song to the tail of the queue
    pub fn add_to_queue(&mut self, song: Song) {
        self.queue.push(song);
        self.push_event(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    // ===== Volume =====

    /// Set the volume level
    ///
    /// The value is stored and propagated as given; [0, 1] is the caller's
    /// contract. A live handle picks the change up immediately, without
    /// interrupting playback, and the next handle is constructed with it.
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(handle) = self.handle.as_mut() {
            handle.set_volume(volume);
        }
        self.volume = volume;
        self.push_event(PlaybackEvent::VolumeChanged { volume });
    }

    // ===== Seek & Position =====

    /// Seek the current song to a position
    ///
    /// Writes through to the live handle and updates the sampled offset
    /// immediately. Warns and does nothing when no handle is live.
    pub fn seek(&mut self, position: Duration) {
        match self.handle.as_mut() {
            Some(handle) => {
                handle.seek(position);
                self.position.set(position);
            }
            None => warn!("seek with no active audio handle"),
        }
    }

    /// Sample the live handle's playback offset
    ///
    /// The host drives this at a short fixed interval (~100 ms) while
    /// playing. Paused or idle ticks leave the last sampled offset in
    /// place so resuming does not reset the progress indicator.
    pub fn tick(&mut self) {
        if self.state != EngineState::Playing {
            return;
        }
        let Some(handle) = self.handle.as_ref() else {
            return;
        };

        let offset = handle.position();
        let duration = handle.duration();
        self.position.sample(offset);
        self.push_event(PlaybackEvent::PositionUpdate {
            position_ms: offset.as_millis() as u64,
            duration_ms: duration.map(|d| d.as_millis() as u64),
        });
    }

    // ===== Notifications =====

    /// Apply an asynchronous handle notification
    ///
    /// Events whose generation does not match the current handle are
    /// discarded; a superseded handle cannot affect the engine after its
    /// release.
    pub fn handle_event(&mut self, event: HandleEvent) {
        if event.generation() != self.generation || self.handle.is_none() {
            debug!(
                generation = event.generation(),
                current = self.generation,
                "discarding stale handle notification"
            );
            return;
        }

        match event {
            HandleEvent::Loaded { .. } => {
                // Informational: the handle begins playback itself
                debug!("audio resource loaded");
                if self.state == EngineState::Loading {
                    self.set_state(EngineState::Playing);
                }
            }
            HandleEvent::LoadFailed { message, .. } => {
                if let Some(song) = self.current_song.as_ref() {
                    error!(song = %song.title, error = %message, "failed to load audio");
                    self.push_event(PlaybackEvent::Error {
                        message: format!(
                            "failed to load audio for {}: {}",
                            song.title, message
                        ),
                    });
                }
                // Release the dead handle; a new play() call is the only retry
                self.handle = None;
                self.set_state(EngineState::Failed);
            }
            HandleEvent::Ended { .. } => {
                if let Some(song) = self.current_song.as_ref() {
                    debug!(song = %song.title, "song finished");
                    self.push_event(PlaybackEvent::SongFinished {
                        song_id: song.id.clone(),
                    });
                }
                // Handle and position stay at the end of the song
                self.set_state(EngineState::Paused);
                // Auto-advance; failures are surfaced through events/log
                let _ = self.next();
            }
        }
    }

    // ===== State Queries =====

    /// Current engine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The song bound to the active audio handle
    pub fn current_song(&self) -> Option<&Song> {
        self.current_song.as_ref()
    }

    /// Whether the engine is playing (or about to, while loading)
    pub fn is_playing(&self) -> bool {
        matches!(self.state, EngineState::Loading | EngineState::Playing)
    }

    /// Current volume level
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// All queued songs in play order
    pub fn queue(&self) -> Vec<&Song> {
        self.queue.get_all()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Recently-played history, most recent first
    pub fn recently_played(&self) -> Vec<&Song> {
        self.history.get_all()
    }

    /// Last sampled playback offset
    pub fn position(&self) -> Duration {
        self.position.offset()
    }

    /// Drain buffered playback events
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    /// Release any live handle and bind a new one for `song`
    fn load_and_play(&mut self, song: &Song) -> Result<()> {
        // At most one live handle: release before binding
        if let Some(old) = self.handle.take() {
            debug!("releasing previous audio handle");
            drop(old);
        }

        self.generation += 1;
        debug!(
            song = %song.title,
            url = %song.audio_url,
            generation = self.generation,
            "binding new audio handle"
        );

        match self.backend.load(song, self.volume, self.generation) {
            Ok(handle) => {
                let previous_song_id = self.current_song.as_ref().map(|s| s.id.clone());

                self.handle = Some(handle);
                self.current_song = Some(song.clone());
                self.position.reset();
                self.history.push(song.clone());
                self.queue.increment_play_count(&song.id);

                self.set_state(EngineState::Loading);
                self.push_event(PlaybackEvent::SongChanged {
                    song_id: song.id.clone(),
                    previous_song_id,
                });
                Ok(())
            }
            Err(err) => {
                error!(song = %song.title, error = %err, "failed to bind audio handle");
                self.set_state(EngineState::Failed);
                self.push_event(PlaybackEvent::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn set_state(&mut self, state: EngineState) {
        if self.state != state {
            self.state = state;
            self.push_event(PlaybackEvent::StateChanged { state });
        }
    }

    fn push_event(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}
