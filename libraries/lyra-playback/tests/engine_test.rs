//! Playback engine integration tests
//!
//! Scenario tests driven through a scripted audio backend that records
//! every handle it constructs and lets tests fire resource notifications.
//! Focus on real-world sequences: rapid song switches, resume, queue
//! navigation, and load failures.

use lyra_core::types::{Song, SongId};
use lyra_playback::{
    AudioBackend, AudioHandle, EngineState, HandleEvent, PlaybackConfig, PlaybackEngine,
    PlaybackError, Result,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ===== Test Helpers =====

fn create_song(id: &str, title: &str) -> Song {
    let mut song = Song::new(title, "Test Artist", "Test Album");
    song.id = SongId::new(id);
    song.duration_secs = 180;
    song.audio_url = format!("https://cdn.example.com/audio/{}.mp3", id);
    song
}

/// Observable state of one constructed handle
#[derive(Debug)]
struct HandleRecord {
    song_id: SongId,
    volume: f32,
    generation: u64,
    alive: bool,
    playing: bool,
    position: Duration,
}

struct ScriptedHandle {
    record: Arc<Mutex<HandleRecord>>,
}

impl AudioHandle for ScriptedHandle {
    fn play(&mut self) {
        self.record.lock().unwrap().playing = true;
    }

    fn pause(&mut self) {
        self.record.lock().unwrap().playing = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.record.lock().unwrap().volume = volume;
    }

    fn seek(&mut self, position: Duration) {
        self.record.lock().unwrap().position = position;
    }

    fn position(&self) -> Duration {
        self.record.lock().unwrap().position
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(180))
    }
}

impl Drop for ScriptedHandle {
    fn drop(&mut self) {
        let mut record = self.record.lock().unwrap();
        record.alive = false;
        record.playing = false;
    }
}

/// Backend double that records constructed handles
#[derive(Clone, Default)]
struct ScriptedBackend {
    records: Arc<Mutex<Vec<Arc<Mutex<HandleRecord>>>>>,
    fail_next_load: Arc<AtomicBool>,
}

impl ScriptedBackend {
    fn new() -> Self {
        Self::default()
    }

    /// Number of handles ever constructed
    fn load_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Number of handles not yet released
    fn live_count(&self) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.lock().unwrap().alive)
            .count()
    }

    fn record(&self, index: usize) -> Arc<Mutex<HandleRecord>> {
        self.records.lock().unwrap()[index].clone()
    }

    fn last_record(&self) -> Arc<Mutex<HandleRecord>> {
        self.records.lock().unwrap().last().unwrap().clone()
    }

    fn generation_of(&self, index: usize) -> u64 {
        self.record(index).lock().unwrap().generation
    }

    fn fail_next_load(&self) {
        self.fail_next_load.store(true, Ordering::SeqCst);
    }
}

impl AudioBackend for ScriptedBackend {
    fn load(&mut self, song: &Song, volume: f32, generation: u64) -> Result<Box<dyn AudioHandle>> {
        if self.fail_next_load.swap(false, Ordering::SeqCst) {
            return Err(PlaybackError::LoadFailed {
                song_id: song.id.clone(),
                message: "resource rejected".to_string(),
            });
        }

        let record = Arc::new(Mutex::new(HandleRecord {
            song_id: song.id.clone(),
            volume,
            generation,
            alive: true,
            // Begins playback as soon as the resource is ready
            playing: true,
            position: Duration::ZERO,
        }));
        self.records.lock().unwrap().push(record.clone());
        Ok(Box::new(ScriptedHandle { record }))
    }
}

fn engine_with_backend() -> (PlaybackEngine, ScriptedBackend) {
    let backend = ScriptedBackend::new();
    let engine = PlaybackEngine::new(Box::new(backend.clone()), PlaybackConfig::default());
    (engine, backend)
}

// ===== Handle Lifecycle =====

#[test]
fn at_most_one_live_handle_after_each_play() {
    let (mut engine, backend) = engine_with_backend();

    for id in ["1", "2", "3", "4"] {
        engine.play(Some(&create_song(id, "Song"))).unwrap();
        assert_eq!(backend.live_count(), 1, "after playing song {}", id);
    }

    assert_eq!(backend.load_count(), 4);
}

#[test]
fn replaying_current_song_resumes_without_reload() {
    let (mut engine, backend) = engine_with_backend();
    let song = create_song("1", "Song 1");

    engine.play(Some(&song)).unwrap();
    engine.play(Some(&song)).unwrap();

    // Same handle, no second construction
    assert_eq!(backend.load_count(), 1);
    assert!(backend.record(0).lock().unwrap().playing);
}

#[test]
fn pause_then_play_resumes_same_handle() {
    let (mut engine, backend) = engine_with_backend();
    let song = create_song("1", "Song 1");

    engine.play(Some(&song)).unwrap();
    engine.handle_event(HandleEvent::Loaded {
        generation: backend.generation_of(0),
    });

    engine.pause();
    assert!(!engine.is_playing());
    assert!(!backend.record(0).lock().unwrap().playing);

    engine.play(Some(&song)).unwrap();
    assert!(engine.is_playing());
    assert_eq!(engine.state(), EngineState::Playing);
    assert_eq!(backend.load_count(), 1);
    assert!(backend.record(0).lock().unwrap().playing);
}

#[test]
fn switching_songs_releases_previous_handle() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();
    engine.play(Some(&create_song("2", "Song 2"))).unwrap();

    assert!(!backend.record(0).lock().unwrap().alive);
    assert!(backend.record(1).lock().unwrap().alive);
    assert_eq!(engine.current_song().unwrap().id.as_str(), "2");
}

// ===== Stale Notifications =====

#[test]
fn stale_loaded_notification_is_discarded() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("a", "Song A"))).unwrap();
    let generation_a = backend.generation_of(0);

    // Supersede A before its resource finishes loading
    engine.play(Some(&create_song("b", "Song B"))).unwrap();

    engine.handle_event(HandleEvent::Loaded {
        generation: generation_a,
    });

    assert_eq!(engine.current_song().unwrap().id.as_str(), "b");
    // B is still loading; A's notification must not flip it to Playing
    assert_eq!(engine.state(), EngineState::Loading);

    engine.handle_event(HandleEvent::Loaded {
        generation: backend.generation_of(1),
    });
    assert_eq!(engine.state(), EngineState::Playing);
}

#[test]
fn stale_ended_notification_does_not_advance_queue() {
    let (mut engine, backend) = engine_with_backend();
    engine.add_to_queue(create_song("queued", "Queued Song"));

    engine.play(Some(&create_song("a", "Song A"))).unwrap();
    let generation_a = backend.generation_of(0);
    engine.play(Some(&create_song("b", "Song B"))).unwrap();

    engine.handle_event(HandleEvent::Ended {
        generation: generation_a,
    });

    assert_eq!(engine.current_song().unwrap().id.as_str(), "b");
    assert_eq!(engine.queue_len(), 1);
}

// ===== Queue Navigation =====

#[test]
fn next_plays_queue_head_and_discards_it() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("a", "Song A"))).unwrap();
    engine.add_to_queue(create_song("b", "Song B"));
    engine.add_to_queue(create_song("c", "Song C"));

    engine.next().unwrap();

    assert_eq!(engine.current_song().unwrap().id.as_str(), "b");
    assert!(engine.is_playing());
    let queue = engine.queue();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id.as_str(), "c");
    assert_eq!(backend.live_count(), 1);
}

#[test]
fn next_on_empty_queue_is_a_noop() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("a", "Song A"))).unwrap();
    engine.next().unwrap();

    assert_eq!(engine.current_song().unwrap().id.as_str(), "a");
    assert_eq!(backend.load_count(), 1);
    assert!(engine.is_playing());
}

#[test]
fn ended_notification_advances_to_next() {
    let (mut engine, backend) = engine_with_backend();

    engine.add_to_queue(create_song("b", "Song B"));
    engine.play(Some(&create_song("a", "Song A"))).unwrap();

    engine.handle_event(HandleEvent::Ended {
        generation: backend.generation_of(0),
    });

    assert_eq!(engine.current_song().unwrap().id.as_str(), "b");
    assert!(engine.is_playing());
    assert_eq!(engine.queue_len(), 0);
    assert_eq!(backend.live_count(), 1);
}

#[test]
fn ended_with_empty_queue_stops_without_looping() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("a", "Song A"))).unwrap();
    engine.handle_event(HandleEvent::Ended {
        generation: backend.generation_of(0),
    });

    assert_eq!(engine.current_song().unwrap().id.as_str(), "a");
    assert!(!engine.is_playing());
    assert_eq!(backend.load_count(), 1);
}

#[test]
fn previous_plays_predecessor_in_queue_order() {
    let (mut engine, backend) = engine_with_backend();

    engine.add_to_queue(create_song("1", "Song 1"));
    engine.add_to_queue(create_song("2", "Song 2"));
    engine.add_to_queue(create_song("3", "Song 3"));

    engine.play(Some(&create_song("2", "Song 2"))).unwrap();
    engine.previous().unwrap();

    assert_eq!(engine.current_song().unwrap().id.as_str(), "1");
    assert!(engine.is_playing());
    // Queue order is untouched by previous()
    assert_eq!(engine.queue_len(), 3);
    assert_eq!(backend.live_count(), 1);
}

#[test]
fn previous_at_queue_head_is_a_noop() {
    let (mut engine, backend) = engine_with_backend();

    engine.add_to_queue(create_song("1", "Song 1"));
    engine.add_to_queue(create_song("2", "Song 2"));

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();
    engine.previous().unwrap();

    assert_eq!(engine.current_song().unwrap().id.as_str(), "1");
    assert_eq!(backend.load_count(), 1);
    assert_eq!(engine.queue_len(), 2);
}

#[test]
fn previous_with_current_absent_from_queue_is_a_noop() {
    let (mut engine, backend) = engine_with_backend();

    engine.add_to_queue(create_song("1", "Song 1"));
    engine.add_to_queue(create_song("2", "Song 2"));

    engine.play(Some(&create_song("elsewhere", "Not Queued"))).unwrap();
    engine.previous().unwrap();

    assert_eq!(engine.current_song().unwrap().id.as_str(), "elsewhere");
    assert_eq!(backend.load_count(), 1);
}

// ===== Invalid Arguments =====

#[test]
fn play_none_reports_invalid_argument_and_changes_nothing() {
    let (mut engine, backend) = engine_with_backend();

    let result = engine.play(None);

    assert!(matches!(result, Err(PlaybackError::NoSong)));
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.current_song().is_none());
    assert_eq!(backend.load_count(), 0);
}

#[test]
fn play_none_with_song_already_playing_leaves_it_alone() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();
    let result = engine.play(None);

    assert!(result.is_err());
    assert_eq!(engine.current_song().unwrap().id.as_str(), "1");
    assert!(engine.is_playing());
    assert_eq!(backend.live_count(), 1);
}

// ===== Volume =====

#[test]
fn volume_propagates_to_live_handle_and_next_handle() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("x", "Song X"))).unwrap();
    engine.set_volume(0.3);

    assert_eq!(engine.volume(), 0.3);
    assert_eq!(backend.record(0).lock().unwrap().volume, 0.3);
    // Volume change does not interrupt playback
    assert!(backend.record(0).lock().unwrap().playing);

    engine.play(Some(&create_song("y", "Song Y"))).unwrap();
    assert_eq!(backend.record(1).lock().unwrap().volume, 0.3);
}

#[test]
fn volume_is_stored_without_a_handle() {
    let (mut engine, backend) = engine_with_backend();

    engine.set_volume(0.5);
    assert_eq!(engine.volume(), 0.5);

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();
    assert_eq!(backend.record(0).lock().unwrap().volume, 0.5);
}

// ===== Recently Played =====

#[test]
fn recently_played_is_bounded_and_deduplicated() {
    let (mut engine, _backend) = engine_with_backend();

    for i in 1..=6 {
        engine
            .play(Some(&create_song(&i.to_string(), "Song")))
            .unwrap();
    }

    let recent = engine.recently_played();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].id.as_str(), "6");
    assert_eq!(recent[4].id.as_str(), "2");

    // Replay an entry already in history: moves to front, no duplicate
    engine.play(Some(&create_song("3", "Song"))).unwrap();
    let recent = engine.recently_played();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].id.as_str(), "3");
    assert_eq!(
        recent.iter().filter(|s| s.id.as_str() == "3").count(),
        1
    );
}

#[test]
fn resume_does_not_touch_recently_played() {
    let (mut engine, _backend) = engine_with_backend();
    let song = create_song("1", "Song 1");

    engine.play(Some(&song)).unwrap();
    engine.pause();
    engine.play(Some(&song)).unwrap();

    assert_eq!(engine.recently_played().len(), 1);
}

// ===== Play Count =====

#[test]
fn play_count_bumped_on_matching_queue_entries_only() {
    let (mut engine, _backend) = engine_with_backend();

    engine.add_to_queue(create_song("1", "Song 1"));
    engine.add_to_queue(create_song("2", "Song 2"));

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();

    let queue = engine.queue();
    assert_eq!(queue[0].play_count, 1);
    assert_eq!(queue[1].play_count, 0);
}

// ===== Load Failures =====

#[test]
fn rejected_load_reports_error_and_stops() {
    let (mut engine, backend) = engine_with_backend();
    backend.fail_next_load();

    let result = engine.play(Some(&create_song("bad", "Broken Song")));

    assert!(matches!(result, Err(PlaybackError::LoadFailed { .. })));
    assert_eq!(engine.state(), EngineState::Failed);
    assert!(!engine.is_playing());
    assert_eq!(backend.live_count(), 0);
}

#[test]
fn async_load_failure_releases_handle_and_does_not_advance() {
    let (mut engine, backend) = engine_with_backend();
    engine.add_to_queue(create_song("queued", "Queued Song"));

    engine.play(Some(&create_song("bad", "Broken Song"))).unwrap();
    engine.handle_event(HandleEvent::LoadFailed {
        generation: backend.generation_of(0),
        message: "404".to_string(),
    });

    assert_eq!(engine.state(), EngineState::Failed);
    assert!(!engine.is_playing());
    assert_eq!(backend.live_count(), 0);
    // No automatic retry or advance
    assert_eq!(engine.queue_len(), 1);
    assert_eq!(backend.load_count(), 1);
}

#[test]
fn explicit_play_retries_after_failure() {
    let (mut engine, backend) = engine_with_backend();
    let song = create_song("1", "Song 1");

    backend.fail_next_load();
    assert!(engine.play(Some(&song)).is_err());

    engine.play(Some(&song)).unwrap();
    assert!(engine.is_playing());
    assert_eq!(backend.live_count(), 1);
}

// ===== Position & Seek =====

#[test]
fn tick_samples_position_and_pause_retains_it() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();
    engine.handle_event(HandleEvent::Loaded {
        generation: backend.generation_of(0),
    });

    backend.record(0).lock().unwrap().position = Duration::from_secs(42);
    engine.tick();
    assert_eq!(engine.position(), Duration::from_secs(42));

    engine.pause();
    engine.tick();
    assert_eq!(engine.position(), Duration::from_secs(42));
}

#[test]
fn seek_writes_through_to_handle_and_tracker() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();
    engine.seek(Duration::from_secs(95));

    assert_eq!(
        backend.record(0).lock().unwrap().position,
        Duration::from_secs(95)
    );
    assert_eq!(engine.position(), Duration::from_secs(95));
}

#[test]
fn new_song_resets_position() {
    let (mut engine, backend) = engine_with_backend();

    engine.play(Some(&create_song("1", "Song 1"))).unwrap();
    engine.handle_event(HandleEvent::Loaded {
        generation: backend.generation_of(0),
    });
    backend.record(0).lock().unwrap().position = Duration::from_secs(30);
    engine.tick();

    engine.play(Some(&create_song("2", "Song 2"))).unwrap();
    assert_eq!(engine.position(), Duration::ZERO);
}

// ===== Pause Boundaries =====

#[test]
fn pause_without_handle_is_a_noop() {
    let (mut engine, _backend) = engine_with_backend();

    engine.pause();
    assert_eq!(engine.state(), EngineState::Idle);
}
