//! Property tests for queue and history invariants
//!
//! Exercises arbitrary push sequences against the bounds the engine
//! relies on: history capacity + dedup, queue FIFO ordering.

use lyra_core::types::{Song, SongId};
use lyra_playback::{PlayQueue, RecentlyPlayed};
use proptest::prelude::*;

fn create_song(id: u8) -> Song {
    let mut song = Song::new(format!("Song {id}"), "Test Artist", "Test Album");
    song.id = SongId::new(format!("song-{id}"));
    song
}

proptest! {
    #[test]
    fn history_never_exceeds_capacity_or_duplicates(ids in prop::collection::vec(0u8..8, 0..64)) {
        let mut history = RecentlyPlayed::new(5);
        for id in &ids {
            history.push(create_song(*id));
        }

        prop_assert!(history.len() <= 5);

        // No duplicate identifiers
        let all = history.get_all();
        for (i, song) in all.iter().enumerate() {
            for other in &all[i + 1..] {
                prop_assert_ne!(&song.id, &other.id);
            }
        }

        // Last push is always at the front
        if let Some(last) = ids.last() {
            prop_assert_eq!(all[0].id.as_str(), format!("song-{last}"));
        }
    }

    #[test]
    fn queue_preserves_fifo_order(ids in prop::collection::vec(0u8..8, 0..32)) {
        let mut queue = PlayQueue::new();
        for id in &ids {
            queue.push(create_song(*id));
        }

        prop_assert_eq!(queue.len(), ids.len());

        for id in &ids {
            let song = queue.pop_next().unwrap();
            prop_assert_eq!(song.id.as_str(), format!("song-{id}"));
        }
        prop_assert!(queue.pop_next().is_none());
    }
}
