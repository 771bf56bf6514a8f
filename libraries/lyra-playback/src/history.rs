//! Recently-played history
//!
//! Bounded, deduplicated, most-recent-first viewing history, independent
//! of the play queue.

use lyra_core::types::{Song, SongId};
use std::collections::VecDeque;

/// Default history capacity
const DEFAULT_CAPACITY: usize = 5;

/// Bounded most-recent-first history of played songs
///
/// Never contains two entries with the same song identifier: pushing a
/// song already present moves it to the front instead of duplicating.
#[derive(Debug, Clone)]
pub struct RecentlyPlayed {
    /// History buffer (most recent = front)
    songs: VecDeque<Song>,

    /// Maximum history size
    capacity: usize,
}

impl RecentlyPlayed {
    /// Create new history with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            songs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a song as just played
    ///
    /// Any existing entry with the same identifier is removed first, then
    /// the song is placed at the front and the history truncated to
    /// capacity.
    pub fn push(&mut self, song: Song) {
        if let Some(index) = self.songs.iter().position(|s| s.id == song.id) {
            self.songs.remove(index);
        }
        self.songs.push_front(song);
        self.songs.truncate(self.capacity);
    }

    /// Check whether a song is in the history
    pub fn contains(&self, id: &SongId) -> bool {
        self.songs.iter().any(|s| &s.id == id)
    }

    /// All history entries, most recent first
    pub fn get_all(&self) -> Vec<&Song> {
        self.songs.iter().collect()
    }

    /// Number of entries in the history
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Maximum history size
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.songs.clear();
    }
}

impl Default for RecentlyPlayed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_song(id: &str, title: &str) -> Song {
        let mut song = Song::new(title, "Test Artist", "Test Album");
        song.id = SongId::new(id);
        song
    }

    #[test]
    fn create_history() {
        let history = RecentlyPlayed::default();
        assert_eq!(history.capacity(), 5);
        assert!(history.is_empty());
    }

    #[test]
    fn most_recent_first() {
        let mut history = RecentlyPlayed::default();
        history.push(create_song("1", "Song 1"));
        history.push(create_song("2", "Song 2"));
        history.push(create_song("3", "Song 3"));

        let all = history.get_all();
        assert_eq!(all[0].id.as_str(), "3");
        assert_eq!(all[1].id.as_str(), "2");
        assert_eq!(all[2].id.as_str(), "1");
    }

    #[test]
    fn bounded_to_capacity() {
        let mut history = RecentlyPlayed::new(5);
        for i in 1..=7 {
            history.push(create_song(&i.to_string(), &format!("Song {}", i)));
        }

        assert_eq!(history.len(), 5);

        // Oldest two discarded
        let all = history.get_all();
        assert_eq!(all[0].id.as_str(), "7");
        assert_eq!(all[4].id.as_str(), "3");
        assert!(!history.contains(&SongId::new("1")));
        assert!(!history.contains(&SongId::new("2")));
    }

    #[test]
    fn replay_moves_to_front_without_duplicating() {
        let mut history = RecentlyPlayed::default();
        history.push(create_song("1", "Song 1"));
        history.push(create_song("2", "Song 2"));
        history.push(create_song("3", "Song 3"));

        history.push(create_song("1", "Song 1"));

        let all = history.get_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id.as_str(), "1");
        assert_eq!(all[1].id.as_str(), "3");
        assert_eq!(all[2].id.as_str(), "2");
    }

    #[test]
    fn clear_history() {
        let mut history = RecentlyPlayed::default();
        history.push(create_song("1", "Song 1"));

        history.clear();
        assert!(history.is_empty());
    }
}
