//! Domain types for Lyra Player

mod ids;
mod playlist;
mod song;
mod user;

pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{Like, Playlist};
pub use song::Song;
pub use user::User;
