//! Social network data model
//!
//! Immutable entity rows for users, friendships, cities, albums, photos,
//! tags and events, keyed by strongly typed ids.

pub mod entities;
pub mod types;

// Re-export main types
pub use entities::{Album, BirthDate, City, CityLink, Event, Friendship, Gender, Photo, Tag, User};
pub use types::{AlbumId, CityId, EventId, PhotoId, UserId};
