//! Raw entity collections and the JSON snapshot loader
//!
//! The loader is the collaborator that materialises the dataset before the
//! entity store is built. Nothing here validates foreign keys; that happens
//! when the index layer is built.

use crate::model::{Album, City, CityLink, Event, Friendship, Photo, Tag, User};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while reading a snapshot
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Every table of the snapshot, as loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntities {
    pub users: Vec<User>,
    pub friendships: Vec<Friendship>,
    pub cities: Vec<City>,
    pub current_cities: Vec<CityLink>,
    pub hometown_cities: Vec<CityLink>,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
    pub tags: Vec<Tag>,
    pub events: Vec<Event>,
}

impl RawEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot document
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file
    pub fn from_json_file(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let raw = Self::from_json_str(&content)?;
        info!(
            "Loaded snapshot from {:?}: {} users, {} friendships, {} photos, {} tags, {} events",
            path,
            raw.users.len(),
            raw.friendships.len(),
            raw.photos.len(),
            raw.tags.len(),
            raw.events.len()
        );
        Ok(raw)
    }

    pub fn add_user(&mut self, user: User) -> &mut Self {
        self.users.push(user);
        self
    }

    pub fn add_friendship(&mut self, a: i64, b: i64) -> &mut Self {
        self.friendships.push(Friendship::new(a, b));
        self
    }

    pub fn add_city(&mut self, city: City) -> &mut Self {
        self.cities.push(city);
        self
    }

    pub fn add_current_city(&mut self, user_id: i64, city_id: i64) -> &mut Self {
        self.current_cities.push(CityLink::new(user_id, city_id));
        self
    }

    pub fn add_hometown_city(&mut self, user_id: i64, city_id: i64) -> &mut Self {
        self.hometown_cities.push(CityLink::new(user_id, city_id));
        self
    }

    pub fn add_album(&mut self, album: Album) -> &mut Self {
        self.albums.push(album);
        self
    }

    pub fn add_photo(&mut self, photo: Photo) -> &mut Self {
        self.photos.push(photo);
        self
    }

    pub fn add_tag(&mut self, photo_id: i64, subject_id: i64) -> &mut Self {
        self.tags.push(Tag::new(photo_id, subject_id));
        self
    }

    pub fn add_event(&mut self, event: Event) -> &mut Self {
        self.events.push(event);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CityId, UserId};
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "users": [
            {"user_id": 1, "first_name": "Jon", "last_name": "Snow", "gender": "male", "year_of_birth": 1986},
            {"user_id": 2, "first_name": "Arya", "last_name": "Stark"}
        ],
        "friendships": [{"user1_id": 2, "user2_id": 1}],
        "cities": [{"city_id": 10, "city_name": "Winterfell", "state_name": "North"}],
        "hometown_cities": [{"user_id": 1, "city_id": 10}],
        "events": [{"event_id": 3, "event_city_id": 10}, {"event_id": 4}]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let raw = RawEntities::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(raw.users.len(), 2);
        assert_eq!(raw.friendships.len(), 1);
        assert_eq!(raw.hometown_cities[0].city_id, CityId::new(10));
        assert!(raw.current_cities.is_empty());
        assert!(raw.tags.is_empty());
        assert_eq!(raw.events[1].city_id, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let raw = RawEntities::from_json_file(file.path()).unwrap();
        assert_eq!(raw.users[0].id, UserId::new(1));
    }

    #[test]
    fn test_load_errors() {
        let missing = RawEntities::from_json_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(LoadError::Io(_))));

        let malformed = RawEntities::from_json_str("{\"users\": 3}");
        assert!(matches!(malformed, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_builder_helpers() {
        let mut raw = RawEntities::new();
        raw.add_user(User::new(1, "A", "B"))
            .add_friendship(5, 2)
            .add_tag(7, 1);
        assert_eq!(raw.friendships[0].user1_id, UserId::new(2));
        assert_eq!(raw.tags.len(), 1);
    }
}
