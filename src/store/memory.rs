//! In-memory entity store
//!
//! Every keyed table is an `IndexMap` sorted by id once at construction, so
//! collection reads are plain ordered scans.

use super::loader::RawEntities;
use super::{EntityStore, StoreResult};
use crate::model::{
    Album, AlbumId, City, CityId, CityLink, Event, EventId, Friendship, Photo, PhotoId, Tag, User,
    UserId,
};
use indexmap::IndexMap;
use std::hash::Hash;
use tracing::{info, warn};

/// Immutable snapshot tables
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: IndexMap<UserId, User>,
    friendships: Vec<Friendship>,
    cities: IndexMap<CityId, City>,
    current_cities: IndexMap<UserId, CityLink>,
    hometown_cities: IndexMap<UserId, CityLink>,
    albums: IndexMap<AlbumId, Album>,
    photos: IndexMap<PhotoId, Photo>,
    tags: Vec<Tag>,
    events: IndexMap<EventId, Event>,
}

impl InMemoryStore {
    /// Build the tables from loaded rows.
    ///
    /// Rows sharing a primary id keep the last one. Friendship rows are stored
    /// in canonical form and sorted; duplicates are left for the index layer.
    pub fn from_raw(raw: RawEntities) -> Self {
        let mut friendships: Vec<Friendship> =
            raw.friendships.into_iter().map(Friendship::canonical).collect();
        friendships.sort();

        let store = InMemoryStore {
            users: keyed("users", raw.users, |u| u.id),
            friendships,
            cities: keyed("cities", raw.cities, |c| c.id),
            current_cities: keyed("current_cities", raw.current_cities, |l| l.user_id),
            hometown_cities: keyed("hometown_cities", raw.hometown_cities, |l| l.user_id),
            albums: keyed("albums", raw.albums, |a| a.id),
            photos: keyed("photos", raw.photos, |p| p.id),
            tags: raw.tags,
            events: keyed("events", raw.events, |e| e.id),
        };

        info!(
            "Entity store ready: {} users, {} friendships, {} cities, {} albums, {} photos, {} tags, {} events",
            store.users.len(),
            store.friendships.len(),
            store.cities.len(),
            store.albums.len(),
            store.photos.len(),
            store.tags.len(),
            store.events.len()
        );
        store
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn keyed<K, T>(table: &str, rows: Vec<T>, key: impl Fn(&T) -> K) -> IndexMap<K, T>
where
    K: Hash + Eq + Ord + Copy,
{
    let mut map = IndexMap::with_capacity(rows.len());
    let mut duplicates = 0usize;
    for row in rows {
        if map.insert(key(&row), row).is_some() {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        warn!("Table {}: {} rows with a duplicate id replaced by a later row", table, duplicates);
    }
    map.sort_keys();
    map
}

impl EntityStore for InMemoryStore {
    fn users(&self) -> StoreResult<Vec<&User>> {
        Ok(self.users.values().collect())
    }

    fn friendships(&self) -> StoreResult<Vec<&Friendship>> {
        Ok(self.friendships.iter().collect())
    }

    fn cities(&self) -> StoreResult<Vec<&City>> {
        Ok(self.cities.values().collect())
    }

    fn current_cities(&self) -> StoreResult<Vec<&CityLink>> {
        Ok(self.current_cities.values().collect())
    }

    fn hometown_cities(&self) -> StoreResult<Vec<&CityLink>> {
        Ok(self.hometown_cities.values().collect())
    }

    fn albums(&self) -> StoreResult<Vec<&Album>> {
        Ok(self.albums.values().collect())
    }

    fn photos(&self) -> StoreResult<Vec<&Photo>> {
        Ok(self.photos.values().collect())
    }

    fn tags(&self) -> StoreResult<Vec<&Tag>> {
        Ok(self.tags.iter().collect())
    }

    fn events(&self) -> StoreResult<Vec<&Event>> {
        Ok(self.events.values().collect())
    }

    fn user(&self, id: UserId) -> StoreResult<Option<&User>> {
        Ok(self.users.get(&id))
    }

    fn city(&self, id: CityId) -> StoreResult<Option<&City>> {
        Ok(self.cities.get(&id))
    }

    fn album(&self, id: AlbumId) -> StoreResult<Option<&Album>> {
        Ok(self.albums.get(&id))
    }

    fn photo(&self, id: PhotoId) -> StoreResult<Option<&Photo>> {
        Ok(self.photos.get(&id))
    }
}
