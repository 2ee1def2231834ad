//! Index layer
//!
//! Derived lookup structures built once from an [`EntityStore`]:
//! - symmetric friend adjacency
//! - photo to tagged users (distinct and raw rows)
//! - user to tagged photos
//! - city to state, and user to current/hometown city
//!
//! Foreign keys are validated here. Rows that reference unknown entities are
//! dropped and counted in [`IndexStats`], so query code never sees a dangling id.

use super::{EntityStore, StoreResult};
use crate::model::{CityId, Friendship, PhotoId, UserId};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// What happened to the raw rows while the index was built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub users: usize,
    pub friendships: usize,
    pub duplicate_friendships: usize,
    pub self_friendships: usize,
    pub dangling_friendships: usize,
    pub tags: usize,
    pub dangling_tags: usize,
    pub unresolvable_photos: usize,
    pub dangling_city_links: usize,
}

impl IndexStats {
    /// Rows dropped or merged during the build
    pub fn rejected(&self) -> usize {
        self.duplicate_friendships
            + self.self_friendships
            + self.dangling_friendships
            + self.dangling_tags
            + self.unresolvable_photos
            + self.dangling_city_links
    }
}

/// Immutable lookup structures over one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotIndex {
    friendships: Vec<Friendship>,
    friend_adjacency: FxHashMap<UserId, BTreeSet<UserId>>,
    resolvable_photos: BTreeSet<PhotoId>,
    photo_tags: FxHashMap<PhotoId, BTreeSet<UserId>>,
    photo_tag_rows: FxHashMap<PhotoId, Vec<UserId>>,
    user_tagged_photos: FxHashMap<UserId, BTreeSet<PhotoId>>,
    city_state: FxHashMap<CityId, Option<String>>,
    current_city: FxHashMap<UserId, CityId>,
    hometown_city: FxHashMap<UserId, CityId>,
    stats: IndexStats,
}

impl SnapshotIndex {
    /// Build every index from the store.
    ///
    /// Fails only if the store itself cannot be read.
    pub fn build(store: &dyn EntityStore) -> StoreResult<SnapshotIndex> {
        let mut index = SnapshotIndex::default();

        let users: FxHashSet<UserId> = store.users()?.iter().map(|u| u.id).collect();
        index.stats.users = users.len();

        // Friendships: canonical, deduplicated, both endpoints known
        let mut seen: FxHashSet<Friendship> = FxHashSet::default();
        for row in store.friendships()? {
            let pair = row.canonical();
            if pair.is_self_pair() {
                index.stats.self_friendships += 1;
                continue;
            }
            if !users.contains(&pair.user1_id) || !users.contains(&pair.user2_id) {
                index.stats.dangling_friendships += 1;
                continue;
            }
            if !seen.insert(pair) {
                index.stats.duplicate_friendships += 1;
                continue;
            }
            index.friendships.push(pair);
            index
                .friend_adjacency
                .entry(pair.user1_id)
                .or_default()
                .insert(pair.user2_id);
            index
                .friend_adjacency
                .entry(pair.user2_id)
                .or_default()
                .insert(pair.user1_id);
        }
        index.friendships.sort();
        index.stats.friendships = index.friendships.len();

        // Photos resolve only through a known album
        for photo in store.photos()? {
            if store.album(photo.album_id)?.is_some() {
                index.resolvable_photos.insert(photo.id);
            } else {
                index.stats.unresolvable_photos += 1;
            }
        }

        for tag in store.tags()? {
            if !index.resolvable_photos.contains(&tag.photo_id)
                || !users.contains(&tag.subject_id)
            {
                index.stats.dangling_tags += 1;
                continue;
            }
            index.stats.tags += 1;
            index
                .photo_tag_rows
                .entry(tag.photo_id)
                .or_default()
                .push(tag.subject_id);
            index
                .photo_tags
                .entry(tag.photo_id)
                .or_default()
                .insert(tag.subject_id);
            index
                .user_tagged_photos
                .entry(tag.subject_id)
                .or_default()
                .insert(tag.photo_id);
        }
        for rows in index.photo_tag_rows.values_mut() {
            rows.sort_unstable();
        }

        for city in store.cities()? {
            index.city_state.insert(city.id, city.state.clone());
        }

        for link in store.current_cities()? {
            if index.city_state.contains_key(&link.city_id) {
                index.current_city.insert(link.user_id, link.city_id);
            } else {
                index.stats.dangling_city_links += 1;
            }
        }
        for link in store.hometown_cities()? {
            if index.city_state.contains_key(&link.city_id) {
                index.hometown_city.insert(link.user_id, link.city_id);
            } else {
                index.stats.dangling_city_links += 1;
            }
        }

        let stats = index.stats;
        info!(
            "Snapshot index built: {} users, {} friendships, {} tags, {} photos",
            stats.users,
            stats.friendships,
            stats.tags,
            index.resolvable_photos.len()
        );
        if stats.rejected() > 0 {
            warn!(
                "Snapshot index dropped rows: {} duplicate friendships, {} self friendships, {} dangling friendships, {} dangling tags, {} unresolvable photos, {} dangling city links",
                stats.duplicate_friendships,
                stats.self_friendships,
                stats.dangling_friendships,
                stats.dangling_tags,
                stats.unresolvable_photos,
                stats.dangling_city_links
            );
        }

        Ok(index)
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Validated, deduplicated friendships in canonical order
    pub fn friendships(&self) -> &[Friendship] {
        &self.friendships
    }

    /// Friends of a user in ascending id order
    pub fn friends_of(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        self.friend_adjacency.get(&user).into_iter().flatten().copied()
    }

    pub fn friend_count(&self, user: UserId) -> usize {
        self.friend_adjacency.get(&user).map_or(0, BTreeSet::len)
    }

    pub fn has_friends(&self, user: UserId) -> bool {
        self.friend_count(user) > 0
    }

    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.friend_adjacency
            .get(&a)
            .is_some_and(|friends| friends.contains(&b))
    }

    /// Whether the photo exists and belongs to a known album
    pub fn is_resolvable_photo(&self, photo: PhotoId) -> bool {
        self.resolvable_photos.contains(&photo)
    }

    /// Distinct users tagged in a photo, ascending
    pub fn photo_tags(&self, photo: PhotoId) -> impl Iterator<Item = UserId> + '_ {
        self.photo_tags.get(&photo).into_iter().flatten().copied()
    }

    /// Every tag row of a photo (repeats included), sorted by subject
    pub fn photo_tag_rows(&self, photo: PhotoId) -> &[UserId] {
        self.photo_tag_rows
            .get(&photo)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All tagged photos with their raw tag rows, ordered by photo id
    pub fn tag_groups(&self) -> Vec<(PhotoId, &[UserId])> {
        let mut groups: Vec<(PhotoId, &[UserId])> = self
            .photo_tag_rows
            .iter()
            .map(|(&photo, rows)| (photo, rows.as_slice()))
            .collect();
        groups.sort_unstable_by_key(|(photo, _)| *photo);
        groups
    }

    /// Photos a user is tagged in, ascending
    pub fn tagged_photos_of(&self, user: UserId) -> impl Iterator<Item = PhotoId> + '_ {
        self.user_tagged_photos.get(&user).into_iter().flatten().copied()
    }

    /// State of a city; `None` if the city is unknown or has no state
    pub fn state_of_city(&self, city: CityId) -> Option<&str> {
        self.city_state.get(&city).and_then(|state| state.as_deref())
    }

    pub fn current_city_of(&self, user: UserId) -> Option<CityId> {
        self.current_city.get(&user).copied()
    }

    pub fn hometown_city_of(&self, user: UserId) -> Option<CityId> {
        self.hometown_city.get(&user).copied()
    }
}
