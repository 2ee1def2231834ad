//! Entity store and index layer
//!
//! `EntityStore` is the single read contract the query engine depends on.
//! `InMemoryStore` is the concrete implementation over a loaded snapshot, and
//! `SnapshotIndex` holds the derived lookup structures built once from any
//! store before queries run.

pub mod index;
pub mod loader;
pub mod memory;

pub use index::{IndexStats, SnapshotIndex};
pub use loader::{LoadError, LoadResult, RawEntities};
pub use memory::InMemoryStore;

use crate::model::{
    Album, AlbumId, City, CityId, CityLink, Event, Friendship, Photo, PhotoId, Tag, User, UserId,
};
use thiserror::Error;

/// Data-access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not complete a read
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backing store returned data that violates its own contract
    #[error("Store corrupted: {0}")]
    Corrupted(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to the entity tables of one snapshot.
///
/// Collection reads return rows ordered by their primary id (links by user id,
/// friendships by canonical pair). Tags have no key and come back in load order.
pub trait EntityStore: Send + Sync {
    fn users(&self) -> StoreResult<Vec<&User>>;
    fn friendships(&self) -> StoreResult<Vec<&Friendship>>;
    fn cities(&self) -> StoreResult<Vec<&City>>;
    fn current_cities(&self) -> StoreResult<Vec<&CityLink>>;
    fn hometown_cities(&self) -> StoreResult<Vec<&CityLink>>;
    fn albums(&self) -> StoreResult<Vec<&Album>>;
    fn photos(&self) -> StoreResult<Vec<&Photo>>;
    fn tags(&self) -> StoreResult<Vec<&Tag>>;
    fn events(&self) -> StoreResult<Vec<&Event>>;

    fn user(&self, id: UserId) -> StoreResult<Option<&User>>;
    fn city(&self, id: CityId) -> StoreResult<Option<&City>>;
    fn album(&self, id: AlbumId) -> StoreResult<Option<&Album>>;
    fn photo(&self, id: PhotoId) -> StoreResult<Option<&Photo>>;
}
