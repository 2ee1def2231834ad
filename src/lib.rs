//! Fakebook Analytics
//!
//! A read-only analytic query core over an in-memory social network snapshot:
//! demographics, friendship topology, photo tagging, events and geography.
//!
//! # Architecture
//!
//! - `model`: immutable entity rows keyed by typed ids
//! - `store`: the `EntityStore` read contract, the in-memory store, the JSON
//!   snapshot loader and the derived `SnapshotIndex`
//! - `algo`: adapter to the `fakebook-graph-algorithms` crate plus the
//!   attribute-aware pattern matchers
//! - `query`: aggregation and ranking helpers and the ten queries on
//!   `AnalyticsEngine`
//! - `config`: query parameters and YAML configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use fakebook::{AnalyticsEngine, InMemoryStore, RawEntities, User};
//!
//! let mut raw = RawEntities::new();
//! raw.add_user(User::new(1, "Jon", "Snow"))
//!     .add_user(User::new(2, "Arya", "Stark"))
//!     .add_user(User::new(3, "Sansa", "Stark"))
//!     .add_friendship(1, 2)
//!     .add_friendship(2, 3);
//!
//! let engine = AnalyticsEngine::new(InMemoryStore::from_raw(raw)).unwrap();
//!
//! // 1 and 3 are not friends but both know 2
//! let suggestions = engine.suggest_friends(5);
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].shared_friends[0].first_name, "Arya");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod model;
pub mod query;
pub mod store;

// Re-export main types for convenience
pub use model::{
    Album, AlbumId, BirthDate, City, CityId, CityLink, Event, EventId, Friendship, Gender, Photo,
    PhotoId, Tag, User, UserId,
};

pub use store::{
    EntityStore, IndexStats, InMemoryStore, LoadError, LoadResult, RawEntities, SnapshotIndex,
    StoreError, StoreResult,
};

pub use query::{
    AgeInfo, AnalyticsEngine, AnalyticsReport, BirthMonthInfo, EventStateInfo, FirstNameInfo,
    MatchPair, PhotoInfo, SiblingInfo, TaggedPhotoInfo, UserInfo, UsersPair,
};

pub use config::{AnalyticsConfig, ConfigError, ConfigResult, QueryParams};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
