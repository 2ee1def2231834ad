//! Core identifier types for the social network snapshot

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                $name(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                $name(id)
            }
        }
    };
}

entity_id!(
    /// Unique, stable identifier for a user
    UserId
);

entity_id!(
    /// Unique identifier for a city
    CityId
);

entity_id!(
    /// Unique identifier for a photo album
    AlbumId
);

entity_id!(
    /// Unique identifier for a photo
    PhotoId
);

entity_id!(
    /// Unique identifier for an event
    EventId
);
