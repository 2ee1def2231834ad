//! Structured query results
//!
//! Failure sentinels are named constructors so callers can compare against them.

use crate::model::{Album, AlbumId, Photo, PhotoId, User, UserId};
use serde::{Deserialize, Serialize};

/// Identity of a user as reported by queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl UserInfo {
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        UserInfo {
            user_id: UserId::new(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Placeholder user reported when a lookup fails
    pub fn error() -> Self {
        UserInfo::new(-1, "ERROR", "ERROR")
    }
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Q0: birth month summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMonthInfo {
    /// Users with a known birth month
    pub total: i64,
    pub most_month: i32,
    pub least_month: i32,
    pub most_month_users: Vec<UserInfo>,
    pub least_month_users: Vec<UserInfo>,
}

impl BirthMonthInfo {
    /// Nobody has a known birth month
    pub fn empty() -> Self {
        BirthMonthInfo {
            total: 0,
            most_month: 0,
            least_month: 0,
            most_month_users: Vec::new(),
            least_month_users: Vec::new(),
        }
    }

    pub fn error() -> Self {
        BirthMonthInfo {
            total: -1,
            most_month: -1,
            least_month: -1,
            most_month_users: Vec::new(),
            least_month_users: Vec::new(),
        }
    }
}

/// Q1: first name statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstNameInfo {
    pub long_names: Vec<String>,
    pub short_names: Vec<String>,
    pub common_names: Vec<String>,
    /// Occurrences of each of the common names
    pub common_name_count: usize,
}

/// A photo joined with its album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoInfo {
    pub photo_id: PhotoId,
    pub album_id: AlbumId,
    pub album_name: String,
    pub link: String,
}

impl PhotoInfo {
    pub fn new(photo: &Photo, album: &Album) -> Self {
        PhotoInfo {
            photo_id: photo.id,
            album_id: album.id,
            album_name: album.name.clone(),
            link: photo.link.clone(),
        }
    }
}

/// Q4: a ranked photo and everyone tagged in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedPhotoInfo {
    pub photo: PhotoInfo,
    /// Tag rows counted for the ranking
    pub tag_count: usize,
    pub tagged_users: Vec<UserInfo>,
}

/// Q5: two users who could be introduced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub user1: UserInfo,
    pub user1_birth_year: i32,
    pub user2: UserInfo,
    pub user2_birth_year: i32,
    /// Join weight used for the ranking
    pub shared_tag_count: u64,
    pub shared_photos: Vec<PhotoInfo>,
}

/// Q6: two non-friends with friends in common
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPair {
    pub user1: UserInfo,
    pub user2: UserInfo,
    pub shared_friends: Vec<UserInfo>,
}

/// Q7: busiest states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStateInfo {
    pub event_count: i64,
    pub states: Vec<String>,
}

impl EventStateInfo {
    pub fn empty() -> Self {
        EventStateInfo {
            event_count: 0,
            states: Vec::new(),
        }
    }

    pub fn error() -> Self {
        EventStateInfo {
            event_count: -1,
            states: Vec::new(),
        }
    }
}

/// Q8: oldest and youngest friend of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeInfo {
    pub oldest: UserInfo,
    pub youngest: UserInfo,
}

impl AgeInfo {
    pub fn error() -> Self {
        AgeInfo {
            oldest: UserInfo::error(),
            youngest: UserInfo::error(),
        }
    }
}

/// Q9: friends who are likely siblings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingInfo {
    pub user1: UserInfo,
    pub user2: UserInfo,
}

/// Output of every query over one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub birth_months: BirthMonthInfo,
    pub first_names: FirstNameInfo,
    pub lonely_users: Vec<UserInfo>,
    pub live_away_from_home: Vec<UserInfo>,
    pub top_tagged_photos: Vec<TaggedPhotoInfo>,
    pub match_pairs: Vec<MatchPair>,
    pub friend_suggestions: Vec<UsersPair>,
    pub event_states: EventStateInfo,
    /// Present when a user was configured for the age query
    pub age_info: Option<AgeInfo>,
    pub potential_siblings: Vec<SiblingInfo>,
}
