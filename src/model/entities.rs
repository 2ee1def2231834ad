//! Entity rows of the snapshot
//!
//! Rows are plain data; foreign keys are stored as ids and resolved by the
//! store and index layer, where dangling references are treated as absent.

use super::types::{AlbumId, CityId, EventId, PhotoId, UserId};
use serde::{Deserialize, Serialize};

/// Gender as recorded on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// Any other value, or no value at all
    #[default]
    #[serde(other)]
    Unknown,
}

impl Gender {
    /// Same known gender. `Unknown` never matches, not even itself.
    pub fn matches(self, other: Gender) -> bool {
        self != Gender::Unknown && self == other
    }
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<Gender, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Gender>::deserialize(deserializer)?.unwrap_or_default())
}

/// Date of birth; every component may be missing independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDate {
    #[serde(rename = "year_of_birth")]
    pub year: Option<i32>,
    #[serde(rename = "month_of_birth")]
    pub month: Option<i32>,
    #[serde(rename = "day_of_birth")]
    pub day: Option<i32>,
}

impl BirthDate {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        BirthDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_unknown")]
    pub gender: Gender,
    #[serde(flatten)]
    pub birth: BirthDate,
}

impl User {
    /// Create a user with unknown gender and no birth date
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        User {
            id: UserId::new(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: Gender::Unknown,
            birth: BirthDate::default(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth(mut self, birth: BirthDate) -> Self {
        self.birth = birth;
        self
    }

    /// Shorthand for a fully known birth date
    pub fn born(self, year: i32, month: i32, day: i32) -> Self {
        self.with_birth(BirthDate::new(year, month, day))
    }
}

/// Unordered friendship, stored with the smaller id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Friendship {
    pub user1_id: UserId,
    pub user2_id: UserId,
}

impl Friendship {
    /// Build the canonical pair regardless of argument order
    pub fn new(a: i64, b: i64) -> Self {
        Friendship::between(UserId::new(a), UserId::new(b))
    }

    pub fn between(a: UserId, b: UserId) -> Self {
        if a <= b {
            Friendship { user1_id: a, user2_id: b }
        } else {
            Friendship { user1_id: b, user2_id: a }
        }
    }

    /// Canonical form of a row that may have been loaded unordered
    pub fn canonical(self) -> Self {
        Friendship::between(self.user1_id, self.user2_id)
    }

    pub fn is_self_pair(&self) -> bool {
        self.user1_id == self.user2_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "city_id")]
    pub id: CityId,
    #[serde(rename = "city_name")]
    pub name: String,
    #[serde(rename = "state_name", default)]
    pub state: Option<String>,
}

impl City {
    pub fn new(id: i64, name: impl Into<String>, state: Option<&str>) -> Self {
        City {
            id: CityId::new(id),
            name: name.into(),
            state: state.map(str::to_string),
        }
    }
}

/// User to city link, used for both current and hometown cities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityLink {
    pub user_id: UserId,
    pub city_id: CityId,
}

impl CityLink {
    pub fn new(user_id: i64, city_id: i64) -> Self {
        CityLink {
            user_id: UserId::new(user_id),
            city_id: CityId::new(city_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "album_id")]
    pub id: AlbumId,
    #[serde(rename = "album_name")]
    pub name: String,
    #[serde(rename = "album_owner_id")]
    pub owner: UserId,
}

impl Album {
    pub fn new(id: i64, name: impl Into<String>, owner: i64) -> Self {
        Album {
            id: AlbumId::new(id),
            name: name.into(),
            owner: UserId::new(owner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(rename = "photo_id")]
    pub id: PhotoId,
    pub album_id: AlbumId,
    #[serde(rename = "photo_link")]
    pub link: String,
}

impl Photo {
    pub fn new(id: i64, album_id: i64, link: impl Into<String>) -> Self {
        Photo {
            id: PhotoId::new(id),
            album_id: AlbumId::new(album_id),
            link: link.into(),
        }
    }
}

/// A user tagged in a photo. The same (photo, subject) row may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "tag_photo_id")]
    pub photo_id: PhotoId,
    #[serde(rename = "tag_subject_id")]
    pub subject_id: UserId,
}

impl Tag {
    pub fn new(photo_id: i64, subject_id: i64) -> Self {
        Tag {
            photo_id: PhotoId::new(photo_id),
            subject_id: UserId::new(subject_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event_id")]
    pub id: EventId,
    #[serde(rename = "event_city_id", default)]
    pub city_id: Option<CityId>,
}

impl Event {
    pub fn new(id: i64, city_id: Option<i64>) -> Self {
        Event {
            id: EventId::new(id),
            city_id: city_id.map(CityId::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendship_is_canonical() {
        let f = Friendship::new(9, 5);
        assert_eq!(f.user1_id, UserId::new(5));
        assert_eq!(f.user2_id, UserId::new(9));
        assert_eq!(f, Friendship::new(5, 9));

        let loaded = Friendship {
            user1_id: UserId::new(9),
            user2_id: UserId::new(5),
        };
        assert_eq!(loaded.canonical(), f);
        assert!(Friendship::new(3, 3).is_self_pair());
    }

    #[test]
    fn test_gender_matching() {
        assert!(Gender::Male.matches(Gender::Male));
        assert!(!Gender::Male.matches(Gender::Female));
        assert!(!Gender::Unknown.matches(Gender::Unknown));
    }

    #[test]
    fn test_gender_deserialization() {
        let g: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(g, Gender::Female);
        let g: Gender = serde_json::from_str("\"nonbinary\"").unwrap();
        assert_eq!(g, Gender::Unknown);
    }

    #[test]
    fn test_user_row_deserialization() {
        let json = r#"{
            "user_id": 5,
            "first_name": "Arya",
            "last_name": "Stark",
            "gender": "female",
            "year_of_birth": 1990,
            "month_of_birth": 4
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new(5));
        assert_eq!(user.gender, Gender::Female);
        assert_eq!(user.birth.year, Some(1990));
        assert_eq!(user.birth.month, Some(4));
        assert_eq!(user.birth.day, None);

        let json = r#"{"user_id": 6, "first_name": "Hodor", "last_name": "", "gender": null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.gender, Gender::Unknown);
        assert_eq!(user.birth, BirthDate::default());
    }

    #[test]
    fn test_user_builder() {
        let user = User::new(1, "Jon", "Snow").with_gender(Gender::Male).born(1986, 12, 26);
        assert_eq!(user.birth, BirthDate::new(1986, 12, 26));
        assert_eq!(user.gender, Gender::Male);
    }
}
