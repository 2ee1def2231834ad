use fakebook::{
    Album, City, EntityStore, InMemoryStore, Photo, PhotoId, RawEntities, SnapshotIndex, User,
    UserId,
};

fn raw() -> RawEntities {
    let mut raw = RawEntities::new();
    for id in 1..=6 {
        raw.add_user(User::new(id, format!("User{}", id), "Test"));
    }
    raw.add_friendship(1, 2)
        .add_friendship(2, 1)
        .add_friendship(2, 3)
        .add_friendship(4, 5)
        .add_friendship(6, 6)
        .add_friendship(3, 404)
        .add_album(Album::new(1, "Album", 1))
        .add_photo(Photo::new(10, 1, "l10"))
        .add_photo(Photo::new(11, 1, "l11"))
        .add_tag(10, 3)
        .add_tag(10, 1)
        .add_tag(11, 1)
        .add_tag(10, 3)
        .add_city(City::new(7, "Springfield", None))
        .add_current_city(1, 7)
        .add_hometown_city(2, 7);
    raw
}

/// Same rows, every table in reverse order
fn reversed() -> RawEntities {
    let mut raw = raw();
    raw.users.reverse();
    raw.friendships.reverse();
    raw.photos.reverse();
    raw.tags.reverse();
    raw
}

#[test]
fn test_rebuild_yields_identical_index() {
    let store = InMemoryStore::from_raw(raw());
    let first = SnapshotIndex::build(&store).unwrap();
    let second = SnapshotIndex::build(&store).unwrap();
    assert_eq!(first, second);

    let other = InMemoryStore::from_raw(raw());
    assert_eq!(first, SnapshotIndex::build(&other).unwrap());
}

#[test]
fn test_row_order_does_not_change_index() {
    let a = SnapshotIndex::build(&InMemoryStore::from_raw(raw())).unwrap();
    let b = SnapshotIndex::build(&InMemoryStore::from_raw(reversed())).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.tag_groups(), b.tag_groups());
}

#[test]
fn test_adjacency_is_symmetric() {
    let index = SnapshotIndex::build(&InMemoryStore::from_raw(raw())).unwrap();

    for friendship in index.friendships() {
        assert!(friendship.user1_id < friendship.user2_id);
        assert!(index.are_friends(friendship.user1_id, friendship.user2_id));
        assert!(index.are_friends(friendship.user2_id, friendship.user1_id));
    }
    for id in 1..=6 {
        let user = UserId::new(id);
        for friend in index.friends_of(user) {
            assert!(index.friends_of(friend).any(|f| f == user));
        }
    }

    let stats = index.stats();
    assert_eq!(stats.friendships, 3);
    assert_eq!(stats.duplicate_friendships, 1);
    assert_eq!(stats.self_friendships, 1);
    assert_eq!(stats.dangling_friendships, 1);
}

#[test]
fn test_tag_indices_agree() {
    let store = InMemoryStore::from_raw(raw());
    let index = SnapshotIndex::build(&store).unwrap();

    assert_eq!(index.photo_tag_rows(PhotoId::new(10)).len(), 3);
    assert_eq!(index.photo_tags(PhotoId::new(10)).count(), 2);

    for photo in store.photos().unwrap() {
        for user in index.photo_tags(photo.id) {
            assert!(index.tagged_photos_of(user).any(|p| p == photo.id));
        }
    }
    let photos_of_one: Vec<PhotoId> = index.tagged_photos_of(UserId::new(1)).collect();
    assert_eq!(photos_of_one, vec![PhotoId::new(10), PhotoId::new(11)]);
}

#[test]
fn test_city_without_state() {
    let index = SnapshotIndex::build(&InMemoryStore::from_raw(raw())).unwrap();
    let city = index.current_city_of(UserId::new(1)).unwrap();
    assert_eq!(index.state_of_city(city), None);
    assert_eq!(index.hometown_city_of(UserId::new(2)), Some(city));
    assert_eq!(index.hometown_city_of(UserId::new(1)), None);
}
