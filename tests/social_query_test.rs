use fakebook::{
    AgeInfo, AnalyticsEngine, BirthDate, City, Event, EventStateInfo, InMemoryStore, RawEntities,
    User, UserId,
};

fn engine(raw: RawEntities) -> AnalyticsEngine<InMemoryStore> {
    AnalyticsEngine::new(InMemoryStore::from_raw(raw)).unwrap()
}

fn users(raw: &mut RawEntities, ids: impl IntoIterator<Item = i64>) {
    for id in ids {
        raw.add_user(User::new(id, format!("User{}", id), "Test"));
    }
}

fn id_list(users: &[fakebook::UserInfo]) -> Vec<i64> {
    users.iter().map(|u| u.user_id.as_i64()).collect()
}

/// 1-2, 1-3, 2-4, 3-4, 4-5
fn square_with_tail() -> RawEntities {
    let mut raw = RawEntities::new();
    users(&mut raw, 1..=5);
    raw.add_friendship(1, 2)
        .add_friendship(3, 1)
        .add_friendship(2, 4)
        .add_friendship(4, 3)
        .add_friendship(5, 4);
    raw
}

#[test]
fn test_suggest_friends_ranking() {
    let engine = engine(square_with_tail());

    let pairs = engine.suggest_friends(3);
    let keys: Vec<(i64, i64, usize)> = pairs
        .iter()
        .map(|p| {
            (
                p.user1.user_id.as_i64(),
                p.user2.user_id.as_i64(),
                p.shared_friends.len(),
            )
        })
        .collect();
    // (3,5) ties with (2,5) on one common friend and falls past the cutoff
    assert_eq!(keys, vec![(1, 4, 2), (2, 3, 2), (2, 5, 1)]);
    assert_eq!(id_list(&pairs[0].shared_friends), vec![2, 3]);
    assert_eq!(id_list(&pairs[1].shared_friends), vec![1, 4]);
}

#[test]
fn test_suggest_friends_never_suggests_friends() {
    let engine = engine(square_with_tail());

    let all = engine.suggest_friends(100);
    assert_eq!(all.len(), 4);
    for pair in &all {
        assert!(pair.user1.user_id < pair.user2.user_id);
        assert!(!engine.index().are_friends(pair.user1.user_id, pair.user2.user_id));
    }
    assert!(engine.suggest_friends(0).is_empty());
}

#[test]
fn test_suggest_friends_ignores_duplicate_rows() {
    let mut raw = square_with_tail();
    raw.add_friendship(2, 1).add_friendship(1, 2);
    let pairs = engine(raw).suggest_friends(1);
    assert_eq!(id_list(&pairs[0].shared_friends), vec![2, 3]);
}

#[test]
fn test_age_info_extremes() {
    let mut raw = RawEntities::new();
    users(&mut raw, [1]);
    raw.add_user(User::new(10, "Ten", "Test").born(1990, 5, 1))
        .add_user(User::new(20, "Twenty", "Test").born(1985, 12, 31))
        .add_user(User::new(30, "Thirty", "Test").born(1990, 5, 1))
        .add_friendship(1, 10)
        .add_friendship(1, 20)
        .add_friendship(30, 1);

    let info = engine(raw).age_info(UserId::new(1));
    assert_eq!(info.oldest.user_id, UserId::new(20));
    assert_eq!(info.youngest.user_id, UserId::new(10));
    assert_eq!(info.youngest.first_name, "Ten");
}

#[test]
fn test_age_info_oldest_tie_goes_to_highest_id() {
    let mut raw = RawEntities::new();
    users(&mut raw, [1]);
    raw.add_user(User::new(40, "Forty", "Test").born(1980, 1, 1))
        .add_user(User::new(50, "Fifty", "Test").born(1980, 1, 1))
        .add_friendship(1, 40)
        .add_friendship(1, 50);

    let info = engine(raw).age_info(UserId::new(1));
    assert_eq!(info.oldest.user_id, UserId::new(50));
    assert_eq!(info.youngest.user_id, UserId::new(40));
}

#[test]
fn test_age_info_missing_components_sort_last() {
    let mut raw = RawEntities::new();
    users(&mut raw, [1]);
    raw.add_user(User::new(60, "Sixty", "Test").with_birth(BirthDate {
        year: Some(1990),
        month: None,
        day: None,
    }))
    .add_user(User::new(70, "Seventy", "Test").born(1990, 5, 1))
    .add_friendship(1, 60)
    .add_friendship(1, 70);

    let info = engine(raw).age_info(UserId::new(1));
    assert_eq!(info.oldest.user_id, UserId::new(70));
    assert_eq!(info.youngest.user_id, UserId::new(60));
}

#[test]
fn test_age_info_without_friends() {
    let connected = engine(square_with_tail());
    let mut raw = RawEntities::new();
    users(&mut raw, [1, 2]);
    let lonely = engine(raw);

    assert_eq!(lonely.age_info(UserId::new(1)), AgeInfo::error());
    assert_eq!(connected.age_info(UserId::new(404)), AgeInfo::error());
    assert_eq!(AgeInfo::error().oldest.user_id, UserId::new(-1));
}

#[test]
fn test_potential_siblings() {
    let mut raw = RawEntities::new();
    raw.add_city(City::new(1, "Winterfell", Some("North")))
        .add_city(City::new(2, "King's Landing", Some("Crownlands")))
        .add_user(User::new(5, "Arya", "Stark").born(1990, 1, 1))
        .add_user(User::new(9, "Bran", "Stark").born(1992, 1, 1))
        .add_user(User::new(12, "Rickon", "Stark").born(2000, 1, 1))
        .add_user(User::new(13, "Robb", "Stark").born(1991, 1, 1))
        .add_user(User::new(14, "Benjen", "Stark").born(1991, 1, 1))
        .add_user(User::new(15, "Jon", "Snow").born(1990, 1, 1))
        .add_friendship(9, 5)
        // Exactly ten years apart
        .add_friendship(5, 12)
        .add_friendship(9, 12)
        // Different hometown
        .add_friendship(5, 14)
        // Different last name
        .add_friendship(5, 15);
    for id in [5, 9, 12, 13, 15] {
        raw.add_hometown_city(id, 1);
    }
    raw.add_hometown_city(14, 2);

    let siblings = engine(raw).potential_siblings();
    let pairs: Vec<(i64, i64)> = siblings
        .iter()
        .map(|s| (s.user1.user_id.as_i64(), s.user2.user_id.as_i64()))
        .collect();
    // 13 qualifies on every attribute but is nobody's friend
    assert_eq!(pairs, vec![(5, 9), (9, 12)]);
    assert_eq!(siblings[0].user1.first_name, "Arya");
}

#[test]
fn test_potential_siblings_with_extreme_birth_years() {
    let mut raw = RawEntities::new();
    raw.add_city(City::new(1, "Winterfell", Some("North")))
        .add_user(User::new(1, "Arya", "Stark").born(i32::MAX, 1, 1))
        .add_user(User::new(2, "Bran", "Stark").born(-5, 1, 1))
        .add_friendship(1, 2)
        .add_hometown_city(1, 1)
        .add_hometown_city(2, 1);

    let engine = engine(raw);
    assert!(engine.potential_siblings().is_empty());

    let report = engine.run_all(&fakebook::QueryParams::default());
    assert!(report.potential_siblings.is_empty());
}

#[test]
fn test_event_states() {
    let mut raw = RawEntities::new();
    raw.add_city(City::new(1, "Ann Arbor", Some("Michigan")))
        .add_city(City::new(2, "Detroit", Some("Michigan")))
        .add_city(City::new(3, "Columbus", Some("Ohio")))
        .add_city(City::new(4, "Atlantis", None))
        .add_event(Event::new(1, Some(1)))
        .add_event(Event::new(2, Some(2)))
        .add_event(Event::new(3, Some(3)))
        .add_event(Event::new(4, Some(3)))
        .add_event(Event::new(5, Some(4)))
        .add_event(Event::new(6, None))
        .add_event(Event::new(7, Some(99)));

    let info = engine(raw.clone()).event_states();
    assert_eq!(info.event_count, 2);
    assert_eq!(info.states, vec!["Michigan", "Ohio"]);

    raw.add_event(Event::new(8, Some(1)));
    let info = engine(raw).event_states();
    assert_eq!(info.event_count, 3);
    assert_eq!(info.states, vec!["Michigan"]);
}

#[test]
fn test_event_states_without_events() {
    assert_eq!(
        engine(RawEntities::new()).event_states(),
        EventStateInfo::empty()
    );
}
