//! Friendship queries: friend suggestions, age extremes among friends, potential siblings

use super::aggregate::{top_k, NullsLast};
use super::results::{AgeInfo, SiblingInfo, UserInfo, UsersPair};
use super::AnalyticsEngine;
use crate::algo::{common_neighbor_pairs, sibling_pairs};
use crate::model::{User, UserId};
use crate::store::{EntityStore, StoreResult};
use std::cmp::Reverse;

/// Birth date ordering key; missing components sort after known ones
type BirthKey = (NullsLast<i32>, NullsLast<i32>, NullsLast<i32>);

fn birth_key(user: &User) -> BirthKey {
    (
        NullsLast(user.birth.year),
        NullsLast(user.birth.month),
        NullsLast(user.birth.day),
    )
}

impl<S: EntityStore> AnalyticsEngine<S> {
    /// Q6: the `num` non-friend pairs with the most friends in common.
    ///
    /// Ranked by common friend count descending, then user1, then user2.
    pub fn suggest_friends(&self, num: usize) -> Vec<UsersPair> {
        let result = self.try_suggest_friends(num);
        self.recover("suggest_friends", result, Vec::new)
    }

    fn try_suggest_friends(&self, num: usize) -> StoreResult<Vec<UsersPair>> {
        let pairs = common_neighbor_pairs(&self.friend_view);
        let top = top_k(pairs, num, |a, b| {
            b.count()
                .cmp(&a.count())
                .then_with(|| a.first.cmp(&b.first))
                .then_with(|| a.second.cmp(&b.second))
        });

        top.into_iter()
            .map(|pair| {
                let shared_friends = pair
                    .shared
                    .iter()
                    .map(|&id| self.user_info(UserId::new(id)))
                    .collect::<StoreResult<Vec<_>>>()?;
                Ok(UsersPair {
                    user1: self.user_info(UserId::new(pair.first))?,
                    user2: self.user_info(UserId::new(pair.second))?,
                    shared_friends,
                })
            })
            .collect()
    }

    /// Q8: oldest and youngest friend of `user`.
    ///
    /// Oldest is the earliest birth date, ties to the highest id; youngest is
    /// the latest birth date, ties to the lowest id. A user without friends
    /// gets the error sentinel for both.
    pub fn age_info(&self, user: UserId) -> AgeInfo {
        let result = self.try_age_info(user);
        self.recover("age_info", result, AgeInfo::error)
    }

    fn try_age_info(&self, user: UserId) -> StoreResult<AgeInfo> {
        let mut friends = Vec::with_capacity(self.index.friend_count(user));
        for id in self.index.friends_of(user) {
            if let Some(friend) = self.store.user(id)? {
                friends.push(friend);
            }
        }

        let rank = |u: &&User| (birth_key(u), Reverse(u.id));
        let (Some(oldest), Some(youngest)) = (
            friends.iter().copied().min_by_key(rank),
            friends.iter().copied().max_by_key(rank),
        ) else {
            return Ok(AgeInfo::error());
        };

        Ok(AgeInfo {
            oldest: UserInfo::from(oldest),
            youngest: UserInfo::from(youngest),
        })
    }

    /// Q9: friends sharing a last name and hometown, born less than ten years apart
    pub fn potential_siblings(&self) -> Vec<SiblingInfo> {
        let result = self.try_potential_siblings();
        self.recover("potential_siblings", result, Vec::new)
    }

    fn try_potential_siblings(&self) -> StoreResult<Vec<SiblingInfo>> {
        sibling_pairs(&self.store, &self.index)?
            .into_iter()
            .map(|(a, b)| {
                Ok(SiblingInfo {
                    user1: self.user_info(a)?,
                    user2: self.user_info(b)?,
                })
            })
            .collect()
    }
}
