//! Demographic queries: birth months, first names, lonely users, users living away from home

use super::aggregate::{group_count, ties_at_max, ties_at_min};
use super::results::{BirthMonthInfo, FirstNameInfo, UserInfo};
use super::AnalyticsEngine;
use crate::model::UserId;
use crate::store::{EntityStore, StoreResult};
use rustc_hash::FxHashSet;

impl<S: EntityStore> AnalyticsEngine<S> {
    /// Q0: most and least common birth months.
    ///
    /// Ties on either side go to the lower month number.
    pub fn birth_month_info(&self) -> BirthMonthInfo {
        let result = self.try_birth_month_info();
        self.recover("birth_month_info", result, BirthMonthInfo::error)
    }

    fn try_birth_month_info(&self) -> StoreResult<BirthMonthInfo> {
        let users = self.store.users()?;
        let born: Vec<(i32, UserInfo)> = users
            .iter()
            .filter_map(|u| u.birth.month.map(|m| (m, UserInfo::from(*u))))
            .collect();

        let months = group_count(born.iter(), |(month, _)| *month);
        let (Some((_, most)), Some((_, least))) = (ties_at_max(&months), ties_at_min(&months))
        else {
            return Ok(BirthMonthInfo::empty());
        };
        let (most_month, least_month) = (most[0], least[0]);

        // Users are read in id order
        let in_month = |month: i32| -> Vec<UserInfo> {
            born.iter()
                .filter(|(m, _)| *m == month)
                .map(|(_, info)| info.clone())
                .collect()
        };

        Ok(BirthMonthInfo {
            total: born.len() as i64,
            most_month,
            least_month,
            most_month_users: in_month(most_month),
            least_month_users: in_month(least_month),
        })
    }

    /// Q1: longest, shortest and most common first names
    pub fn first_name_info(&self) -> FirstNameInfo {
        let result = self.try_first_name_info();
        self.recover("first_name_info", result, FirstNameInfo::default)
    }

    fn try_first_name_info(&self) -> StoreResult<FirstNameInfo> {
        let users = self.store.users()?;
        let occurrences = group_count(users.iter().map(|u| u.first_name.as_str()), |name| *name);

        let mut info = FirstNameInfo::default();
        let lengths = || occurrences.keys().map(|name| name.chars().count());
        let (Some(longest), Some(shortest)) = (lengths().max(), lengths().min()) else {
            return Ok(info);
        };

        let names_of_length = |length: usize| -> Vec<String> {
            let mut names: Vec<String> = occurrences
                .keys()
                .filter(|name| name.chars().count() == length)
                .map(|name| name.to_string())
                .collect();
            names.sort();
            names
        };
        info.long_names = names_of_length(longest);
        info.short_names = names_of_length(shortest);

        if let Some((count, names)) = ties_at_max(&occurrences) {
            info.common_names = names.into_iter().map(str::to_string).collect();
            info.common_name_count = count;
        }
        Ok(info)
    }

    /// Q2: users who are not part of any friendship, by id
    pub fn lonely_users(&self) -> Vec<UserInfo> {
        let result = self.try_lonely_users();
        self.recover("lonely_users", result, Vec::new)
    }

    fn try_lonely_users(&self) -> StoreResult<Vec<UserInfo>> {
        // Every raw friendship row counts, including ones the index dropped
        let participants: FxHashSet<UserId> = self
            .store
            .friendships()?
            .iter()
            .flat_map(|f| [f.user1_id, f.user2_id])
            .collect();

        Ok(self
            .store
            .users()?
            .into_iter()
            .filter(|u| !participants.contains(&u.id))
            .map(UserInfo::from)
            .collect())
    }

    /// Q3: users whose current city differs from their hometown, by id
    pub fn live_away_from_home(&self) -> Vec<UserInfo> {
        let result = self.try_live_away_from_home();
        self.recover("live_away_from_home", result, Vec::new)
    }

    fn try_live_away_from_home(&self) -> StoreResult<Vec<UserInfo>> {
        Ok(self
            .store
            .users()?
            .into_iter()
            .filter(|u| {
                match (
                    self.index.current_city_of(u.id),
                    self.index.hometown_city_of(u.id),
                ) {
                    (Some(current), Some(hometown)) => current != hometown,
                    _ => false,
                }
            })
            .map(UserInfo::from)
            .collect())
    }
}
