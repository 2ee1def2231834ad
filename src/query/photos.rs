//! Photo queries: most tagged photos and the match maker

use super::aggregate::top_k;
use super::results::{MatchPair, PhotoInfo, TaggedPhotoInfo, UserInfo};
use super::{missing, AnalyticsEngine};
use crate::algo::tag_co_occurrences;
use crate::model::{PhotoId, UserId};
use crate::store::{EntityStore, StoreResult};

impl<S: EntityStore> AnalyticsEngine<S> {
    /// Q4: the `num` photos with the most tag rows.
    ///
    /// Ranked by tag rows descending then photo id; ties past the cutoff are dropped.
    pub fn photos_with_most_tags(&self, num: usize) -> Vec<TaggedPhotoInfo> {
        let result = self.try_photos_with_most_tags(num);
        self.recover("photos_with_most_tags", result, Vec::new)
    }

    fn try_photos_with_most_tags(&self, num: usize) -> StoreResult<Vec<TaggedPhotoInfo>> {
        let ranked: Vec<(PhotoId, usize)> = self
            .store
            .photos()?
            .into_iter()
            .filter(|p| self.index.is_resolvable_photo(p.id))
            .map(|p| (p.id, self.index.photo_tag_rows(p.id).len()))
            .collect();
        let top = top_k(ranked, num, |a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        top.into_iter()
            .map(|(photo_id, tag_count)| {
                let tagged_users = self
                    .index
                    .photo_tags(photo_id)
                    .map(|user| self.user_info(user))
                    .collect::<StoreResult<Vec<_>>>()?;
                Ok(TaggedPhotoInfo {
                    photo: self.photo_info(photo_id)?,
                    tag_count,
                    tagged_users,
                })
            })
            .collect()
    }

    /// Q5: same-gender non-friends of similar age tagged in the same photos.
    ///
    /// Pairs are ranked by shared tag count descending then (user1, user2); the
    /// selected `num` pairs are returned in (user1, user2) order.
    pub fn match_maker(&self, num: usize, year_diff: u32) -> Vec<MatchPair> {
        let result = self.try_match_maker(num, year_diff);
        self.recover("match_maker", result, Vec::new)
    }

    fn try_match_maker(&self, num: usize, year_diff: u32) -> StoreResult<Vec<MatchPair>> {
        let mut candidates = Vec::new();
        for pair in tag_co_occurrences(&self.index) {
            let (id1, id2) = (UserId::new(pair.first), UserId::new(pair.second));
            if self.index.are_friends(id1, id2) {
                continue;
            }
            let (Some(u1), Some(u2)) = (self.store.user(id1)?, self.store.user(id2)?) else {
                continue;
            };
            if !u1.gender.matches(u2.gender) {
                continue;
            }
            let (Some(y1), Some(y2)) = (u1.birth.year, u2.birth.year) else {
                continue;
            };
            if y1.abs_diff(y2) > year_diff {
                continue;
            }
            candidates.push((u1, y1, u2, y2, pair));
        }

        let mut selected = top_k(candidates, num, |a, b| {
            b.4.weight
                .cmp(&a.4.weight)
                .then_with(|| a.4.first.cmp(&b.4.first))
                .then_with(|| a.4.second.cmp(&b.4.second))
        });
        selected.sort_by_key(|c| (c.4.first, c.4.second));

        selected
            .into_iter()
            .map(|(u1, y1, u2, y2, pair)| {
                let shared_photos = pair
                    .groups
                    .iter()
                    .map(|&photo| self.photo_info(photo))
                    .collect::<StoreResult<Vec<_>>>()?;
                Ok(MatchPair {
                    user1: UserInfo::from(u1),
                    user1_birth_year: y1,
                    user2: UserInfo::from(u2),
                    user2_birth_year: y2,
                    shared_tag_count: pair.weight,
                    shared_photos,
                })
            })
            .collect()
    }

    pub(super) fn user_info(&self, id: UserId) -> StoreResult<UserInfo> {
        self.store
            .user(id)?
            .map(UserInfo::from)
            .ok_or_else(|| missing("user", id))
    }

    fn photo_info(&self, id: PhotoId) -> StoreResult<PhotoInfo> {
        let photo = self.store.photo(id)?.ok_or_else(|| missing("photo", id))?;
        let album = self
            .store
            .album(photo.album_id)?
            .ok_or_else(|| missing("album", photo.album_id))?;
        Ok(PhotoInfo::new(photo, album))
    }
}
