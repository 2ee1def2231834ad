//! Graph pattern matchers
//!
//! Topology algorithms live in the `fakebook-graph-algorithms` crate.
//! This module provides the adapter layer from the snapshot index and the
//! pattern matchers that need entity attributes.

use crate::model::{PhotoId, UserId};
use crate::store::{EntityStore, SnapshotIndex, StoreResult};
use fakebook_graph_algorithms::AdjacencyView;

// Re-export algorithms
pub use fakebook_graph_algorithms::{
    co_occurrences, common_neighbor_pairs, common_neighbors, CoOccurrence, CommonNeighbors,
};

/// Birth years of siblings must differ by less than this
pub const SIBLING_MAX_YEAR_GAP: u32 = 10;

/// Build the friend adjacency view for algorithm execution
pub fn build_friend_view(index: &SnapshotIndex) -> AdjacencyView {
    AdjacencyView::from_edges(
        index
            .friendships()
            .iter()
            .map(|f| (f.user1_id.as_i64(), f.user2_id.as_i64())),
    )
}

/// Pairs of users tagged together in at least one photo.
///
/// Weight is the tag join count: each tag row of one user paired with each tag
/// row of the other, summed over shared photos.
pub fn tag_co_occurrences(index: &SnapshotIndex) -> Vec<CoOccurrence<PhotoId>> {
    co_occurrences(
        index
            .tag_groups()
            .into_iter()
            .map(|(photo, subjects)| (photo, subjects.iter().map(|u| u.as_i64()))),
    )
}

/// Friends sharing a last name and a hometown, born less than
/// [`SIBLING_MAX_YEAR_GAP`] years apart. Ordered by (user1, user2).
pub fn sibling_pairs(
    store: &dyn EntityStore,
    index: &SnapshotIndex,
) -> StoreResult<Vec<(UserId, UserId)>> {
    let mut pairs = Vec::new();

    for friendship in index.friendships() {
        let (a, b) = (friendship.user1_id, friendship.user2_id);
        let (Some(u1), Some(u2)) = (store.user(a)?, store.user(b)?) else {
            continue;
        };
        if u1.last_name != u2.last_name {
            continue;
        }

        let same_hometown = match (index.hometown_city_of(a), index.hometown_city_of(b)) {
            (Some(h1), Some(h2)) => h1 == h2,
            _ => false,
        };
        if !same_hometown {
            continue;
        }

        if let (Some(y1), Some(y2)) = (u1.birth.year, u2.birth.year) {
            if y1.abs_diff(y2) < SIBLING_MAX_YEAR_GAP {
                pairs.push((a, b));
            }
        }
    }

    // Friendships are already canonical and sorted
    Ok(pairs)
}
