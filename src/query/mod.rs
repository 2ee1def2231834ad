//! Analytic query engine
//!
//! Ten read-only queries over one immutable snapshot:
//! - Q0 birth month summary, Q1 first name statistics
//! - Q2 lonely users, Q3 users living away from home
//! - Q4 most tagged photos, Q5 match maker
//! - Q6 friend suggestions, Q7 busiest event states
//! - Q8 oldest and youngest friend, Q9 potential siblings
//!
//! Every query is total. Data-access failures are logged and converted to the
//! documented fallback result of that query.

pub mod aggregate;
pub mod results;

mod demographics;
mod events;
mod photos;
mod social;

pub use results::{
    AgeInfo, AnalyticsReport, BirthMonthInfo, EventStateInfo, FirstNameInfo, MatchPair, PhotoInfo,
    SiblingInfo, TaggedPhotoInfo, UserInfo, UsersPair,
};

use crate::algo::build_friend_view;
use crate::config::QueryParams;
use crate::model::UserId;
use crate::store::{EntityStore, SnapshotIndex, StoreError, StoreResult};
use fakebook_graph_algorithms::AdjacencyView;
use tracing::{debug, error, info};

/// Query engine over a single snapshot
///
/// Construction builds the index layer; once `new` returns, every query may
/// run concurrently from any thread.
pub struct AnalyticsEngine<S: EntityStore> {
    store: S,
    index: SnapshotIndex,
    friend_view: AdjacencyView,
}

impl<S: EntityStore> AnalyticsEngine<S> {
    /// Build the index layer over the store.
    ///
    /// Fails only if the store cannot be read.
    pub fn new(store: S) -> StoreResult<Self> {
        let index = SnapshotIndex::build(&store)?;
        let friend_view = build_friend_view(&index);
        info!(
            "Analytics engine ready: {} users in friend graph, {} friend edges",
            friend_view.node_count,
            friend_view.edge_count()
        );
        Ok(AnalyticsEngine {
            store,
            index,
            friend_view,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &SnapshotIndex {
        &self.index
    }

    /// Run every query against the shared snapshot on the rayon pool
    pub fn run_all(&self, params: &QueryParams) -> AnalyticsReport {
        let (
            ((birth_months, first_names), (lonely_users, live_away_from_home)),
            (
                ((top_tagged_photos, match_pairs), (friend_suggestions, event_states)),
                (age_info, potential_siblings),
            ),
        ) = rayon::join(
            || {
                rayon::join(
                    || rayon::join(|| self.birth_month_info(), || self.first_name_info()),
                    || rayon::join(|| self.lonely_users(), || self.live_away_from_home()),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || {
                                rayon::join(
                                    || self.photos_with_most_tags(params.top_photos),
                                    || {
                                        self.match_maker(
                                            params.match_pairs,
                                            params.match_year_diff,
                                        )
                                    },
                                )
                            },
                            || {
                                rayon::join(
                                    || self.suggest_friends(params.friend_suggestions),
                                    || self.event_states(),
                                )
                            },
                        )
                    },
                    || {
                        rayon::join(
                            || params.age_info_user.map(|id| self.age_info(UserId::new(id))),
                            || self.potential_siblings(),
                        )
                    },
                )
            },
        );

        AnalyticsReport {
            birth_months,
            first_names,
            lonely_users,
            live_away_from_home,
            top_tagged_photos,
            match_pairs,
            friend_suggestions,
            event_states,
            age_info,
            potential_siblings,
        }
    }

    /// Unwrap a query result, logging failures and substituting the fallback
    fn recover<T>(&self, query: &str, result: StoreResult<T>, fallback: impl FnOnce() -> T) -> T {
        match result {
            Ok(value) => {
                debug!("Query {} completed", query);
                value
            }
            Err(e) => {
                error!("Query {} failed, returning fallback result: {}", query, e);
                fallback()
            }
        }
    }
}

/// A row the index guarantees exists but the store no longer returns
fn missing(kind: &str, id: impl std::fmt::Display) -> StoreError {
    StoreError::Corrupted(format!("{} {} referenced by the index is missing", kind, id))
}
