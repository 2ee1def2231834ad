//! Event geography

use super::aggregate::{group_count, ties_at_max};
use super::results::EventStateInfo;
use super::AnalyticsEngine;
use crate::store::{EntityStore, StoreResult};

impl<S: EntityStore> AnalyticsEngine<S> {
    /// Q7: states hosting the most events, alphabetically, with that count.
    ///
    /// Events whose city or state cannot be resolved are ignored.
    pub fn event_states(&self) -> EventStateInfo {
        let result = self.try_event_states();
        self.recover("event_states", result, EventStateInfo::error)
    }

    fn try_event_states(&self) -> StoreResult<EventStateInfo> {
        let events = self.store.events()?;
        let states = events
            .iter()
            .filter_map(|e| e.city_id.and_then(|city| self.index.state_of_city(city)));
        let per_state = group_count(states, |state| *state);

        Ok(match ties_at_max(&per_state) {
            Some((count, states)) => EventStateInfo {
                event_count: count as i64,
                states: states.into_iter().map(str::to_string).collect(),
            },
            None => EventStateInfo::empty(),
        })
    }
}
