pub mod common;
pub mod cooccurrence;
pub mod topology;

pub use common::{AdjacencyView, NodeId};
pub use cooccurrence::{co_occurrences, CoOccurrence};
pub use topology::{common_neighbor_pairs, common_neighbors, CommonNeighbors};
