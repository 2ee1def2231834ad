//! Neighbourhood overlap algorithms
//!
//! Common-neighbour counting between nodes that are not adjacent, the
//! building block of friend-of-friend suggestions.

use super::common::{AdjacencyView, NodeId};
use rustc_hash::FxHashMap;

/// A non-adjacent pair together with the neighbours it shares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonNeighbors {
    /// Smaller node id of the pair
    pub first: NodeId,
    /// Larger node id of the pair
    pub second: NodeId,
    /// Shared neighbours in ascending id order
    pub shared: Vec<NodeId>,
}

impl CommonNeighbors {
    /// Number of shared neighbours
    pub fn count(&self) -> usize {
        self.shared.len()
    }
}

/// Common neighbours of two nodes, in ascending id order.
pub fn common_neighbors(view: &AdjacencyView, a: NodeId, b: NodeId) -> Vec<NodeId> {
    match (view.index_of(a), view.index_of(b)) {
        (Some(ia), Some(ib)) => intersect_sorted(view.neighbors(ia), view.neighbors(ib))
            .into_iter()
            .map(|idx| view.node_id(idx))
            .collect(),
        _ => Vec::new(),
    }
}

/// All non-adjacent pairs that share at least one neighbour.
///
/// Enumerates wedges `u - c - v` around every center `c`. Because centers are
/// visited in ascending index order, each pair's shared list comes out sorted.
/// Result is ordered by (first, second).
pub fn common_neighbor_pairs(view: &AdjacencyView) -> Vec<CommonNeighbors> {
    let mut wedges: FxHashMap<(usize, usize), Vec<usize>> = FxHashMap::default();

    for center in 0..view.node_count {
        let neighbors = view.neighbors(center);
        for (i, &u) in neighbors.iter().enumerate() {
            // Neighbour rows are sorted, so u < v holds for the tail
            for &v in &neighbors[i + 1..] {
                if view.is_adjacent(u, v) {
                    continue;
                }
                wedges.entry((u, v)).or_default().push(center);
            }
        }
    }

    let mut pairs: Vec<CommonNeighbors> = wedges
        .into_iter()
        .map(|((u, v), centers)| CommonNeighbors {
            first: view.node_id(u),
            second: view.node_id(v),
            shared: centers.into_iter().map(|c| view.node_id(c)).collect(),
        })
        .collect();

    pairs.sort_by_key(|p| (p.first, p.second));
    pairs
}

fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_neighbors_of_pair() {
        // 1 and 4 both know 2 and 3
        let view = AdjacencyView::from_edges(vec![(1, 2), (1, 3), (4, 2), (4, 3), (4, 5)]);
        assert_eq!(common_neighbors(&view, 1, 4), vec![2, 3]);
        assert_eq!(common_neighbors(&view, 1, 5), Vec::<NodeId>::new());
        assert_eq!(common_neighbors(&view, 1, 42), Vec::<NodeId>::new());
    }

    #[test]
    fn test_pairs_skip_adjacent_nodes() {
        // Triangle 1-2-3: every pair is adjacent, nothing to suggest
        let view = AdjacencyView::from_edges(vec![(1, 2), (2, 3), (1, 3)]);
        assert!(common_neighbor_pairs(&view).is_empty());
    }

    #[test]
    fn test_pairs_from_star() {
        // Star centered on 10 with leaves 1, 2, 3
        let view = AdjacencyView::from_edges(vec![(10, 1), (10, 2), (10, 3)]);
        let pairs = common_neighbor_pairs(&view);

        let keys: Vec<(NodeId, NodeId)> = pairs.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(keys, vec![(1, 2), (1, 3), (2, 3)]);
        assert!(pairs.iter().all(|p| p.shared == vec![10]));
    }

    #[test]
    fn test_shared_list_is_sorted() {
        // 1 and 2 share 7, 5 and 9; edges inserted in scrambled order
        let view = AdjacencyView::from_edges(vec![(9, 1), (2, 7), (1, 5), (2, 9), (7, 1), (5, 2)]);
        let pairs = common_neighbor_pairs(&view);
        let pair = pairs.iter().find(|p| p.first == 1 && p.second == 2).unwrap();
        assert_eq!(pair.shared, vec![5, 7, 9]);
        assert_eq!(pair.count(), 3);
    }
}
