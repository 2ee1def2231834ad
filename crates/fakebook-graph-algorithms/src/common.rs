//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of an undirected topology for algorithm execution.

use rustc_hash::FxHashMap;

/// Node Identifier type (i64)
pub type NodeId = i64;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Dense indices are assigned in ascending `NodeId` order and every neighbour
/// slice is sorted, so walking indices or neighbours always yields ids in
/// ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,
    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbour indices, each row sorted
    pub targets: Vec<usize>,
}

impl AdjacencyView {
    /// Build the symmetric closure of an edge list.
    ///
    /// Self loops are ignored and repeated edges (in either direction) collapse
    /// into one adjacency.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let edges: Vec<(NodeId, NodeId)> = edges.into_iter().filter(|(a, b)| a != b).collect();

        // 1. Collect nodes in id order
        let mut index_to_node: Vec<NodeId> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        index_to_node.sort_unstable();
        index_to_node.dedup();

        // 2. Build index mappings
        let node_to_index: FxHashMap<NodeId, usize> = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();
        let node_count = index_to_node.len();

        // 3. Build adjacency lists (both directions)
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (a, b) in edges {
            if let (Some(&ia), Some(&ib)) = (node_to_index.get(&a), node_to_index.get(&b)) {
                adjacency[ia].push(ib);
                adjacency[ib].push(ia);
            }
        }

        // 4. Convert to CSR
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        offsets.push(0);
        for mut neighbors in adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        AdjacencyView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
        }
    }

    /// Dense index of a node, if it has at least one neighbour
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.node_to_index.get(&id).copied()
    }

    /// NodeId at a dense index
    pub fn node_id(&self, idx: usize) -> NodeId {
        self.index_to_node[idx]
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the sorted neighbours of a node (by index)
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Neighbour ids of a node in ascending order; empty for unknown nodes
    pub fn neighbor_ids(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index_of(id)
            .map(|idx| self.neighbors(idx))
            .unwrap_or(&[])
            .iter()
            .map(move |&n| self.index_to_node[n])
    }

    /// Whether two nodes (by index) are adjacent
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }
}
