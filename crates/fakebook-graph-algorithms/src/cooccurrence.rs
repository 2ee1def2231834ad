//! Group co-occurrence
//!
//! Turns membership lists (e.g. the subjects tagged in a photo) into pairwise
//! co-occurrence edges.

use super::common::NodeId;
use rustc_hash::FxHashMap;

/// Two distinct members that appear together in one or more groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoOccurrence<G> {
    /// Smaller member id
    pub first: NodeId,
    /// Larger member id
    pub second: NodeId,
    /// Groups containing both members, ascending
    pub groups: Vec<G>,
    /// Join weight: sum over shared groups of (multiplicity of first * multiplicity of second)
    pub weight: u64,
}

/// Register a co-occurrence edge for every pair of distinct members of each group.
///
/// A member listed several times in one group contributes its multiplicity to
/// the pair weight but is paired only with other members, never with itself.
/// Result is ordered by (first, second).
pub fn co_occurrences<G, I, M>(groups: I) -> Vec<CoOccurrence<G>>
where
    G: Copy + Ord,
    I: IntoIterator<Item = (G, M)>,
    M: IntoIterator<Item = NodeId>,
{
    let mut pairs: FxHashMap<(NodeId, NodeId), CoOccurrence<G>> = FxHashMap::default();

    for (group, members) in groups {
        let mut members: Vec<NodeId> = members.into_iter().collect();
        members.sort_unstable();

        // Run-length encode into (member, multiplicity)
        let mut counts: Vec<(NodeId, u64)> = Vec::with_capacity(members.len());
        for member in members {
            match counts.last_mut() {
                Some((id, count)) if *id == member => *count += 1,
                _ => counts.push((member, 1)),
            }
        }

        for (i, &(a, count_a)) in counts.iter().enumerate() {
            for &(b, count_b) in &counts[i + 1..] {
                let entry = pairs.entry((a, b)).or_insert_with(|| CoOccurrence {
                    first: a,
                    second: b,
                    groups: Vec::new(),
                    weight: 0,
                });
                entry.groups.push(group);
                entry.weight += count_a * count_b;
            }
        }
    }

    let mut result: Vec<CoOccurrence<G>> = pairs.into_values().collect();
    for pair in &mut result {
        pair.groups.sort_unstable();
    }
    result.sort_by_key(|p| (p.first, p.second));
    result
}
