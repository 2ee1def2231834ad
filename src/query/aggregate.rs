//! Aggregation and ranking engine
//!
//! Grouping, counting and deterministic ranking used by the queries. Every
//! helper has an explicit order: ties are broken by the comparator or by key
//! order, never by hash iteration order.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// Count items per key
pub fn group_count<T, K, I, F>(items: I, mut key_fn: F) -> FxHashMap<K, usize>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: FxHashMap<K, usize> = FxHashMap::default();
    for item in items {
        *groups.entry(key_fn(&item)).or_insert(0) += 1;
    }
    groups
}

/// Sort rows by `compare` and keep the first `k`.
///
/// Truncation is positional: rows tied with the k-th row that fall past the
/// cutoff are excluded.
pub fn top_k<T, F>(mut rows: Vec<T>, k: usize, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    rows.sort_by(compare);
    rows.truncate(k);
    rows
}

/// Highest count and every key reaching it, keys ascending
pub fn ties_at_max<K>(groups: &FxHashMap<K, usize>) -> Option<(usize, Vec<K>)>
where
    K: Ord + Clone,
{
    let max = groups.values().copied().max()?;
    Some((max, keys_with_count(groups, max)))
}

/// Lowest count and every key reaching it, keys ascending
pub fn ties_at_min<K>(groups: &FxHashMap<K, usize>) -> Option<(usize, Vec<K>)>
where
    K: Ord + Clone,
{
    let min = groups.values().copied().min()?;
    Some((min, keys_with_count(groups, min)))
}

fn keys_with_count<K: Ord + Clone>(groups: &FxHashMap<K, usize>, count: usize) -> Vec<K> {
    let mut keys: Vec<K> = groups
        .iter()
        .filter(|(_, &c)| c == count)
        .map(|(k, _)| k.clone())
        .collect();
    keys.sort();
    keys
}

/// Optional value ordered with `None` after every present value.
///
/// Ascending sorts place missing values last; descending sorts place them
/// first, matching SQL's default NULL ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullsLast<T>(pub Option<T>);

impl<T: Ord> PartialOrd for NullsLast<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for NullsLast<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
