use std::collections::HashSet;
use std::hash::Hash;

/// Elements present in exactly one of `left` and `right`.
///
/// Both inputs are treated as sets. The result lists the left-only elements in
/// left order followed by the right-only elements in right order, so it does not
/// necessarily follow the key order of either side.
pub fn symmetric_difference<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let left_set: HashSet<&T> = left.iter().collect();
    let right_set: HashSet<&T> = right.iter().collect();
    let mut seen: HashSet<&T> = HashSet::new();

    let left_only = left.iter().filter(|item| !right_set.contains(item));
    let right_only = right.iter().filter(|item| !left_set.contains(item));

    left_only
        .chain(right_only)
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
