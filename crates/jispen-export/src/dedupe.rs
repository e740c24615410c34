use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first item for every key, preserving input order.
pub(crate) fn unique_by<'a, T, K, I, F>(items: I, key: F) -> Vec<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(*item)))
        .collect()
}
