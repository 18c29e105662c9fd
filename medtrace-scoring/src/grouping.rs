//! Group-then-reduce over a borrowed slice.
//!
//! Results are keyed in a `BTreeMap`, so iterating the groups always
//! follows key order regardless of input order. Every per-key rollup in
//! this crate (supplier trust, supplier risk, zones) goes through here.

use std::collections::BTreeMap;

/// Partition `items` by `key` and fold each partition with `fold`.
///
/// Items whose key is `None` are dropped. Each accumulator starts at
/// `A::default()`.
///
/// ```
/// use medtrace_scoring::group_reduce;
///
/// let words = ["apple", "avocado", "banana", ""];
/// let counts = group_reduce(
///     &words,
///     |w| w.chars().next(),
///     |count: &mut usize, _| *count += 1,
/// );
/// assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![('a', 2), ('b', 1)]);
/// ```
pub fn group_reduce<'a, T, K, A, KF, F>(items: &'a [T], key: KF, mut fold: F) -> BTreeMap<K, A>
where
    K: Ord,
    A: Default,
    KF: Fn(&'a T) -> Option<K>,
    F: FnMut(&mut A, &'a T),
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for item in items {
        if let Some(k) = key(item) {
            fold(groups.entry(k).or_default(), item);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_reduce(&[] as &[u32], |n| Some(*n), |acc: &mut u32, n| *acc += n);
        assert!(groups.is_empty());
    }

    #[test]
    fn groups_are_independent_of_input_order() {
        let forward = [3u32, 1, 4, 1, 5, 9, 2, 6];
        let mut reversed = forward;
        reversed.reverse();
        let by_parity =
            |items: &[u32]| group_reduce(items, |n| Some(n % 2), |acc: &mut u32, n| *acc += n);
        assert_eq!(by_parity(&forward), by_parity(&reversed));
    }

    #[test]
    fn none_keys_are_dropped() {
        let groups = group_reduce(
            &[Some("a"), None, Some("a")],
            |item| *item,
            |acc: &mut usize, _| *acc += 1,
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["a"], 2);
    }
}
