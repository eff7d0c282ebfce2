use std::cmp::Ordering;

/// Sorts keyed float entries by the fractional part of the value, ascending.
///
/// The fractional part is the Euclidean remainder mod 1, so `-1.25` sorts as
/// `0.75`. The sort is stable and the input is left untouched.
///
/// # Example
/// ```
/// use recurseq::sort::sort_by_fractional_part;
///
/// let entries = [(2, 2.1), (3, 3.3), (1, 1.4), (4, 4.2)];
/// let keys: Vec<i32> = sort_by_fractional_part(&entries)
///     .into_iter()
///     .map(|(k, _)| k)
///     .collect();
/// assert_eq!(keys, [2, 4, 3, 1]);
/// ```
pub fn sort_by_fractional_part<K: Clone>(entries: &[(K, f64)]) -> Vec<(K, f64)> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|(_, a), (_, b)| compare_fractions(*a, *b));
    sorted
}

fn compare_fractions(a: f64, b: f64) -> Ordering {
    a.rem_euclid(1.0).total_cmp(&b.rem_euclid(1.0))
}
