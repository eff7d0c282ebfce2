use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashMap;

/// Memoization cache for Fibonacci numbers.
///
/// Pre-seeded with `F(0) = 0` and `F(1) = 1`. The cache persists for the life
/// of the value, is shared across all calls to [`FibCache::get`], grows
/// monotonically, and never rewrites an entry. Not thread-safe: callers
/// sharing one cache across threads must serialize access themselves.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use recurseq::fibonacci::FibCache;
///
/// let mut cache = FibCache::new();
/// assert_eq!(cache.get(10), BigUint::from(55u32));
/// assert_eq!(cache.get(10), BigUint::from(55u32)); // cache hit, no recompute
/// ```
pub struct FibCache {
    values: HashMap<u64, BigUint>,
    // Highest index cached so far; every index below it is cached too.
    high: u64,
}

impl FibCache {
    pub fn new() -> Self {
        let mut values = HashMap::new();
        values.insert(0, BigUint::zero());
        values.insert(1, BigUint::one());
        Self { values, high: 1 }
    }

    /// Returns `F(n)`, computing and caching any indices not seen before.
    ///
    /// Each distinct index is computed at most once for the lifetime of the
    /// cache. The lookup is a presence check, so a cached value of zero
    /// (`F(0)`) counts as a hit. Missing indices are filled upward from the
    /// highest cached one; every fill is the sum of two already-cached
    /// entries.
    pub fn get(&mut self, n: u64) -> BigUint {
        if let Some(cached) = self.values.get(&n) {
            return cached.clone();
        }

        for i in self.high + 1..=n {
            let next = &self.values[&(i - 2)] + &self.values[&(i - 1)];
            self.values.insert(i, next);
        }
        self.high = n;
        self.values[&n].clone()
    }

    /// Number of cached entries (never less than the two seeds).
    pub fn cached(&self) -> usize {
        self.values.len()
    }

    /// Drops every computed entry, returning to the seeded state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FibCache {
    fn default() -> Self {
        Self::new()
    }
}

/// The doubly recursive definition, exponential in `n`. Kept as the slow
/// subject for timing demonstrations; prefer [`FibCache`] for real use.
pub fn naive(n: u64) -> BigUint {
    if n > 1 {
        naive(n - 2) + naive(n - 1)
    } else {
        BigUint::from(n)
    }
}

/// Generates the first `n` Fibonacci numbers eagerly.
///
/// Runs in O(n) time and O(n) space. Never returns more than `n` values:
/// `sequence(0)` is empty and `sequence(1)` is `[0]`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// let seq = recurseq::fibonacci::sequence(10);
/// assert_eq!(seq[9], BigUint::from(34u32));
/// ```
pub fn sequence(n: usize) -> Vec<BigUint> {
    let mut seq = Vec::with_capacity(n);
    if n >= 1 {
        seq.push(BigUint::zero());
    }
    if n >= 2 {
        seq.push(BigUint::one());
    }
    for i in 2..n {
        let next = &seq[i - 1] + &seq[i - 2];
        seq.push(next);
    }
    seq
}
