use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Memory strategy for the working sequence a producer carries between steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Memory {
    /// Keep only the most recent `k` values, where `k` is the seed length.
    /// Uses O(k) memory regardless of the requested length.
    #[default]
    Sliding,
    /// Keep every value produced so far. Required when the combine function
    /// indexes by offsets computed from sequence values themselves, which can
    /// reach further back than `k` (Hofstadter-Q style recurrences).
    Full,
}

#[derive(Debug, thiserror::Error)]
pub enum RecurrenceError {
    #[error("initial window must contain at least one seed value")]
    EmptySeed,
}

/// A fixed-window linear recurrence: a seed window of `k` initial values plus
/// a combine function producing each next value from the current window.
///
/// The recurrence itself is immutable; [`Recurrence::take`] hands out lazy
/// producers, each with its own copy of the seed, so separate productions
/// never observe one another's state.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use recurseq::recurrence::Recurrence;
///
/// let seed = vec![BigUint::from(0u32), BigUint::from(1u32)];
/// let fib = Recurrence::new(seed, |w| &w[w.len() - 1] + &w[w.len() - 2]).unwrap();
/// let first: Vec<BigUint> = fib.take(6).collect();
/// assert_eq!(first[5], BigUint::from(5u32));
/// ```
pub struct Recurrence<F> {
    seed: Vec<BigUint>,
    combine: F,
    memory: Memory,
}

impl<F> Recurrence<F>
where
    F: Fn(&[BigUint]) -> BigUint,
{
    /// Builds a recurrence from a non-empty seed window and a combine
    /// function. The combine function receives the current working window
    /// (seed values first, then produced values) and returns the next value;
    /// it is expected to be pure.
    pub fn new(seed: Vec<BigUint>, combine: F) -> Result<Self, RecurrenceError> {
        if seed.is_empty() {
            return Err(RecurrenceError::EmptySeed);
        }
        Ok(Self {
            seed,
            combine,
            memory: Memory::Sliding,
        })
    }

    /// Selects the memory strategy. `Memory::Full` keeps the entire history,
    /// which self-referential combine functions need; out-of-range indexing
    /// inside the combine function is not guarded here and panics in the
    /// closure.
    pub fn with_memory(mut self, memory: Memory) -> Self {
        self.memory = memory;
        self
    }

    /// Returns a lazy producer of the first `length` sequence values.
    ///
    /// The producer yields the seed values first (truncated to `length` if
    /// `length <= k`, in which case the combine function is never called),
    /// then one combined value per pull. Each call to `take` copies the seed
    /// into fresh working state, so producers are independent and the
    /// recurrence can be consumed any number of times.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// let lucas = recurseq::recurrence::lucas();
    /// let vals: Vec<u32> = lucas.take(5).map(|v| v.try_into().unwrap()).collect();
    /// assert_eq!(vals, [2, 1, 3, 4, 7]);
    /// ```
    pub fn take(&self, length: usize) -> Sequence<'_, F> {
        Sequence {
            window: self.seed.clone(),
            combine: &self.combine,
            memory: self.memory,
            seed_len: self.seed.len(),
            produced: 0,
            length,
        }
    }

    /// Length of the seed window (`k`).
    pub fn seed_len(&self) -> usize {
        self.seed.len()
    }
}

/// Lazy, bounded producer handed out by [`Recurrence::take`].
///
/// Values are computed one per pull; consuming a prefix never computes
/// beyond it.
pub struct Sequence<'a, F> {
    window: Vec<BigUint>,
    combine: &'a F,
    memory: Memory,
    seed_len: usize,
    produced: usize,
    length: usize,
}

impl<F> Iterator for Sequence<'_, F>
where
    F: Fn(&[BigUint]) -> BigUint,
{
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.produced >= self.length {
            return None;
        }

        let value = if self.produced < self.seed_len {
            // Seed phase: the first k positions of the window are untouched
            // until the first combine call, in both memory modes.
            self.window[self.produced].clone()
        } else {
            let next = (self.combine)(&self.window);
            match self.memory {
                Memory::Sliding => {
                    // Shift left, append: evict the oldest value.
                    self.window.rotate_left(1);
                    let last = self.window.len() - 1;
                    self.window[last] = next.clone();
                }
                Memory::Full => self.window.push(next.clone()),
            }
            next
        };

        self.produced += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.produced;
        (remaining, Some(remaining))
    }
}

impl<F> ExactSizeIterator for Sequence<'_, F> where F: Fn(&[BigUint]) -> BigUint {}

/// The Fibonacci recurrence: seed `[0, 1]`, each value the sum of the
/// previous two.
pub fn fibonacci() -> Recurrence<impl Fn(&[BigUint]) -> BigUint> {
    Recurrence {
        seed: vec![BigUint::zero(), BigUint::one()],
        combine: |w: &[BigUint]| &w[w.len() - 1] + &w[w.len() - 2],
        memory: Memory::Sliding,
    }
}

/// The Lucas recurrence: seed `[2, 1]`, each value the sum of the window.
pub fn lucas() -> Recurrence<impl Fn(&[BigUint]) -> BigUint> {
    Recurrence {
        seed: vec![BigUint::from(2u32), BigUint::one()],
        combine: |w: &[BigUint]| -> BigUint { w.iter().sum() },
        memory: Memory::Sliding,
    }
}

/// The Perrin recurrence: seed `[3, 0, 2]`, each value the sum of the values
/// two and three places back.
pub fn perrin() -> Recurrence<impl Fn(&[BigUint]) -> BigUint> {
    Recurrence {
        seed: vec![BigUint::from(3u32), BigUint::zero(), BigUint::from(2u32)],
        combine: |w: &[BigUint]| &w[w.len() - 2] + &w[w.len() - 3],
        memory: Memory::Sliding,
    }
}

/// The Hofstadter Q-sequence: seed `[1, 1]`,
/// `Q(n) = Q(n - Q(n-1)) + Q(n - Q(n-2))`.
///
/// The lookback distance is drawn from the values themselves, so the full
/// history is kept. Q values never exceed their index for the canonical seed,
/// which keeps every lookback in range.
pub fn hofstadter_q() -> Recurrence<impl Fn(&[BigUint]) -> BigUint> {
    Recurrence {
        seed: vec![BigUint::one(), BigUint::one()],
        combine: |w: &[BigUint]| {
            let n = w.len();
            let lookback = |value: &BigUint| n - value.to_usize().unwrap_or(usize::MAX);
            &w[lookback(&w[n - 1])] + &w[lookback(&w[n - 2])]
        },
        memory: Memory::Full,
    }
}
