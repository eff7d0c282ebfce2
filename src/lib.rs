//! # Recurrence Sequence Library
//!
//! This library computes integer sequences defined by fixed-window linear
//! recurrences (Fibonacci, Lucas, Perrin, Hofstadter-Q and anything of the
//! same shape), together with a memoized Fibonacci cache and a lightweight
//! elapsed-time reporter for timing the computations. All sequence values
//! are arbitrary-precision `BigUint`s.
//!
//! ## Key Features
//! - **Recurrence Factory**: builds a lazy sequence producer from a seed
//!   window and a combine function over the current window, with two memory
//!   strategies — a fixed-size sliding window (O(k) memory) or the full
//!   produced history (needed for self-referential recurrences whose lookback
//!   is drawn from the values themselves).
//! - **Memoized Fibonacci**: an explicit, monotonically growing cache that
//!   computes each index at most once across its lifetime.
//! - **Elapsed-Time Reporting**: wraps any displayable call, measuring
//!   wall-clock duration and writing one `name(args) -> value in <ms>ms`
//!   line per successful call while returning the result unchanged.
//!
//! ## Overview of Modules
//!
//! ### `recurrence`
//! The core factory. `Recurrence::new` takes a non-empty seed window and a
//! combine function; `take(length)` hands out an independent, lazy, bounded
//! iterator over the sequence. Ready-made constructors cover the classic
//! recurrences.
//!
//! ### `fibonacci`
//! `FibCache` for memoized lookups, `naive` for the exponential doubly
//! recursive definition, and `sequence` for eager materialization of a
//! prefix.
//!
//! ### `report`
//! `Reporter` writes timing lines to any `io::Write` sink. Failures in the
//! wrapped call propagate before a line is written.
//!
//! ### `sort`
//! A helper ordering keyed float entries by the fractional part of the value.
//!
//! ## Usage Example
//! ```rust
//! use num_bigint::BigUint;
//! use recurseq::recurrence::Recurrence;
//!
//! let seed = vec![BigUint::from(0u32), BigUint::from(1u32)];
//! let fib = Recurrence::new(seed, |w| &w[w.len() - 1] + &w[w.len() - 2]).unwrap();
//! let first: Vec<BigUint> = fib.take(10).collect();
//! assert_eq!(first[9], BigUint::from(34u32));
//! ```

pub mod fibonacci;
pub mod recurrence;
pub mod report;
pub mod sort;
