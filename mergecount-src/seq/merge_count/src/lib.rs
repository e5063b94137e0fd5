//! Merge sort that counts cross pairs on the way.
//!
//! For a sequence `a` and a relation `rel`, the number of index pairs
//! `i < j` with `rel(a[i], a[j])` is gathered while `a` is merge-sorted in
//! place. At every merge node the left run holds only elements that came
//! before every element of the right run, so each pair is counted exactly
//! once, at the node where its two indices are split apart.
//!
//! ```
//! use merge_count::CountAndSort;
//! use relation::{Greater, ScaledGreater};
//!
//! let mut a = vec![5, 4, 3, 2, 1];
//! assert_eq!(a.count_and_sort(Greater), 10);
//! assert_eq!(a, [1, 2, 3, 4, 5]);
//!
//! let mut a = vec![1, 3, 2, 3, 1];
//! assert_eq!(a.count_and_sort(ScaledGreater(2)), 2);
//! ```
//!
//! With a [`Monotone`] relation each node costs linear time, for
//! $`O(n\log(n))`$ overall. Any other [`Relation`] goes through
//! [`CountAndSort::count_and_sort_by`], which scans every cross pair and is
//! quadratic.

use std::ops::Range;

use relation::{Monotone, Relation};

pub mod counter;
pub mod merge;

pub use counter::{CrossCounter, Scan, TwoPointer};

/// Order in which merge nodes are visited.
///
/// Both strategies visit the same kind of nodes (two adjacent sorted runs,
/// every element of the left one preceding every element of the right
/// one), so they return the same count and leave the same sorted sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Recursive halving at `lo + (hi - lo) / 2`.
    #[default]
    TopDown,
    /// Passes over runs of width 1, 2, 4, ...; no recursion.
    BottomUp,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range start {start} is greater than end {end}")]
    Inverted { start: usize, end: usize },
    #[error("range end {end} out of range for sequence of length {len}")]
    OutOfBounds { end: usize, len: usize },
}

fn check_range(range: &Range<usize>, len: usize) -> Result<(), RangeError> {
    let Range { start, end } = *range;
    if start > end {
        Err(RangeError::Inverted { start, end })
    } else if end > len {
        Err(RangeError::OutOfBounds { end, len })
    } else {
        Ok(())
    }
}

/// Reusable scratch space plus the visiting [`Strategy`].
///
/// The scratch buffer grows to the length of the longest sequence seen and
/// is kept between calls.
#[derive(Clone, Debug)]
pub struct MergeCounter<T> {
    scratch: Vec<T>,
    strategy: Strategy,
}

impl<T> Default for MergeCounter<T> {
    fn default() -> Self { Self::new() }
}

impl<T> MergeCounter<T> {
    pub fn new() -> Self {
        Self { scratch: vec![], strategy: Strategy::default() }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self { scratch: Vec::with_capacity(capacity), ..Self::new() }
    }
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }
    pub fn strategy(&self) -> Strategy { self.strategy }
}

impl<T: Ord + Clone> MergeCounter<T> {
    /// Sorts `seq` and returns the number of pairs `i < j` with
    /// `rel.holds(&seq[i], &seq[j])`, indices taken before sorting.
    pub fn count_and_sort<R: Monotone<T>>(
        &mut self,
        seq: &mut [T],
        rel: R,
    ) -> u64 {
        self.count_with(seq, &mut TwoPointer(rel))
    }

    /// Like [`count_and_sort`](Self::count_and_sort) for a relation with no
    /// monotonicity guarantee. Quadratic.
    pub fn count_and_sort_by<R: Relation<T>>(
        &mut self,
        seq: &mut [T],
        rel: R,
    ) -> u64 {
        self.count_with(seq, &mut Scan(rel))
    }

    /// Works on `seq[range]` only; the rest of `seq` is left as is.
    ///
    /// # Panics
    /// If `range` is inverted or reaches past `seq.len()`.
    pub fn count_and_sort_range<R: Monotone<T>>(
        &mut self,
        seq: &mut [T],
        range: Range<usize>,
        rel: R,
    ) -> u64 {
        if let Err(e) = check_range(&range, seq.len()) {
            panic!("{e}");
        }
        self.count_and_sort(&mut seq[range], rel)
    }

    /// Non-panicking [`count_and_sort_range`](Self::count_and_sort_range).
    /// On error `seq` is not touched.
    pub fn try_count_and_sort_range<R: Monotone<T>>(
        &mut self,
        seq: &mut [T],
        range: Range<usize>,
        rel: R,
    ) -> Result<u64, RangeError> {
        check_range(&range, seq.len())?;
        Ok(self.count_and_sort(&mut seq[range], rel))
    }

    /// Sorts `seq`, summing what `counter` reports at every merge node.
    pub fn count_with<C: CrossCounter<T>>(
        &mut self,
        seq: &mut [T],
        counter: &mut C,
    ) -> u64 {
        let n = seq.len();
        let _span = tracing::debug_span!(
            "count_and_sort",
            len = n,
            strategy = ?self.strategy
        )
        .entered();

        self.scratch.clear();
        self.scratch.reserve(n);
        let res = match self.strategy {
            Strategy::TopDown => solve(seq, 0, n, &mut self.scratch, counter),
            Strategy::BottomUp => bottom_up(seq, &mut self.scratch, counter),
        };
        tracing::debug!(count = res, "sorted");
        res
    }
}

fn solve<T: Ord + Clone, C: CrossCounter<T>>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    scratch: &mut Vec<T>,
    counter: &mut C,
) -> u64 {
    if hi - lo <= 1 {
        return 0;
    }
    let mid = lo + (hi - lo) / 2;
    let left = solve(seq, lo, mid, scratch, counter);
    let right = solve(seq, mid, hi, scratch, counter);
    left + right + merge_node(seq, lo, mid, hi, scratch, counter)
}

fn bottom_up<T: Ord + Clone, C: CrossCounter<T>>(
    seq: &mut [T],
    scratch: &mut Vec<T>,
    counter: &mut C,
) -> u64 {
    let n = seq.len();
    let mut res = 0;
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while n - lo > width {
            let mid = lo + width;
            let hi = mid + width.min(n - mid);
            res += merge_node(seq, lo, mid, hi, scratch, counter);
            lo = hi;
        }
        width *= 2;
    }
    res
}

fn merge_node<T: Ord + Clone, C: CrossCounter<T>>(
    seq: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    scratch: &mut Vec<T>,
    counter: &mut C,
) -> u64 {
    let run = &mut seq[lo..hi];
    let (left, right) = run.split_at(mid - lo);
    let cross = counter.count_cross(left, right);

    let mut placed = 0;
    merge::merge_with(run, mid - lo, scratch, |elt, pending| {
        placed += counter.on_right_placed(elt, pending);
    });
    tracing::trace!(lo, mid, hi, count = cross + placed, "merged");
    cross + placed
}

/// Entry points on slices, each using a fresh [`MergeCounter`].
pub trait CountAndSort {
    type Item;
    fn count_and_sort<R: Monotone<Self::Item>>(&mut self, rel: R) -> u64;
    fn count_and_sort_by<R: Relation<Self::Item>>(&mut self, rel: R) -> u64;
}

impl<T: Ord + Clone> CountAndSort for [T] {
    type Item = T;
    fn count_and_sort<R: Monotone<T>>(&mut self, rel: R) -> u64 {
        MergeCounter::with_capacity(self.len()).count_and_sort(self, rel)
    }
    fn count_and_sort_by<R: Relation<T>>(&mut self, rel: R) -> u64 {
        MergeCounter::with_capacity(self.len()).count_and_sort_by(self, rel)
    }
}
