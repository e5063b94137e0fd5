use merge_count::{CrossCounter, MergeCounter};

/// Number of pairs `i < j` with `self[i] > self[j]`; `self` is not modified.
pub trait Inversion {
    fn inversion(&self) -> u64;
}

// Counts while merging rather than before: a right element placed ahead of
// `pending` left elements is smaller than each of them.
struct OnMerge;

impl<T> CrossCounter<T> for OnMerge {
    fn count_cross(&mut self, _: &[T], _: &[T]) -> u64 { 0 }
    fn on_right_placed(&mut self, _: &T, pending: usize) -> u64 {
        pending as u64
    }
}

impl<T: Ord + Clone> Inversion for [T] {
    fn inversion(&self) -> u64 {
        let mut buf = self.to_vec();
        MergeCounter::with_capacity(self.len())
            .count_with(&mut buf, &mut OnMerge)
    }
}
