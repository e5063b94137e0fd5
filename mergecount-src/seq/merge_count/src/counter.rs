//! Counting cross pairs between two sorted runs.

use relation::{Monotone, Relation};

/// What the orchestrator asks at every merge node.
///
/// `count_cross` runs first, with `left` and `right` each sorted ascending
/// and not yet interleaved. The merge then calls `on_right_placed` for
/// every right element that overtakes `pending > 0` left elements. The
/// node's count is the sum of everything returned.
pub trait CrossCounter<T> {
    fn count_cross(&mut self, left: &[T], right: &[T]) -> u64;
    fn on_right_placed(&mut self, _elt: &T, _pending: usize) -> u64 { 0 }
}

/// Linear-time counting for monotone relations.
#[derive(Clone, Copy, Debug)]
pub struct TwoPointer<R>(pub R);

/// Quadratic counting for arbitrary relations.
#[derive(Clone, Copy, Debug)]
pub struct Scan<R>(pub R);

impl<T, R: Monotone<T>> CrossCounter<T> for TwoPointer<R> {
    fn count_cross(&mut self, left: &[T], right: &[T]) -> u64 {
        two_pointer_with(left, right, &self.0, |_, _| {})
    }
}

impl<T, R: Relation<T>> CrossCounter<T> for Scan<R> {
    fn count_cross(&mut self, left: &[T], right: &[T]) -> u64 {
        scan_with(left, right, &self.0, |_, _| {})
    }
}

/// For each element `l` of `left`, in order, counts the elements `r` of
/// `right` with `rel.holds(l, r)`, reports it through `each(l, count)`, and
/// returns the total.
///
/// The boundary in `right` only moves forward, so this costs
/// `O(left.len() + right.len())` relation calls.
pub fn two_pointer_with<T, R: Monotone<T> + ?Sized>(
    left: &[T],
    right: &[T],
    rel: &R,
    mut each: impl FnMut(&T, usize),
) -> u64 {
    let mut j = 0;
    let mut res = 0;
    for l in left {
        while j < right.len() && rel.holds(l, &right[j]) {
            j += 1;
        }
        each(l, j);
        res += j as u64;
    }
    res
}

/// Same contract as [`two_pointer_with`] without the monotonicity
/// requirement, at `O(left.len() * right.len())`.
pub fn scan_with<T, R: Relation<T> + ?Sized>(
    left: &[T],
    right: &[T],
    rel: &R,
    mut each: impl FnMut(&T, usize),
) -> u64 {
    let mut res = 0;
    for l in left {
        let count = right.iter().filter(|r| rel.holds(l, r)).count();
        each(l, count);
        res += count as u64;
    }
    res
}

#[cfg(test)]
mod tests {
    use relation::{Greater, ScaledGreater};

    use super::*;

    #[test]
    fn sanity_check() {
        let left = [1, 3, 5, 7];
        let right = [2, 3, 6];
        // 3 > 2, 5 > 2, 5 > 3, 7 > 2, 7 > 3, 7 > 6
        assert_eq!(TwoPointer(Greater).count_cross(&left, &right), 6);
        assert_eq!(Scan(Greater).count_cross(&left, &right), 6);

        // 5 > 2 * 2, 7 > 2 * 2, 7 > 2 * 3
        assert_eq!(TwoPointer(ScaledGreater(2)).count_cross(&left, &right), 3);

        let empty: [i32; 0] = [];
        assert_eq!(TwoPointer(Greater).count_cross(&empty, &right), 0);
        assert_eq!(TwoPointer(Greater).count_cross(&left, &empty), 0);
    }

    #[test]
    fn per_left_counts() {
        let left = [1, 3, 3, 9];
        let right = [0, 3, 4];
        let mut seen = vec![];
        let total =
            two_pointer_with(&left, &right, &Greater, |&l, k| seen.push((l, k)));
        assert_eq!(seen, [(1, 1), (3, 1), (3, 1), (9, 3)]);
        assert_eq!(total, 6);

        let ne = |a: &i32, b: &i32| a != b;
        let mut seen = vec![];
        let total = scan_with(&left, &right, &ne, |&l, k| seen.push((l, k)));
        assert_eq!(seen, [(1, 3), (3, 2), (3, 2), (9, 3)]);
        assert_eq!(total, 10);
    }

    #[test]
    fn duplicates_on_both_sides() {
        let left = [2, 2, 2];
        let right = [1, 1, 2, 2];
        assert_eq!(TwoPointer(Greater).count_cross(&left, &right), 6);
        let ge = relation::GreaterOrEqual;
        assert_eq!(TwoPointer(ge).count_cross(&left, &right), 12);
    }
}
