use merge_count::{counter, CrossCounter, MergeCounter};
use relation::{Greater, Monotone, Relation};

pub trait SmallerAfter {
    type Item;

    /// `res[i]` is the number of `j > i` with `self[j] < self[i]`.
    ///
    /// ```
    /// use smaller_after::SmallerAfter;
    ///
    /// assert_eq!([5, 2, 6, 1].smaller_after(), [2, 1, 1, 0]);
    /// ```
    fn smaller_after(&self) -> Vec<u64>;

    /// `res[i]` is the number of `j > i` with `rel.holds(&self[i], &self[j])`.
    fn related_after<R: Monotone<Self::Item>>(&self, rel: R) -> Vec<u64>;
}

// Elements travel with their original index; ties on the value are broken
// by the index, which keeps the sort stable and the relation monotone.
struct OnValue<R>(R);

impl<T, R: Relation<T>> Relation<(T, usize)> for OnValue<R> {
    fn holds(&self, left: &(T, usize), right: &(T, usize)) -> bool {
        self.0.holds(&left.0, &right.0)
    }
}
impl<T, R: Monotone<T>> Monotone<(T, usize)> for OnValue<R> {}

struct PerElement<'a, R> {
    rel: OnValue<R>,
    counts: &'a mut [u64],
}

impl<T, R: Monotone<T>> CrossCounter<(T, usize)> for PerElement<'_, R> {
    fn count_cross(
        &mut self,
        left: &[(T, usize)],
        right: &[(T, usize)],
    ) -> u64 {
        let Self { rel, counts } = self;
        counter::two_pointer_with(left, right, &*rel, |&(_, i), k| {
            counts[i] += k as u64;
        })
    }
}

impl<T: Ord + Clone> SmallerAfter for [T] {
    type Item = T;
    fn smaller_after(&self) -> Vec<u64> { self.related_after(Greater) }
    fn related_after<R: Monotone<T>>(&self, rel: R) -> Vec<u64> {
        let mut indexed: Vec<_> = self.iter().cloned().zip(0..).collect();
        let mut res = vec![0; self.len()];
        let mut counter = PerElement { rel: OnValue(rel), counts: &mut res };
        MergeCounter::with_capacity(self.len())
            .count_with(&mut indexed, &mut counter);
        res
    }
}
