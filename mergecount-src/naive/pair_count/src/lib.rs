use relation::Relation;

/// Checks every pair, in $`O(n^2)`$ time.
pub trait NaivePairCount {
    type Item;
    fn naive_pair_count(&self, rel: impl Relation<Self::Item>) -> u64;
    fn naive_related_after(&self, rel: impl Relation<Self::Item>) -> Vec<u64>;
}

impl<T> NaivePairCount for [T] {
    type Item = T;
    fn naive_pair_count(&self, rel: impl Relation<T>) -> u64 {
        self.naive_related_after(rel).into_iter().sum()
    }
    fn naive_related_after(&self, rel: impl Relation<T>) -> Vec<u64> {
        (0..self.len())
            .map(|i| {
                self[i + 1..].iter().filter(|x| rel.holds(&self[i], x)).count()
                    as u64
            })
            .collect()
    }
}

#[test]
fn sanity_check() {
    use relation::{Greater, ScaledGreater};

    assert_eq!([5, 4, 3, 2, 1].naive_pair_count(Greater), 10);
    assert_eq!([1, 3, 2, 3, 1].naive_pair_count(ScaledGreater(2)), 2);
    assert_eq!([5, 2, 6, 1].naive_related_after(Greater), [2, 1, 1, 0]);
    assert_eq!([1, 2, 3].naive_pair_count(|a: &i32, b: &i32| a < b), 3);

    let empty: [i32; 0] = [];
    assert_eq!(empty.naive_pair_count(Greater), 0);
    assert!(empty.naive_related_after(Greater).is_empty());
}
