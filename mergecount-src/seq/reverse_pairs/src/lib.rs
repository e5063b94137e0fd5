use merge_count::CountAndSort;
use relation::{ScaledGreater, Widen};

pub trait ReversePairs {
    /// Number of pairs `i < j` with `self[i] > 2 * self[j]`.
    fn reverse_pairs(&self) -> u64 { self.scaled_pairs(2) }
    /// Number of pairs `i < j` with `self[i] > factor * self[j]`.
    ///
    /// The product is taken in `i128`, so no input makes it wrap.
    fn scaled_pairs(&self, factor: u32) -> u64;
}

impl<T: Widen + Ord> ReversePairs for [T] {
    fn scaled_pairs(&self, factor: u32) -> u64 {
        self.to_vec().count_and_sort(ScaledGreater(factor))
    }
}

#[cfg(test)]
mod tests {
    use pair_count::NaivePairCount;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use randgen::{Gen, Seq};

    use super::*;

    #[test]
    fn sanity_check() {
        assert_eq!([1, 3, 2, 3, 1].reverse_pairs(), 2);
        assert_eq!([2, 4, 3, 5, 1].reverse_pairs(), 3);
        assert_eq!([5, 4, 3, 2, 1].scaled_pairs(1), 10);
        assert_eq!([5, 4, 3, 2, 1].scaled_pairs(0), 10);
        assert_eq!([0, 0, 0].scaled_pairs(0), 0);

        let empty: [i32; 0] = [];
        assert_eq!(empty.reverse_pairs(), 0);
        assert_eq!([7].reverse_pairs(), 0);
    }

    #[test]
    fn no_overflow() {
        assert_eq!([i32::MAX; 6].reverse_pairs(), 0);
        assert_eq!([i32::MIN; 6].reverse_pairs(), 15);
        assert_eq!([i32::MAX, i32::MAX / 2].reverse_pairs(), 1);
        assert_eq!([i32::MAX, i32::MAX / 2 + 1].reverse_pairs(), 0);
        assert_eq!([i64::MAX, i64::MIN].reverse_pairs(), 1);
        assert_eq!([u64::MAX, u64::MAX / 2].reverse_pairs(), 1);
        assert_eq!([u64::MAX; 3].scaled_pairs(u32::MAX), 0);
    }

    #[test]
    fn check() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        for _ in 0..5000 {
            let len = rng.gen_range(0..=12);
            let a = Seq { bound: i64::MIN..=i64::MAX, len }.generate(&mut rng);
            assert_eq!(a.reverse_pairs(), a.naive_pair_count(ScaledGreater(2)));

            let a = Seq { bound: -8..8, len }.generate(&mut rng);
            for k in 0..4 {
                let expected = a.naive_pair_count(ScaledGreater(k));
                assert_eq!(a.scaled_pairs(k), expected);
            }
        }
    }
}
