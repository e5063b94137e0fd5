use std::ops::{Range, RangeInclusive};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` independent draws from `bound`.
pub struct Seq<B> {
    pub bound: B,
    pub len: usize,
}

/// Same as [`Seq`], then sorted ascending.
pub struct Asc<B> {
    pub bound: B,
    pub len: usize,
}

/// A uniformly random permutation of `0..n`.
pub struct Permutation(pub usize);

macro_rules! impl_gen_range {
    ( $($ty:ty)* ) => { $(
        impl Gen for Range<$ty> {
            type Output = $ty;
            fn generate<R: Rng>(&self, rng: &mut R) -> $ty {
                Uniform::from(self.clone()).sample(rng)
            }
        }
        impl Gen for RangeInclusive<$ty> {
            type Output = $ty;
            fn generate<R: Rng>(&self, rng: &mut R) -> $ty {
                Uniform::from(self.clone()).sample(rng)
            }
        }
    )* }
}

impl_gen_range! { i32 i64 u32 u64 usize }

impl<B: Gen> Gen for Seq<B> {
    type Output = Vec<B::Output>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        (0..self.len).map(|_| self.bound.generate(rng)).collect()
    }
}

impl<B: Gen> Gen for Asc<B>
where
    B::Output: Ord,
{
    type Output = Vec<B::Output>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound, len } = self;
        let mut res = Seq { bound, len: *len }.generate(rng);
        res.sort_unstable();
        res
    }
}

impl<B: Gen> Gen for &B {
    type Output = B::Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> B::Output {
        (**self).generate(rng)
    }
}

impl Gen for Permutation {
    type Output = Vec<usize>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut res: Vec<_> = (0..self.0).collect();
        res.shuffle(rng);
        res
    }
}
