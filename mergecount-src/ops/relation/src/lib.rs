//! Relations between an element of a left run and an element of a right
//! run.
//!
//! A pair `(i, j)` with `i < j` counts when `rel.holds(&a[i], &a[j])`.

pub trait Relation<T: ?Sized> {
    fn holds(&self, left: &T, right: &T) -> bool;
}

/// Relations the two-pointer counter may rely on.
///
/// For a right run sorted ascending, the elements `r` with `holds(l, r)`
/// must form a prefix of the run, and the prefix must not shrink as `l`
/// grows. `a > b`, `a >= b` and `a > k * b` with `k >= 0` qualify;
/// `a < b` and `a != b` do not.
///
/// Implementing this for a relation that lacks the property does not break
/// memory safety, it only yields wrong counts.
pub trait Monotone<T: ?Sized>: Relation<T> {}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Relation<T> for F {
    fn holds(&self, left: &T, right: &T) -> bool { self(left, right) }
}

/// Promotes a closure (or any relation) to [`Monotone`] on the caller's
/// word.
///
/// ```
/// use relation::{AssumeMonotone, Monotone, Relation};
///
/// fn takes_monotone<R: Monotone<i32>>(rel: R) -> bool { rel.holds(&3, &1) }
///
/// assert!(takes_monotone(AssumeMonotone(|a: &i32, b: &i32| a > &(b + 1))));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AssumeMonotone<R>(pub R);

impl<T: ?Sized, R: Relation<T>> Relation<T> for AssumeMonotone<R> {
    fn holds(&self, left: &T, right: &T) -> bool { self.0.holds(left, right) }
}
impl<T: ?Sized, R: Relation<T>> Monotone<T> for AssumeMonotone<R> {}

/// `left > right`; counting it gives the number of inversions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greater;

impl<T: Ord + ?Sized> Relation<T> for Greater {
    fn holds(&self, left: &T, right: &T) -> bool { left > right }
}
impl<T: Ord + ?Sized> Monotone<T> for Greater {}

/// `left >= right`.
///
/// Unlike [`Greater`], equal elements count, so a sorted sequence with
/// duplicates still has a nonzero count.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreaterOrEqual;

impl<T: Ord + ?Sized> Relation<T> for GreaterOrEqual {
    fn holds(&self, left: &T, right: &T) -> bool { left >= right }
}
impl<T: Ord + ?Sized> Monotone<T> for GreaterOrEqual {}

/// Lossless conversion into `i128`, wide enough for any product of a
/// primitive integer and a `u32` factor.
pub trait Widen: Copy {
    fn widen(self) -> i128;
}

macro_rules! impl_widen {
    ( $($ty:ty)* ) => { $(
        impl Widen for $ty {
            fn widen(self) -> i128 { self as i128 }
        }
    )* }
}

impl_widen! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize }

/// `left > factor * right`, evaluated in `i128`.
///
/// With `factor == 2` this is the reverse-pair relation. The comparison
/// never wraps: `i32::MAX > 2 * i32::MAX` is false, as it should be.
#[derive(Clone, Copy, Debug)]
pub struct ScaledGreater(pub u32);

impl<T: Widen> Relation<T> for ScaledGreater {
    fn holds(&self, &left: &T, &right: &T) -> bool {
        left.widen() > self.0 as i128 * right.widen()
    }
}
impl<T: Widen> Monotone<T> for ScaledGreater {}
