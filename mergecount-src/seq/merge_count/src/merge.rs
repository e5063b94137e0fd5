//! Stable merge of two adjacent sorted runs.

/// Merges `run[..mid]` and `run[mid..]`, both sorted ascending, so that the
/// whole of `run` is sorted ascending.
///
/// Ties take from the left run, so equal elements keep their relative
/// order. Only the left run is copied out, into `scratch`; the right run is
/// read in place, since the write position never overtakes it.
///
/// Each time an element of the right run is placed while `pending > 0`
/// elements of the left run are still waiting, `on_right(elt, pending)` is
/// called. Every one of those pending elements is strictly greater than
/// `elt`.
///
/// If either run is not sorted the result is some permutation of `run`.
pub fn merge_with<T: Ord + Clone>(
    run: &mut [T],
    mid: usize,
    scratch: &mut Vec<T>,
    mut on_right: impl FnMut(&T, usize),
) {
    let n = run.len();
    assert!(mid <= n, "merge point {mid} out of range for run of length {n}");
    if mid == 0 || mid == n || run[mid - 1] <= run[mid] {
        return;
    }

    scratch.clear();
    scratch.extend_from_slice(&run[..mid]);

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < n {
        if run[j] < scratch[i] {
            on_right(&run[j], mid - i);
            run[k] = run[j].clone();
            j += 1;
        } else {
            run[k].clone_from(&scratch[i]);
            i += 1;
        }
        k += 1;
    }
    // the tail of the right run, if any, is already in place
    for x in &scratch[i..] {
        run[k].clone_from(x);
        k += 1;
    }
}

pub fn merge<T: Ord + Clone>(run: &mut [T], mid: usize, scratch: &mut Vec<T>) {
    merge_with(run, mid, scratch, |_, _| {});
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_check() {
        let mut scratch = vec![];

        let mut a = [1, 4, 6, 2, 3, 5];
        merge(&mut a, 3, &mut scratch);
        assert_eq!(a, [1, 2, 3, 4, 5, 6]);

        let mut a = [4, 5, 6, 1, 2];
        merge(&mut a, 3, &mut scratch);
        assert_eq!(a, [1, 2, 4, 5, 6]);

        let mut a = [1, 2, 3];
        merge(&mut a, 0, &mut scratch);
        assert_eq!(a, [1, 2, 3]);
        merge(&mut a, 3, &mut scratch);
        assert_eq!(a, [1, 2, 3]);

        let mut empty: [i32; 0] = [];
        merge(&mut empty, 0, &mut scratch);
    }

    #[test]
    fn hook_sees_pending_left() {
        let mut scratch = vec![];
        let mut seen = vec![];
        let mut a = [2, 5, 7, 1, 5, 8];
        merge_with(&mut a, 3, &mut scratch, |&x, pending| {
            seen.push((x, pending))
        });
        assert_eq!(a, [1, 2, 5, 5, 7, 8]);
        // 5 on the right ties with 5 on the left, which goes first
        assert_eq!(seen, [(1, 3), (5, 1)]);
        assert_eq!(seen.iter().map(|&(_, p)| p).sum::<usize>(), 4);
    }

    #[test]
    fn stable_on_ties() {
        #[derive(Clone, Debug)]
        struct Tagged(u8, char);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut scratch = vec![];
        let mut a = [
            Tagged(1, 'a'),
            Tagged(2, 'b'),
            Tagged(2, 'c'),
            Tagged(1, 'd'),
            Tagged(2, 'e'),
        ];
        merge(&mut a, 3, &mut scratch);
        let tags: String = a.iter().map(|t| t.1).collect();
        assert_eq!(tags, "adbce");
    }

    #[test]
    #[should_panic]
    fn merge_point_past_end() {
        let mut a = [1, 2];
        merge(&mut a, 3, &mut vec![]);
    }
}
