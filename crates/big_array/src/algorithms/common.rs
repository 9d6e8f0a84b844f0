use std::cmp::Ordering;

use crate::big_array::BigArray;
use crate::element::Element;

/// Index of the median of the elements at `a`, `b` and `c`.
#[inline]
pub fn med3<T, F, const SHIFT: u32>(
    x: &BigArray<T, SHIFT>,
    a: u64,
    b: u64,
    c: u64,
    cmp: &mut F,
) -> u64
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    let ab = cmp(&x[a], &x[b]);
    let ac = cmp(&x[a], &x[c]);
    let bc = cmp(&x[b], &x[c]);
    if ab == Ordering::Less {
        if bc == Ordering::Less {
            b
        } else if ac == Ordering::Less {
            c
        } else {
            a
        }
    } else if bc == Ordering::Greater {
        b
    } else if ac == Ordering::Greater {
        c
    } else {
        a
    }
}

/// Sorts `[from, to)` by repeatedly selecting the minimum.
pub fn selection_sort_by<T, F, const SHIFT: u32>(
    x: &mut BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    cmp: &mut F,
)
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    if to - from < 2 {
        return;
    }
    for i in from..to - 1 {
        let mut m = i;
        for j in i + 1..to {
            if cmp(&x[j], &x[m]) == Ordering::Less {
                m = j;
            }
        }
        if m != i {
            x.swap(i, m);
        }
    }
}

/// Swaps `[a, a + n)` with `[b, b + n)`.
#[inline]
pub fn vec_swap<T: Element, const SHIFT: u32>(x: &mut BigArray<T, SHIFT>, a: u64, b: u64, n: u64) {
    for i in 0..n {
        x.swap(a + i, b + i);
    }
}
