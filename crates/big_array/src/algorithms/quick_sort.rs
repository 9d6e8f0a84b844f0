use std::cmp::Ordering;

use crate::big_array::BigArray;
use crate::element::Element;
use crate::error::Result;
use crate::range::check_from_to;
use crate::TUNED_PARAMS;

use super::common;

/// Sorts `x` by natural order.
pub fn quick_sort<T: Element, const SHIFT: u32>(x: &mut BigArray<T, SHIFT>) {
    let len = x.len();
    quick_sort_recursive(x, 0, len, &mut T::natural_cmp);
}

/// Sorts `[from, to)` of `x` by natural order.
pub fn quick_sort_range<T: Element, const SHIFT: u32>(
    x: &mut BigArray<T, SHIFT>,
    from: u64,
    to: u64,
) -> Result<()> {
    check_from_to(x.len(), from, to)?;
    quick_sort_recursive(x, from, to, &mut T::natural_cmp);
    Ok(())
}

/// Sorts `x` by `cmp`.
pub fn quick_sort_by<T, F, const SHIFT: u32>(x: &mut BigArray<T, SHIFT>, mut cmp: F)
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = x.len();
    quick_sort_recursive(x, 0, len, &mut cmp);
}

/// Sorts `[from, to)` of `x` by `cmp`.
pub fn quick_sort_range_by<T, F, const SHIFT: u32>(
    x: &mut BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    mut cmp: F,
) -> Result<()>
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    check_from_to(x.len(), from, to)?;
    quick_sort_recursive(x, from, to, &mut cmp);
    Ok(())
}

fn quick_sort_recursive<T, F, const SHIFT: u32>(
    x: &mut BigArray<T, SHIFT>,
    mut from: u64,
    mut to: u64,
    cmp: &mut F,
)
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let len = to - from;
        if len < TUNED_PARAMS.small_threshold {
            common::selection_sort_by(x, from, to, cmp);
            return;
        }

        let pivot = x[choose_pivot(x, from, to, cmp)];
        let (less, greater) = partition_3way(x, from, to, &pivot, cmp);

        // Recurse into the smaller side, loop on the larger one.
        if less < greater {
            if less > 1 {
                quick_sort_recursive(x, from, from + less, cmp);
            }
            if greater <= 1 {
                return;
            }
            from = to - greater;
        } else {
            if greater > 1 {
                quick_sort_recursive(x, to - greater, to, cmp);
            }
            if less <= 1 {
                return;
            }
            to = from + less;
        }
    }
}

/// Middle element, median of 3, or pseudomedian of 9 depending on the range size.
fn choose_pivot<T, F, const SHIFT: u32>(
    x: &BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    cmp: &mut F,
) -> u64
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = to - from;
    let mut m = from + len / 2;
    if len > TUNED_PARAMS.small_threshold {
        let mut l = from;
        let mut n = to - 1;
        if len > TUNED_PARAMS.medium_threshold {
            let s = len / 8;
            l = common::med3(x, l, l + s, l + 2 * s, cmp);
            m = common::med3(x, m - s, m, m + s, cmp);
            n = common::med3(x, n - 2 * s, n - s, n, cmp);
        }
        m = common::med3(x, l, m, n, cmp);
    }
    m
}

/// Rearranges `[from, to)` into `[< pivot][== pivot][> pivot]`.
///
/// Returns the sizes of the first and last blocks.
fn partition_3way<T, F, const SHIFT: u32>(
    x: &mut BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    pivot: &T,
    cmp: &mut F,
) -> (u64, u64)
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    // Signed cursors: `c` may step one below `from`.
    let (lo, hi) = (from as i64, to as i64);
    let (mut a, mut b) = (lo, lo);
    let (mut c, mut d) = (hi - 1, hi - 1);

    // Pivot-equal elements gather in [lo, a) and (d, hi).
    loop {
        while b <= c {
            let ord = cmp(&x[b as u64], pivot);
            if ord == Ordering::Greater {
                break;
            }
            if ord == Ordering::Equal {
                x.swap(a as u64, b as u64);
                a += 1;
            }
            b += 1;
        }
        while c >= b {
            let ord = cmp(&x[c as u64], pivot);
            if ord == Ordering::Less {
                break;
            }
            if ord == Ordering::Equal {
                x.swap(c as u64, d as u64);
                d -= 1;
            }
            c -= 1;
        }
        if b > c {
            break;
        }
        x.swap(b as u64, c as u64);
        b += 1;
        c -= 1;
    }

    let s = (a - lo).min(b - a);
    common::vec_swap(x, from, (b - s) as u64, s as u64);
    let s = (d - c).min(hi - d - 1);
    common::vec_swap(x, b as u64, (hi - s) as u64, s as u64);

    ((b - a) as u64, (d - c) as u64)
}
