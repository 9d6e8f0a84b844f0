use std::cmp::Ordering;

use crate::big_array::BigArray;
use crate::element::Element;
use crate::error::Result;
use crate::range::check_from_to;

/// Searches the sorted array `a` for `key`.
///
/// Returns `Ok(index)` of some element equal to `key`, or `Err(insertion_point)`
/// where inserting `key` keeps `a` sorted.
pub fn binary_search<T: Element, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    key: &T,
) -> std::result::Result<u64, u64> {
    search(a, 0, a.len(), key, &mut T::natural_cmp)
}

/// Searches the sorted range `[from, to)` of `a` for `key`.
pub fn binary_search_range<T: Element, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    key: &T,
) -> Result<std::result::Result<u64, u64>> {
    check_from_to(a.len(), from, to)?;
    Ok(search(a, from, to, key, &mut T::natural_cmp))
}

/// Searches `a`, sorted by `cmp`, for `key`.
pub fn binary_search_by<T, F, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    key: &T,
    mut cmp: F,
) -> std::result::Result<u64, u64>
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    search(a, 0, a.len(), key, &mut cmp)
}

/// Searches the range `[from, to)` of `a`, sorted by `cmp`, for `key`.
pub fn binary_search_range_by<T, F, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    key: &T,
    mut cmp: F,
) -> Result<std::result::Result<u64, u64>>
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    check_from_to(a.len(), from, to)?;
    Ok(search(a, from, to, key, &mut cmp))
}

fn search<T, F, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    key: &T,
    cmp: &mut F,
) -> std::result::Result<u64, u64>
where
    T: Element,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut lo, mut hi) = (from, to);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&a[mid], key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(lo)
}
