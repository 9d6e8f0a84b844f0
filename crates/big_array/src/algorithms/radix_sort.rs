//! Most-significant-digit radix sort with an explicit work stack.
//!
//! Each pass caches the current digit of every element of the range in a
//! byte array (the digit oracle), counts bucket sizes, then permutes the
//! elements in place by following cycles.

use std::cmp::Ordering;

use log::trace;

use crate::big_array::BigArray;
use crate::element::{Element, RadixKey};
use crate::error::Result;
use crate::range::{check_from_to, ensure_same_length};
use crate::TUNED_PARAMS;

use super::common;

const DIGIT_BITS: usize = TUNED_PARAMS.radix_digit_bits;
const BUCKETS: usize = 1 << DIGIT_BITS;
const DIGIT_MASK: u64 = (BUCKETS - 1) as u64;
const SIGN_MASK: u8 = 1 << (DIGIT_BITS - 1);

const _: () = assert!(DIGIT_BITS > 0 && DIGIT_BITS <= 8, "digits are cached as bytes");

/// Pending sub-range: `(first, length, level)`.
type Frame = (u64, u64, usize);

/// Sorts `a` ascending by natural order.
pub fn radix_sort<K: RadixKey, const SHIFT: u32>(a: &mut BigArray<K, SHIFT>) {
    let len = a.len();
    radix_sort_unchecked(a, 0, len);
}

/// Sorts `[from, to)` of `a` ascending by natural order.
pub fn radix_sort_range<K: RadixKey, const SHIFT: u32>(
    a: &mut BigArray<K, SHIFT>,
    from: u64,
    to: u64,
) -> Result<()> {
    check_from_to(a.len(), from, to)?;
    radix_sort_unchecked(a, from, to);
    Ok(())
}

/// Sorts the pairs `(a[i], b[i])` lexicographically, moving both arrays together.
pub fn radix_sort_pair<K, L, const SHIFT: u32>(
    a: &mut BigArray<K, SHIFT>,
    b: &mut BigArray<L, SHIFT>,
) -> Result<()>
where
    K: RadixKey,
    L: RadixKey,
{
    ensure_same_length(a, b)?;
    let len = a.len();
    radix_sort_pair_unchecked(a, b, 0, len);
    Ok(())
}

/// Sorts the pairs in `[from, to)` lexicographically.
pub fn radix_sort_pair_range<K, L, const SHIFT: u32>(
    a: &mut BigArray<K, SHIFT>,
    b: &mut BigArray<L, SHIFT>,
    from: u64,
    to: u64,
) -> Result<()>
where
    K: RadixKey,
    L: RadixKey,
{
    ensure_same_length(a, b)?;
    check_from_to(a.len(), from, to)?;
    radix_sort_pair_unchecked(a, b, from, to);
    Ok(())
}

/// Digit `level` of `key`, counted from the most significant one.
#[inline]
fn digit<K: RadixKey>(key: K, level: usize) -> u8 {
    let shift = (K::DIGITS - 1 - level) * DIGIT_BITS;
    let sign_mask = if level == 0 && K::SIGNED { SIGN_MASK } else { 0 };
    ((key.radix_bits() >> shift) & DIGIT_MASK) as u8 ^ sign_mask
}

/// Turns bucket counts into end positions and queues the buckets that need
/// another pass. Returns the last non-empty bucket.
#[inline]
fn plan_buckets(
    count: &[u64; BUCKETS],
    pos: &mut [u64; BUCKETS],
    stack: &mut Vec<Frame>,
    first: u64,
    level: usize,
    max_level: usize,
) -> usize {
    let mut last_used = 0;
    let mut p = 0_u64;
    for (i, &c) in count.iter().enumerate() {
        if c != 0 {
            last_used = i;
            if level < max_level && c > 1 {
                stack.push((first + p, c, level + 1));
            }
        }
        p += c;
        pos[i] = p;
    }
    last_used
}

fn radix_sort_unchecked<K: RadixKey, const SHIFT: u32>(
    a: &mut BigArray<K, SHIFT>,
    from: u64,
    to: u64,
) {
    let max_level = K::DIGITS - 1;
    let mut stack: Vec<Frame> = Vec::with_capacity((BUCKETS - 1) * max_level + 1);
    stack.push((from, to - from, 0));
    let mut count = [0_u64; BUCKETS];
    let mut pos = [0_u64; BUCKETS];
    let mut digits = BigArray::<u8, SHIFT>::zeroed(to - from);
    let mut peak = 0;

    while let Some((first, length, level)) = stack.pop() {
        if length < TUNED_PARAMS.medium_threshold {
            common::selection_sort_by(a, first, first + length, &mut K::natural_cmp);
            continue;
        }

        for i in 0..length {
            digits[i] = digit(a[first + i], level);
        }
        for i in 0..length {
            count[digits[i] as usize] += 1;
        }
        let last_used = plan_buckets(&count, &mut pos, &mut stack, first, level, max_level);
        peak = peak.max(stack.len());

        // Once every other bucket is placed the last one is too.
        let end = length - count[last_used];
        count[last_used] = 0;
        let mut i = 0;
        while i < end {
            let mut t = a[first + i];
            let mut c = digits[i] as usize;
            loop {
                pos[c] -= 1;
                let d = pos[c];
                if d <= i {
                    break;
                }
                let (z, zz) = (t, c);
                t = a[first + d];
                c = digits[d] as usize;
                a[first + d] = z;
                digits[d] = zz as u8;
            }
            a[first + i] = t;
            i += count[c];
            count[c] = 0;
        }
    }

    trace!("radix sort of {} elements, peak stack depth {peak}", to - from);
}

fn radix_sort_pair_unchecked<K, L, const SHIFT: u32>(
    a: &mut BigArray<K, SHIFT>,
    b: &mut BigArray<L, SHIFT>,
    from: u64,
    to: u64,
)
where
    K: RadixKey,
    L: RadixKey,
{
    let max_level = K::DIGITS + L::DIGITS - 1;
    let mut stack: Vec<Frame> = Vec::with_capacity((BUCKETS - 1) * max_level + 1);
    stack.push((from, to - from, 0));
    let mut count = [0_u64; BUCKETS];
    let mut pos = [0_u64; BUCKETS];
    let mut digits = BigArray::<u8, SHIFT>::zeroed(to - from);
    let mut peak = 0;

    while let Some((first, length, level)) = stack.pop() {
        if length < TUNED_PARAMS.medium_threshold {
            selection_sort_pair(a, b, first, first + length);
            continue;
        }

        if level < K::DIGITS {
            for i in 0..length {
                digits[i] = digit(a[first + i], level);
            }
        } else {
            for i in 0..length {
                digits[i] = digit(b[first + i], level - K::DIGITS);
            }
        }
        for i in 0..length {
            count[digits[i] as usize] += 1;
        }
        let last_used = plan_buckets(&count, &mut pos, &mut stack, first, level, max_level);
        peak = peak.max(stack.len());

        let end = length - count[last_used];
        count[last_used] = 0;
        let mut i = 0;
        while i < end {
            let mut t = a[first + i];
            let mut u = b[first + i];
            let mut c = digits[i] as usize;
            loop {
                pos[c] -= 1;
                let d = pos[c];
                if d <= i {
                    break;
                }
                let (z, w, zz) = (t, u, c);
                t = a[first + d];
                u = b[first + d];
                c = digits[d] as usize;
                a[first + d] = z;
                b[first + d] = w;
                digits[d] = zz as u8;
            }
            a[first + i] = t;
            b[first + i] = u;
            i += count[c];
            count[c] = 0;
        }
    }

    trace!("pair radix sort of {} elements, peak stack depth {peak}", to - from);
}

fn selection_sort_pair<K, L, const SHIFT: u32>(
    a: &mut BigArray<K, SHIFT>,
    b: &mut BigArray<L, SHIFT>,
    from: u64,
    to: u64,
)
where
    K: Element,
    L: Element,
{
    if to - from < 2 {
        return;
    }
    for i in from..to - 1 {
        let mut m = i;
        for j in i + 1..to {
            let ord = a[j].natural_cmp(&a[m]).then_with(|| b[j].natural_cmp(&b[m]));
            if ord == Ordering::Less {
                m = j;
            }
        }
        if m != i {
            a.swap(i, m);
            b.swap(i, m);
        }
    }
}
