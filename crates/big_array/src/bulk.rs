//! Whole-range operations: copying, filling, comparing and shuffling.
//!
//! Copies split the work into runs that never cross a segment boundary on
//! either side, and each run is a single slice copy.

use rand::Rng;

use crate::addressing::{displacement, segment};
use crate::big_array::BigArray;
use crate::element::Element;
use crate::error::Result;
use crate::range::{check_from_to, check_offset_length};

/// Copies `len` elements from `src[src_pos..]` to `dst[dst_pos..]`.
///
/// The arrays are distinct; use [`copy_within`] to move elements inside one array.
pub fn copy<T: Element, const SHIFT: u32>(
    src: &BigArray<T, SHIFT>,
    src_pos: u64,
    dst: &mut BigArray<T, SHIFT>,
    dst_pos: u64,
    len: u64,
) -> Result<()> {
    check_offset_length(src.len(), src_pos, len)?;
    check_offset_length(dst.len(), dst_pos, len)?;
    copy_segments::<T, SHIFT>(&src.segments, src_pos, &mut dst.segments, dst_pos, len);
    Ok(())
}

/// Moves `len` elements from `src_pos` to `dst_pos` inside `a`.
///
/// The result is the same as going through a temporary buffer, even when the
/// two ranges overlap.
pub fn copy_within<T: Element, const SHIFT: u32>(
    a: &mut BigArray<T, SHIFT>,
    src_pos: u64,
    dst_pos: u64,
    len: u64,
) -> Result<()> {
    check_offset_length(a.len(), src_pos, len)?;
    check_offset_length(a.len(), dst_pos, len)?;
    let segments = &mut a.segments;

    if dst_pos <= src_pos {
        let (mut src_pos, mut dst_pos, mut len) = (src_pos, dst_pos, len);
        while len > 0 {
            let (ss, sd) = (segment::<SHIFT>(src_pos), displacement::<SHIFT>(src_pos));
            let (ds, dd) = (segment::<SHIFT>(dst_pos), displacement::<SHIFT>(dst_pos));
            let room = (segments[ss].len() - sd).min(segments[ds].len() - dd);
            let run = len.min(room as u64) as usize;
            move_run(segments, ss, sd, ds, dd, run);
            src_pos += run as u64;
            dst_pos += run as u64;
            len -= run as u64;
        }
    } else {
        let (mut src_end, mut dst_end, mut len) = (src_pos + len, dst_pos + len, len);
        while len > 0 {
            let (src_last, dst_last) = (src_end - 1, dst_end - 1);
            let (ss, sd) = (segment::<SHIFT>(src_last), displacement::<SHIFT>(src_last) + 1);
            let (ds, dd) = (segment::<SHIFT>(dst_last), displacement::<SHIFT>(dst_last) + 1);
            let run = len.min(sd.min(dd) as u64) as usize;
            move_run(segments, ss, sd - run, ds, dd - run, run);
            src_end -= run as u64;
            dst_end -= run as u64;
            len -= run as u64;
        }
    }
    Ok(())
}

/// Copies `len` elements from `src[src_pos..]` into `dst[dst_pos..]`.
pub fn copy_from_big<T: Element, const SHIFT: u32>(
    src: &BigArray<T, SHIFT>,
    src_pos: u64,
    dst: &mut [T],
    dst_pos: usize,
    len: usize,
) -> Result<()> {
    check_offset_length(src.len(), src_pos, len as u64)?;
    check_offset_length(dst.len() as u64, dst_pos as u64, len as u64)?;
    let (mut src_pos, mut out) = (src_pos, &mut dst[dst_pos..dst_pos + len]);
    while !out.is_empty() {
        let seg = &src.segments[segment::<SHIFT>(src_pos)];
        let disp = displacement::<SHIFT>(src_pos);
        let run = out.len().min(seg.len() - disp);
        let (head, rest) = std::mem::take(&mut out).split_at_mut(run);
        head.copy_from_slice(&seg[disp..disp + run]);
        out = rest;
        src_pos += run as u64;
    }
    Ok(())
}

/// Copies `len` elements from `src[src_pos..]` into `dst[dst_pos..]`.
pub fn copy_to_big<T: Element, const SHIFT: u32>(
    src: &[T],
    src_pos: usize,
    dst: &mut BigArray<T, SHIFT>,
    dst_pos: u64,
    len: u64,
) -> Result<()> {
    check_offset_length(src.len() as u64, src_pos as u64, len)?;
    check_offset_length(dst.len(), dst_pos, len)?;
    let (mut input, mut dst_pos) = (&src[src_pos..src_pos + len as usize], dst_pos);
    while !input.is_empty() {
        let seg = &mut dst.segments[segment::<SHIFT>(dst_pos)];
        let disp = displacement::<SHIFT>(dst_pos);
        let run = input.len().min(seg.len() - disp);
        seg[disp..disp + run].copy_from_slice(&input[..run]);
        input = &input[run..];
        dst_pos += run as u64;
    }
    Ok(())
}

pub fn fill<T: Element, const SHIFT: u32>(a: &mut BigArray<T, SHIFT>, value: T) {
    for seg in &mut a.segments {
        seg.fill(value);
    }
}

/// Sets every element of `[from, to)` to `value`.
pub fn fill_range<T: Element, const SHIFT: u32>(
    a: &mut BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    value: T,
) -> Result<()> {
    check_from_to(a.len(), from, to)?;
    if from == to {
        return Ok(());
    }
    let (first, first_disp) = (segment::<SHIFT>(from), displacement::<SHIFT>(from));
    let (last, last_disp) = (segment::<SHIFT>(to), displacement::<SHIFT>(to));
    let segments = &mut a.segments;
    if first == last {
        segments[first][first_disp..last_disp].fill(value);
        return Ok(());
    }
    segments[first][first_disp..].fill(value);
    for seg in &mut segments[first + 1..last] {
        seg.fill(value);
    }
    if last_disp != 0 {
        segments[last][..last_disp].fill(value);
    }
    Ok(())
}

/// Element-wise native equality (`NaN != NaN`, `-0.0 == 0.0`).
pub fn equals<T: Element, const SHIFT: u32>(
    a1: &BigArray<T, SHIFT>,
    a2: &BigArray<T, SHIFT>,
) -> bool {
    // Equal lengths imply identical segment layouts.
    a1.len() == a2.len()
        && a1
            .segments
            .iter()
            .zip(&a2.segments)
            .all(|(s1, s2)| s1 == s2)
}

/// Shuffles `a` in place with a Fisher-Yates pass from the back.
pub fn shuffle<T: Element, R: Rng + ?Sized, const SHIFT: u32>(
    a: &mut BigArray<T, SHIFT>,
    rng: &mut R,
) {
    let len = a.len();
    shuffle_unchecked(a, 0, len, rng);
}

/// Shuffles `[from, to)` of `a` in place.
pub fn shuffle_range<T: Element, R: Rng + ?Sized, const SHIFT: u32>(
    a: &mut BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    rng: &mut R,
) -> Result<()> {
    check_from_to(a.len(), from, to)?;
    shuffle_unchecked(a, from, to, rng);
    Ok(())
}

fn shuffle_unchecked<T: Element, R: Rng + ?Sized, const SHIFT: u32>(
    a: &mut BigArray<T, SHIFT>,
    from: u64,
    to: u64,
    rng: &mut R,
) {
    let mut i = to - from;
    while i > 1 {
        i -= 1;
        let p = rng.random_range(0..=i);
        a.swap(from + i, from + p);
    }
}

/// Copies between two distinct segment tables laid out with the same `SHIFT`.
pub(crate) fn copy_segments<T: Copy, const SHIFT: u32>(
    src: &[Box<[T]>],
    mut src_pos: u64,
    dst: &mut [Box<[T]>],
    mut dst_pos: u64,
    mut len: u64,
) {
    while len > 0 {
        let (ss, sd) = (segment::<SHIFT>(src_pos), displacement::<SHIFT>(src_pos));
        let (ds, dd) = (segment::<SHIFT>(dst_pos), displacement::<SHIFT>(dst_pos));
        let room = (src[ss].len() - sd).min(dst[ds].len() - dd);
        let run = len.min(room as u64) as usize;
        dst[ds][dd..dd + run].copy_from_slice(&src[ss][sd..sd + run]);
        src_pos += run as u64;
        dst_pos += run as u64;
        len -= run as u64;
    }
}

/// Copies `run` elements from segment `ss` at `sd` to segment `ds` at `dd`.
#[inline]
fn move_run<T: Copy>(
    segments: &mut [Box<[T]>],
    ss: usize,
    sd: usize,
    ds: usize,
    dd: usize,
    run: usize,
) {
    if ss == ds {
        segments[ss].copy_within(sd..sd + run, dd);
    } else if ss < ds {
        let (head, tail) = segments.split_at_mut(ds);
        tail[0][dd..dd + run].copy_from_slice(&head[ss][sd..sd + run]);
    } else {
        let (head, tail) = segments.split_at_mut(ss);
        head[ds][dd..dd + run].copy_from_slice(&tail[0][sd..sd + run]);
    }
}
