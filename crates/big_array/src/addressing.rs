//! Mapping between linear 64-bit indices and `(segment, displacement)` pairs.
//!
//! Segments hold `1 << SHIFT` elements. None of these functions check bounds.

/// Number of elements in a full segment.
#[inline(always)]
pub const fn segment_size<const SHIFT: u32>() -> usize {
    1 << SHIFT
}

#[inline(always)]
pub const fn segment_mask<const SHIFT: u32>() -> u64 {
    (1 << SHIFT) - 1
}

/// Segment holding the element at `index`.
#[inline(always)]
pub const fn segment<const SHIFT: u32>(index: u64) -> usize {
    (index >> SHIFT) as usize
}

/// Offset of `index` inside its segment.
#[inline(always)]
pub const fn displacement<const SHIFT: u32>(index: u64) -> usize {
    (index & segment_mask::<SHIFT>()) as usize
}

/// Linear index of the first element of `segment`.
#[inline(always)]
pub const fn start<const SHIFT: u32>(segment: usize) -> u64 {
    (segment as u64) << SHIFT
}

#[inline(always)]
pub const fn index<const SHIFT: u32>(segment: usize, displacement: usize) -> u64 {
    start::<SHIFT>(segment) + displacement as u64
}

/// Number of segments needed to hold `length` elements.
#[inline(always)]
pub const fn segments_for<const SHIFT: u32>(length: u64) -> usize {
    ((length + segment_mask::<SHIFT>()) >> SHIFT) as usize
}

/// Size of the last segment of an array of `length` elements, `0` when it is full.
#[inline(always)]
pub const fn residual<const SHIFT: u32>(length: u64) -> usize {
    displacement::<SHIFT>(length)
}
