//! Arrays addressed by 64-bit indices and stored as fixed-size segments.
//!
//! A [`BigArray`] behaves like one contiguous array of up to
//! [`BigArray::MAX_LENGTH`] elements, while no single allocation exceeds
//! `1 << SHIFT` elements. On top of element access and resizing the crate
//! provides overlap-safe copies, fills, shuffling, a three-way quicksort, an
//! MSD radix sort and binary search, all working across segment boundaries.

mod addressing;
mod algorithms;
mod big_array;
mod bulk;
mod capacity;
mod element;
mod error;
mod range;

pub use addressing::{displacement, index, segment, segment_mask, segment_size, segments_for, start};
pub use algorithms::binary_search::{
    binary_search, binary_search_by, binary_search_range, binary_search_range_by,
};
pub use algorithms::quick_sort::{quick_sort, quick_sort_by, quick_sort_range, quick_sort_range_by};
pub use algorithms::radix_sort::{
    radix_sort, radix_sort_pair, radix_sort_pair_range, radix_sort_range,
};
pub use big_array::{BigArray, ContentKey, Iter};
pub use bulk::{
    copy, copy_from_big, copy_to_big, copy_within, equals, fill, fill_range, shuffle, shuffle_range,
};
pub use element::{Element, RadixKey};
pub use error::{BigArrayError, ErrorKind, Result};
pub use range::{ensure_from_to, ensure_offset_length, ensure_same_length};

/// Segment shift used when none is given: segments of 2^27 elements.
pub const DEFAULT_SEGMENT_SHIFT: u32 = 27;

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges shorter than this are selection sorted by quicksort.
    pub small_threshold: u64,
    /// Quicksort uses a pseudomedian of 9 above this size; radix sort
    /// selection sorts ranges below it.
    pub medium_threshold: u64,
    pub radix_digit_bits: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    small_threshold: 7,
    medium_threshold: 40,
    radix_digit_bits: 8,
};
