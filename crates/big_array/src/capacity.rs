//! Allocation, growth and trimming of the segment table.
//!
//! Resizes take `&mut self`: segments that survive a resize are moved into
//! the new table, so the caller keeps a single owner of every segment.

use log::{debug, trace};

use crate::addressing::{residual, segment_size, segments_for, start};
use crate::big_array::BigArray;
use crate::bulk;
use crate::element::Element;
use crate::error::{BigArrayError, Result};

impl<T: Element, const SHIFT: u32> BigArray<T, SHIFT> {
    /// Makes sure the array holds at least `length` elements.
    ///
    /// Existing elements keep their indices.
    pub fn ensure_capacity(&mut self, length: u64) -> Result<()> {
        if self.len >= length {
            return Ok(());
        }
        self.force_capacity(length, self.len)
    }

    /// Resizes to exactly `length` elements, keeping the first `preserve`.
    ///
    /// Leading full segments are reused. Elements in `preserve..length` that
    /// land in reused segments keep their old values; all others are default.
    pub fn force_capacity(&mut self, length: u64, preserve: u64) -> Result<()> {
        Self::check_length(length)?;
        let available = self.len.min(length);
        if preserve > available {
            return Err(BigArrayError::PreserveTooLarge {
                preserve,
                available,
            });
        }

        let full = self
            .segments
            .iter()
            .take_while(|s| s.len() == segment_size::<SHIFT>())
            .count();
        let count = segments_for::<SHIFT>(length);
        let complete = if residual::<SHIFT>(length) == 0 {
            count
        } else {
            count.saturating_sub(1)
        };
        let reused = full.min(complete);

        let mut old = std::mem::take(&mut self.segments);
        let tail = old.split_off(reused);
        let mut segments = old;
        segments.reserve_exact(count.saturating_sub(reused));
        segments.extend(Self::alloc_segments(reused, length));

        let base = start::<SHIFT>(reused);
        let old_len = self.len;
        *self = Self { segments, len: length };
        if preserve > base {
            // `tail` starts at linear index `base` of the old array.
            bulk::copy_segments::<T, SHIFT>(&tail, 0, &mut self.segments, base, preserve - base);
        }

        debug!(
            "big array resized: {old_len} -> {length} elements, {reused} of {count} segments reused"
        );
        Ok(())
    }

    /// Grows to at least `length` elements, preserving the current contents.
    ///
    /// The new length is at least 1.5 times the old one, so repeated growth
    /// costs amortized O(1) per element.
    pub fn grow(&mut self, length: u64) -> Result<()> {
        self.grow_preserving(length, self.len)
    }

    /// Like [`grow`](Self::grow), but only the first `preserve` elements are kept.
    pub fn grow_preserving(&mut self, length: u64, preserve: u64) -> Result<()> {
        if length <= self.len {
            return Ok(());
        }
        Self::check_length(length)?;
        let amortized = (self.len + (self.len >> 1)).min(Self::MAX_LENGTH);
        self.force_capacity(length.max(amortized), preserve)
    }

    /// Truncates to `length` elements; does nothing if the array is not longer.
    pub fn trim(&mut self, length: u64) {
        if length >= self.len {
            return;
        }
        let count = segments_for::<SHIFT>(length);
        self.segments.truncate(count);
        let rest = residual::<SHIFT>(length);
        if rest != 0 {
            if let Some(last) = self.segments.last_mut() {
                *last = Box::from(&last[..rest]);
            }
        }
        trace!("big array trimmed: {} -> {length} elements", self.len);
        self.len = length;
    }

    /// Trims when shrinking and ensures capacity when growing.
    pub fn set_length(&mut self, length: u64) -> Result<()> {
        if length < self.len {
            self.trim(length);
            Ok(())
        } else {
            self.ensure_capacity(length)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigArray, ErrorKind};

    type Small<T> = BigArray<T, 2>;

    fn segment_lens<T: crate::Element>(a: &Small<T>) -> Vec<usize> {
        a.segments().iter().map(|s| s.len()).collect()
    }

    fn iota(n: u64) -> Small<u64> {
        (1..=n).collect()
    }

    #[test]
    fn ensure_capacity_is_noop_when_long_enough() {
        let mut a = iota(6);
        a.ensure_capacity(3).unwrap();
        a.ensure_capacity(6).unwrap();
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn ensure_capacity_keeps_indices() {
        let mut a = iota(5);
        a.ensure_capacity(11).unwrap();
        assert_eq!(a.len(), 11);
        assert_eq!(segment_lens(&a), vec![4, 4, 3]);
        assert_eq!(&a.to_vec()[..5], &[1, 2, 3, 4, 5]);
        assert!(a.iter().skip(5).all(|v| v == 0));
    }

    #[test]
    fn force_capacity_preserves_only_requested_prefix() {
        let mut a = iota(7);
        a.force_capacity(9, 2).unwrap();
        assert_eq!(a.len(), 9);
        assert_eq!(segment_lens(&a), vec![4, 4, 1]);
        // The first segment was full and is reused as is.
        assert_eq!(&a.to_vec()[..4], &[1, 2, 3, 4]);
        // The old partial segment was replaced by a fresh one.
        assert_eq!(&a.to_vec()[4..], &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn force_capacity_copies_partial_segment_contents() {
        let mut a = iota(6);
        a.force_capacity(13, 6).unwrap();
        assert_eq!(segment_lens(&a), vec![4, 4, 4, 1]);
        assert_eq!(&a.to_vec()[..6], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn force_capacity_validates_before_mutating() {
        let mut a = iota(5);
        let err = a.force_capacity(8, 6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = a.force_capacity(Small::<u64>::MAX_LENGTH + 1, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn grow_is_amortized() {
        let mut a = iota(8);
        a.grow(9).unwrap();
        assert_eq!(a.len(), 12);
        assert_eq!(&a.to_vec()[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);

        a.grow(40).unwrap();
        assert_eq!(a.len(), 40);

        let before = a.to_vec();
        a.grow(10).unwrap();
        assert_eq!(a.to_vec(), before);
    }

    #[test]
    fn grow_from_empty_uses_requested_length() {
        let mut a = Small::<f32>::empty();
        a.grow(3).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(segment_lens(&a), vec![3]);
    }

    #[test]
    fn repeated_growth_stays_amortized() {
        let mut a = Small::<u32>::empty();
        let mut resizes = 0;
        for i in 0..10_000_u64 {
            if i >= a.len() {
                a.grow(i + 1).unwrap();
                resizes += 1;
            }
            a.set(i, i as u32);
        }
        assert!(resizes < 40, "resizes={resizes}");
        assert!(a.iter().take(10_000).enumerate().all(|(i, v)| v == i as u32));
    }

    #[test]
    fn trim_keeps_prefix_and_truncates_last_segment() {
        let mut a = iota(5);
        a.trim(2);
        assert_eq!(a.len(), 2);
        assert_eq!(a.to_vec(), vec![1, 2]);
        assert_eq!(segment_lens(&a), vec![2]);

        let mut b = iota(10);
        b.trim(8);
        assert_eq!(segment_lens(&b), vec![4, 4]);
        b.trim(20);
        assert_eq!(b.len(), 8);
        b.trim(0);
        assert_eq!(b.segment_count(), 0);
    }

    #[test]
    fn set_length_dispatches_by_direction() {
        let mut a = iota(6);
        a.set_length(3).unwrap();
        assert_eq!(a.to_vec(), vec![1, 2, 3]);
        a.set_length(3).unwrap();
        assert_eq!(a.len(), 3);
        a.set_length(5).unwrap();
        assert_eq!(a.to_vec(), vec![1, 2, 3, 0, 0]);
    }
}
