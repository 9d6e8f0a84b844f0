use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::addressing::{displacement, residual, segment, segment_size, segments_for};
use crate::element::Element;
use crate::error::{BigArrayError, Result};
use crate::{DEFAULT_SEGMENT_SHIFT, bulk};

/// A 64-bit indexable array stored as fixed-size segments.
///
/// - Every segment except the last holds exactly `1 << SHIFT` elements.
/// - The last segment holds between `1` and `1 << SHIFT` elements.
/// - An empty array has no segments.
#[derive(Clone)]
pub struct BigArray<T, const SHIFT: u32 = DEFAULT_SEGMENT_SHIFT> {
    pub(crate) segments: Vec<Box<[T]>>,
    pub(crate) len: u64,
}

impl<T: Element, const SHIFT: u32> BigArray<T, SHIFT> {
    pub const SEGMENT_SIZE: usize = segment_size::<SHIFT>();

    const SHIFT_OK: () = assert!(SHIFT <= 40, "segment shift must be at most 40");

    /// Longest representable array of `T`.
    pub const MAX_LENGTH: u64 = {
        let size = std::mem::size_of::<T>();
        isize::MAX as u64 / if size == 0 { 1 } else { size as u64 }
    };

    /// An array without segments.
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
            len: 0,
        }
    }

    /// Allocates `length` default (zero) elements.
    pub fn new(length: u64) -> Result<Self> {
        Self::check_length(length)?;
        Ok(Self::zeroed(length))
    }

    pub(crate) fn zeroed(length: u64) -> Self {
        Self {
            segments: Self::alloc_segments(0, length),
            len: length,
        }
    }

    /// Takes ownership of `flat`. A vector that fits in one segment becomes that segment.
    pub fn wrap(flat: Vec<T>) -> Self {
        let () = Self::SHIFT_OK;
        if flat.is_empty() {
            return Self::empty();
        }
        if flat.len() <= Self::SEGMENT_SIZE {
            let len = flat.len() as u64;
            return Self {
                segments: vec![flat.into_boxed_slice()],
                len,
            };
        }
        Self::from_slice(&flat)
    }

    pub fn from_slice(flat: &[T]) -> Self {
        let () = Self::SHIFT_OK;
        Self {
            segments: flat.chunks(Self::SEGMENT_SIZE).map(Box::from).collect(),
            len: flat.len() as u64,
        }
    }

    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The segments in order; all but the last are full.
    #[inline]
    pub fn segments(&self) -> &[Box<[T]>] {
        &self.segments
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: u64) -> T {
        self[index]
    }

    /// Replaces the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: u64, value: T) {
        self[index] = value;
    }

    pub fn try_get(&self, index: u64) -> Result<T> {
        self.check_index(index)?;
        Ok(self[index])
    }

    pub fn try_set(&mut self, index: u64, value: T) -> Result<()> {
        self.check_index(index)?;
        self[index] = value;
        Ok(())
    }

    /// Exchanges the elements at `first` and `second`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, first: u64, second: u64) {
        let t = self[first];
        self[first] = self[second];
        self[second] = t;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            segments: &self.segments,
            front: Default::default(),
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.len as usize);
        for seg in &self.segments {
            flat.extend_from_slice(seg);
        }
        flat
    }

    pub(crate) fn check_length(length: u64) -> Result<()> {
        if length > Self::MAX_LENGTH {
            return Err(BigArrayError::InvalidLength {
                length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: u64) -> Result<()> {
        if index >= self.len {
            return Err(BigArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(())
    }

    /// Fresh default-filled segments `first..` of an array of `length` elements.
    pub(crate) fn alloc_segments(first: usize, length: u64) -> Vec<Box<[T]>> {
        let () = Self::SHIFT_OK;
        let count = segments_for::<SHIFT>(length);
        let rest = residual::<SHIFT>(length);
        let mut segments = Vec::with_capacity(count);
        for s in first..count {
            let size = if s + 1 == count && rest != 0 {
                rest
            } else {
                Self::SEGMENT_SIZE
            };
            segments.push(vec![T::default(); size].into_boxed_slice());
        }
        segments
    }
}

impl<T: Element, const SHIFT: u32> Default for BigArray<T, SHIFT> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element, const SHIFT: u32> Index<u64> for BigArray<T, SHIFT> {
    type Output = T;

    #[inline]
    fn index(&self, index: u64) -> &T {
        assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );
        &self.segments[segment::<SHIFT>(index)][displacement::<SHIFT>(index)]
    }
}

impl<T: Element, const SHIFT: u32> IndexMut<u64> for BigArray<T, SHIFT> {
    #[inline]
    fn index_mut(&mut self, index: u64) -> &mut T {
        assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );
        &mut self.segments[segment::<SHIFT>(index)][displacement::<SHIFT>(index)]
    }
}

impl<T: Element, const SHIFT: u32> FromIterator<T> for BigArray<T, SHIFT> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let () = Self::SHIFT_OK;
        let mut segments: Vec<Box<[T]>> = Vec::new();
        let mut len = 0_u64;
        let mut current = Vec::with_capacity(Self::SEGMENT_SIZE.min(1024));
        for value in iter {
            current.push(value);
            len += 1;
            if current.len() == Self::SEGMENT_SIZE {
                segments.push(std::mem::take(&mut current).into_boxed_slice());
            }
        }
        if !current.is_empty() {
            segments.push(current.into_boxed_slice());
        }
        Self { segments, len }
    }
}

impl<T: Element, const SHIFT: u32> PartialEq for BigArray<T, SHIFT> {
    fn eq(&self, other: &Self) -> bool {
        bulk::equals(self, other)
    }
}

/// Deep content hash, consistent with [`equals`](crate::equals).
impl<T: Element, const SHIFT: u32> Hash for BigArray<T, SHIFT> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.len);
        for v in self.iter() {
            v.hash_content(state);
        }
    }
}

impl<T: Element, const SHIFT: u32> fmt::Debug for BigArray<T, SHIFT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `[e0, e1, ...]`.
impl<T: Element, const SHIFT: u32> fmt::Display for BigArray<T, SHIFT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v:?}")?;
        }
        f.write_str("]")
    }
}

/// Lets a big array key a hash container by content.
///
/// Equality is [`equals`](crate::equals), so an array holding a NaN is not
/// equal to itself and cannot be found again.
#[derive(Clone)]
pub struct ContentKey<T, const SHIFT: u32 = DEFAULT_SEGMENT_SHIFT>(pub BigArray<T, SHIFT>);

impl<T: Element, const SHIFT: u32> PartialEq for ContentKey<T, SHIFT> {
    fn eq(&self, other: &Self) -> bool {
        bulk::equals(&self.0, &other.0)
    }
}

impl<T: Element, const SHIFT: u32> Eq for ContentKey<T, SHIFT> {}

impl<T: Element, const SHIFT: u32> Hash for ContentKey<T, SHIFT> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Element, const SHIFT: u32> fmt::Debug for ContentKey<T, SHIFT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentKey").field(&self.0).finish()
    }
}

/// Iterator over the elements of a [`BigArray`].
pub struct Iter<'a, T> {
    segments: &'a [Box<[T]>],
    front: std::slice::Iter<'a, T>,
    remaining: u64,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(&v) = self.front.next() {
                self.remaining -= 1;
                return Some(v);
            }
            let (first, rest) = self.segments.split_first()?;
            self.front = first.iter();
            self.segments = rest;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Copy> FusedIterator for Iter<'_, T> {}

impl<'a, T: Element, const SHIFT: u32> IntoIterator for &'a BigArray<T, SHIFT> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
