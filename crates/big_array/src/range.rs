//! Range validation shared by every operation that takes positions.

use crate::big_array::BigArray;
use crate::element::Element;
use crate::error::{BigArrayError, Result};

/// Checks that `[from, to)` is a valid range of `a`.
pub fn ensure_from_to<T: Element, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    from: u64,
    to: u64,
) -> Result<()> {
    check_from_to(a.len(), from, to)
}

/// Checks that `length` elements starting at `offset` lie inside `a`.
pub fn ensure_offset_length<T: Element, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    offset: u64,
    length: u64,
) -> Result<()> {
    check_offset_length(a.len(), offset, length)
}

/// Checks that two arrays have the same length.
pub fn ensure_same_length<T: Element, U: Element, const SHIFT: u32>(
    a: &BigArray<T, SHIFT>,
    b: &BigArray<U, SHIFT>,
) -> Result<()> {
    if a.len() != b.len() {
        return Err(BigArrayError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_from_to(length: u64, from: u64, to: u64) -> Result<()> {
    if from > to {
        return Err(BigArrayError::InvertedRange { from, to });
    }
    if to > length {
        return Err(BigArrayError::RangeOutOfBounds { end: to, length });
    }
    Ok(())
}

pub(crate) fn check_offset_length(array_length: u64, offset: u64, length: u64) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= array_length => Ok(()),
        Some(end) => Err(BigArrayError::RangeOutOfBounds {
            end,
            length: array_length,
        }),
        None => Err(BigArrayError::RangeOutOfBounds {
            end: u64::MAX,
            length: array_length,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn from_to_checks() {
        let a = BigArray::<u8, 2>::new(6).unwrap();
        assert!(ensure_from_to(&a, 0, 6).is_ok());
        assert!(ensure_from_to(&a, 6, 6).is_ok());
        assert_eq!(
            ensure_from_to(&a, 4, 3).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ensure_from_to(&a, 2, 7).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn offset_length_checks() {
        let a = BigArray::<u8, 2>::new(6).unwrap();
        assert!(ensure_offset_length(&a, 2, 4).is_ok());
        assert!(ensure_offset_length(&a, 6, 0).is_ok());
        assert_eq!(
            ensure_offset_length(&a, 3, 4).unwrap_err(),
            BigArrayError::RangeOutOfBounds { end: 7, length: 6 }
        );
        assert_eq!(
            ensure_offset_length(&a, u64::MAX, 2).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn same_length_checks() {
        let a = BigArray::<u8, 2>::new(6).unwrap();
        let b = BigArray::<f64, 2>::new(6).unwrap();
        let c = BigArray::<f64, 2>::new(5).unwrap();
        assert!(ensure_same_length(&a, &b).is_ok());
        assert_eq!(
            ensure_same_length(&a, &c).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
