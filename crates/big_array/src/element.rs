use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Value types that can be stored in a [`BigArray`](crate::BigArray).
///
/// - `==` is the native equality (`NaN != NaN`, `-0.0 == 0.0`) used by
///   [`equals`](crate::equals).
/// - `natural_cmp` is a total order used by sorting and searching. For floats
///   it orders by IEEE total order, so `-0.0 < 0.0` and NaNs are placed by bit
///   pattern.
pub trait Element: Copy + Default + PartialEq + fmt::Debug {
    fn natural_cmp(&self, other: &Self) -> Ordering;

    /// Feeds the value into `state` so that `a == b` implies equal hashes.
    fn hash_content<H: Hasher>(&self, state: &mut H);
}

/// Elements with a fixed-width key for distribution sorting.
///
/// Unsigned comparison of `radix_bits` (after flipping the top bit when
/// `SIGNED`) agrees with `natural_cmp`.
pub trait RadixKey: Element {
    /// Number of 8-bit digits in the key.
    const DIGITS: usize;
    /// Whether the most significant digit needs its top bit flipped.
    const SIGNED: bool;

    /// Key bits, right-aligned in the low `8 * DIGITS` bits.
    fn radix_bits(self) -> u64;
}

impl Element for bool {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn hash_content<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

macro_rules! impl_for_integer {
    ($($t:ty => $u:ty, $signed:expr;)*) => ($(
        impl Element for $t {
            #[inline]
            fn natural_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[inline]
            fn hash_content<H: Hasher>(&self, state: &mut H) {
                self.hash(state);
            }
        }

        impl RadixKey for $t {
            const DIGITS: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            #[inline]
            fn radix_bits(self) -> u64 {
                self as $u as u64
            }
        }
    )*)
}

impl_for_integer! {
    i8 => u8, true;
    i16 => u16, true;
    i32 => u32, true;
    i64 => u64, true;
    u8 => u8, false;
    u16 => u16, false;
    u32 => u32, false;
    u64 => u64, false;
}

macro_rules! impl_for_float {
    ($($t:ty => $i:ty, $u:ty;)*) => ($(
        impl Element for $t {
            #[inline]
            fn natural_cmp(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }

            #[inline]
            fn hash_content<H: Hasher>(&self, state: &mut H) {
                // -0.0 == 0.0, so both must hash alike.
                let v = if *self == 0.0 { 0.0 } else { *self };
                v.to_bits().hash(state);
            }
        }

        impl RadixKey for $t {
            const DIGITS: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = true;

            #[inline]
            fn radix_bits(self) -> u64 {
                let bits = self.to_bits() as $i;
                let fixed = if bits >= 0 { bits } else { bits ^ <$i>::MAX };
                fixed as $u as u64
            }
        }
    )*)
}

impl_for_float! {
    f32 => i32, u32;
    f64 => i64, u64;
}
