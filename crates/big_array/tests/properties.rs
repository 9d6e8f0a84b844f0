//! Property tests for big arrays with tiny segments, so that every operation
//! crosses many segment boundaries.

use big_array::{
    BigArray, binary_search, copy, copy_within, equals, fill_range, quick_sort, radix_sort,
    radix_sort_pair, shuffle,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

type Small<T> = BigArray<T, 2>;

fn finite_f32() -> impl Strategy<Value = f32> {
    prop::num::f32::NORMAL | prop::num::f32::ZERO | prop::num::f32::SUBNORMAL
}

proptest! {
    #[test]
    fn prop_set_then_get(
        values in prop::collection::vec(any::<i32>(), 1..200),
        index in any::<prop::sample::Index>(),
        value in any::<i32>(),
    ) {
        let mut a = Small::from_slice(&values);
        let i = index.index(values.len()) as u64;
        a.set(i, value);
        prop_assert_eq!(a.get(i), value);
        for (j, &v) in values.iter().enumerate() {
            if j as u64 != i {
                prop_assert_eq!(a.get(j as u64), v);
            }
        }
    }

    #[test]
    fn prop_length_invariant(n in 0_u64..500) {
        let a = Small::<u8>::new(n).unwrap();
        prop_assert_eq!(a.len(), n);
        prop_assert_eq!(a.segment_count() as u64, n.div_ceil(4));
        let flat = vec![1_u8; n as usize];
        prop_assert_eq!(Small::wrap(flat).len(), n);
    }

    #[test]
    fn prop_growth_preserves_prefix(
        values in prop::collection::vec(any::<u64>(), 0..100),
        extra in 0_u64..300,
    ) {
        let mut a = Small::from_slice(&values);
        let target = values.len() as u64 + extra;
        a.grow(target).unwrap();
        prop_assert!(a.len() >= target);
        prop_assert_eq!(&a.to_vec()[..values.len()], &values[..]);
    }

    #[test]
    fn prop_copy_within_is_memmove(
        values in prop::collection::vec(any::<i16>(), 1..120),
        src in any::<prop::sample::Index>(),
        dst in any::<prop::sample::Index>(),
        len in any::<prop::sample::Index>(),
    ) {
        let n = values.len();
        let (src, dst) = (src.index(n), dst.index(n));
        let len = len.index(n - src.max(dst) + 1);
        let mut a = Small::from_slice(&values);
        copy_within(&mut a, src as u64, dst as u64, len as u64).unwrap();

        let mut expected = values.clone();
        let tmp = values[src..src + len].to_vec();
        expected[dst..dst + len].copy_from_slice(&tmp);
        prop_assert_eq!(a.to_vec(), expected);
    }

    #[test]
    fn prop_copy_between_arrays(
        src_values in prop::collection::vec(any::<u32>(), 1..100),
        dst_len in 1_usize..100,
    ) {
        let len = src_values.len().min(dst_len);
        let src = Small::from_slice(&src_values);
        let mut dst = Small::<u32>::new(dst_len as u64).unwrap();
        let src_pos = (src_values.len() - len) as u64;
        copy(&src, src_pos, &mut dst, (dst_len - len) as u64, len as u64).unwrap();
        prop_assert_eq!(&dst.to_vec()[dst_len - len..], &src_values[src_values.len() - len..]);
    }

    #[test]
    fn prop_fill_range_only_touches_range(
        n in 1_u64..100,
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (x, y) = (a.index(n as usize + 1) as u64, b.index(n as usize + 1) as u64);
        let (from, to) = (x.min(y), x.max(y));
        let mut arr = Small::<i8>::new(n).unwrap();
        fill_range(&mut arr, from, to, -1).unwrap();
        for i in 0..n {
            prop_assert_eq!(arr.get(i), if (from..to).contains(&i) { -1 } else { 0 });
        }
    }

    #[test]
    fn prop_quick_sort_is_sorted_permutation(
        values in prop::collection::vec(any::<i64>(), 0..600),
    ) {
        let mut a = Small::from_slice(&values);
        quick_sort(&mut a);
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(a.to_vec(), expected);
    }

    #[test]
    fn prop_radix_sort_is_sorted_permutation(
        values in prop::collection::vec(any::<i32>(), 0..600),
    ) {
        let mut a = Small::from_slice(&values);
        radix_sort(&mut a);
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(a.to_vec(), expected);
    }

    #[test]
    fn prop_radix_and_quick_agree_on_finite_floats(
        values in prop::collection::vec(finite_f32(), 0..600),
    ) {
        let mut radix = Small::from_slice(&values);
        let mut quick = radix.clone();
        radix_sort(&mut radix);
        quick_sort(&mut quick);
        let radix_bits: Vec<u32> = radix.iter().map(f32::to_bits).collect();
        let quick_bits: Vec<u32> = quick.iter().map(f32::to_bits).collect();
        prop_assert_eq!(radix_bits, quick_bits);
    }

    #[test]
    fn prop_pair_radix_sort_is_lexicographic(
        pairs in prop::collection::vec((0_u8..4, any::<i16>()), 0..400),
    ) {
        let (firsts, seconds): (Vec<u8>, Vec<i16>) = pairs.iter().copied().unzip();
        let mut a = Small::from_slice(&firsts);
        let mut b = Small::from_slice(&seconds);
        radix_sort_pair(&mut a, &mut b).unwrap();
        let mut expected = pairs;
        expected.sort_unstable();
        let actual: Vec<(u8, i16)> = a.iter().zip(b.iter()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_binary_search_finds_or_places(
        values in prop::collection::vec(-50_i32..50, 0..200),
        key in -60_i32..60,
    ) {
        let mut a = Small::from_slice(&values);
        quick_sort(&mut a);
        match binary_search(&a, &key) {
            Ok(i) => prop_assert_eq!(a.get(i), key),
            Err(p) => {
                prop_assert!(!values.contains(&key));
                prop_assert!(p == 0 || a.get(p - 1) < key);
                prop_assert!(p == a.len() || a.get(p) > key);
            }
        }
    }

    #[test]
    fn prop_shuffle_is_permutation(
        values in prop::collection::vec(any::<u16>(), 0..300),
        seed in any::<u64>(),
    ) {
        let mut a = Small::from_slice(&values);
        shuffle(&mut a, &mut StdRng::seed_from_u64(seed));
        let mut shuffled = a.to_vec();
        shuffled.sort_unstable();
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn prop_trim_keeps_prefix(
        values in prop::collection::vec(any::<u8>(), 0..100),
        keep in 0_u64..120,
    ) {
        let mut a = Small::from_slice(&values);
        a.trim(keep);
        let kept = (keep as usize).min(values.len());
        prop_assert_eq!(a.to_vec(), values[..kept].to_vec());
        prop_assert!(equals(&a, &Small::from_slice(&values[..kept])));
    }
}
