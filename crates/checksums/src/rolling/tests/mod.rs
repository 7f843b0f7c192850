use super::*;

use proptest::prelude::*;

/// Computes `(a, b)` from scratch with wide accumulators and a single reduction.
pub(super) fn reference_sum(data: &[u8]) -> u32 {
    let mut a: u64 = 1;
    let mut b: u64 = 0;

    for &byte in data {
        a += u64::from(byte);
        b += a;
    }

    let modulus = u64::from(MODULUS);
    (((b % modulus) as u32) << 16) | (a % modulus) as u32
}

pub(super) fn data_and_roll_count() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 0..=512).prop_flat_map(|data| {
        let len = data.len();
        (Just(data), 0..=len)
    })
}

pub(super) fn data_and_window() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 1..=256).prop_flat_map(|data| {
        let len = data.len();
        (Just(data), 1..=len)
    })
}
