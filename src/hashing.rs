//! Polynomial rolling hash used to place headwords into buckets.

const MULTIPLIER: u64 = 31;

/// Bucket index of `headword` in a table with `capacity` slots.
///
/// Computes `h = (h * 31 + byte) mod capacity` over the UTF-8 bytes of the
/// headword. Bytes are taken as unsigned values, so the same string lands in
/// the same bucket on every platform. The reduction happens at every step,
/// which keeps the accumulator below `capacity`.
///
/// `capacity` must be non-zero.
pub fn bucket_index(headword: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket_index called with zero capacity");
    let modulus = capacity as u64;
    let mut h: u64 = 0;
    for &byte in headword.as_bytes() {
        // h < modulus, and reachable capacities keep h * 31 within u64.
        h = (h * MULTIPLIER + u64::from(byte)) % modulus;
    }
    h as usize
}
