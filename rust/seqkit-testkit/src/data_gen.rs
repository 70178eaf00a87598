//! Random data generation for randomized operator checks.

/// Generates a vector of `0..max_len` distinct ascending values.
///
/// Distinct values make positional mistakes (off-by-one, duplicated or dropped
/// elements) visible in assertions.
pub fn ascending(rng: &mut fastrand::Rng, max_len: usize) -> Vec<u32> {
    let len = rng.usize(0..=max_len);
    let mut next = 0u32;
    (0..len)
        .map(|_| {
            next += rng.u32(1..4);
            next
        })
        .collect()
}

/// Generates `len` optional values where roughly `missing_pct` percent are `None`.
pub fn with_gaps(rng: &mut fastrand::Rng, len: usize, missing_pct: u8) -> Vec<Option<u32>> {
    (0..len)
        .map(|_| {
            if rng.u8(0..100) < missing_pct {
                None
            } else {
                Some(rng.u32(0..1000))
            }
        })
        .collect()
}
