/// Spatial hashing of integer world cells into power-of-two bucket arrays.
///
/// Collisions are expected: volume buckets chain their entries, light cell
/// buckets share one ring per bucket.

/// Knuth's multiplicative hash constant (2^32 / golden ratio).
pub const HASH_MULTIPLIER: u32 = 2_654_435_761;

/// Odd prime combining the per-axis hashes.
const HASH_COMBINE_PRIME: u32 = 101;

/// Hash one cell coordinate, keeping the top `bits` bits of the product.
#[inline]
pub fn int_hash(k: i32, bits: u32) -> u32 {
    debug_assert!(bits <= 32);
    (k as u32)
        .wrapping_mul(HASH_MULTIPLIER)
        .checked_shr(32 - bits)
        .unwrap_or(0)
}

/// Bucket index of cell `(x, y, z)` in an array of `bucket_size` buckets.
///
/// `bucket_size` must be a power of two. Always in `[0, bucket_size)`.
#[inline]
pub fn world_hash_bucket_key(x: i32, y: i32, z: i32, bucket_size: usize) -> usize {
    debug_assert!(bucket_size.is_power_of_two());
    let bits = bucket_size.trailing_zeros().min(32);

    let key = int_hash(x, bits)
        .wrapping_add(HASH_COMBINE_PRIME)
        .wrapping_mul(HASH_COMBINE_PRIME)
        .wrapping_add(int_hash(y, bits))
        .wrapping_mul(HASH_COMBINE_PRIME)
        .wrapping_add(int_hash(z, bits));

    key as usize & (bucket_size - 1)
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
