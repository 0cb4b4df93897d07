//! Bucket counts for [`HashTable`](crate::HashTable).
//!
//! Tables never size their bucket array by plain doubling; they step through
//! this ascending list of primes, each roughly twice the previous, so that
//! `hash % bucket_count` stays well spread for weak hash functions.

/// Number of entries in [`PRIME_LIST`].
pub const NUM_PRIMES: usize = 28;

/// Ascending prime bucket counts, from 53 up to just below 2^32.
pub const PRIME_LIST: [usize; NUM_PRIMES] = [
    53,
    97,
    193,
    389,
    769,
    1_543,
    3_079,
    6_151,
    12_289,
    24_593,
    49_157,
    98_317,
    196_613,
    393_241,
    786_433,
    1_572_869,
    3_145_739,
    6_291_469,
    12_582_917,
    25_165_843,
    50_331_653,
    100_663_319,
    201_326_611,
    402_653_189,
    805_306_457,
    1_610_612_741,
    3_221_225_473,
    4_294_967_291,
];

/// Smallest listed prime that is not less than `n`.
///
/// Requests above the last entry saturate at the last entry.
///
/// ```
/// use primehash::primes::next_prime;
///
/// assert_eq!(next_prime(0), 53);
/// assert_eq!(next_prime(53), 53);
/// assert_eq!(next_prime(54), 97);
/// ```
pub fn next_prime(n: usize) -> usize {
    PRIME_LIST
        .iter()
        .copied()
        .find(|&p| p >= n)
        .unwrap_or(PRIME_LIST[NUM_PRIMES - 1])
}

/// Largest bucket count a table can grow to.
#[inline]
pub const fn max_bucket_count() -> usize {
    PRIME_LIST[NUM_PRIMES - 1]
}
