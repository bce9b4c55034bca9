use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaCha20Rng,
};

/// The seed of the reproducible test stream.
const TEST_SEED: [u8; 32] = *b"honk algebra deterministic seed!";

/// A random number generator for tests only.
///
/// Without `std` the stream is always the fixed one. With `std` it is seeded
/// from the OS unless `DETERMINISTIC_TEST_RNG=1` is set.
pub fn test_rng() -> impl RngCore + CryptoRng {
    #[cfg(feature = "std")]
    {
        if std::env::var("DETERMINISTIC_TEST_RNG").map_or(true, |v| v != "1") {
            return ChaCha20Rng::from_entropy();
        }
    }
    ChaCha20Rng::from_seed(TEST_SEED)
}
