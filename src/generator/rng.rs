use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed of the lesson exercise, fixed so every reload draws the same picture
pub const EXERCISE_SEED: u64 = 20250423;

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
