//! Random sampling helpers shared by layer and shooting-star generation.

use rand::Rng;

/// Sample uniformly from the half-open range `[low, high)`.
///
/// `low + r * (high - low)` can round up to `high` for `r` close to 1, which
/// would break the half-open bounds; such samples fold back to `low`.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    let value = low + rng.random::<f64>() * (high - low);
    if value < high {
        value
    } else {
        low
    }
}

/// Build a small deterministic generator from a seed. Handy for tests and for
/// seeding from a browser-provided random number.
pub fn seeded(seed: u64) -> rand::rngs::SmallRng {
    rand::SeedableRng::seed_from_u64(seed)
}
