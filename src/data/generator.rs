//! Random array generation.
//!
//! Requests outside the supported bounds are clamped, never rejected,
//! so generation always succeeds.

use rand::Rng;

/// Smallest array the generator will produce.
pub const MIN_SIZE: usize = 5;
/// Largest array the generator will produce.
pub const MAX_SIZE: usize = 50;
/// Smallest allowed upper bound for generated values.
pub const MIN_MAX_VALUE: u32 = 10;
/// Largest allowed upper bound for generated values.
pub const MAX_MAX_VALUE: u32 = 999;

/// Clamp a requested array size to `[MIN_SIZE, MAX_SIZE]`.
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Clamp a requested value bound to `[MIN_MAX_VALUE, MAX_MAX_VALUE]`.
pub fn clamp_max_value(max_value: u32) -> u32 {
    max_value.clamp(MIN_MAX_VALUE, MAX_MAX_VALUE)
}

/// Generate a fresh array of `size` elements, each drawn independently
/// and uniformly from `1..=max_value`. Both arguments are clamped.
pub fn generate(size: usize, max_value: u32) -> Vec<u32> {
    generate_with(&mut rand::thread_rng(), size, max_value)
}

/// Same as [`generate`] but with a caller-supplied RNG so tests can
/// seed the draw.
pub fn generate_with<R: Rng>(rng: &mut R, size: usize, max_value: u32) -> Vec<u32> {
    let size = clamp_size(size);
    let max_value = clamp_max_value(max_value);
    (0..size).map(|_| rng.gen_range(1..=max_value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = generate_with(&mut rng, 30, 100);
        assert_eq!(values.len(), 30);
        assert!(values.iter().all(|&v| (1..=100).contains(&v)));
    }

    #[test]
    fn test_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_with(&mut rng, 0, 100).len(), MIN_SIZE);
        assert_eq!(generate_with(&mut rng, 2, 100).len(), MIN_SIZE);
        assert_eq!(generate_with(&mut rng, 500, 100).len(), MAX_SIZE);
    }

    #[test]
    fn test_max_value_is_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = generate_with(&mut rng, 50, 1);
        assert!(values.iter().all(|&v| (1..=MIN_MAX_VALUE).contains(&v)));

        let values = generate_with(&mut rng, 50, 100_000);
        assert!(values.iter().all(|&v| (1..=MAX_MAX_VALUE).contains(&v)));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_with(&mut StdRng::seed_from_u64(42), 20, 99);
        let b = generate_with(&mut StdRng::seed_from_u64(42), 20, 99);
        assert_eq!(a, b);
    }
}
