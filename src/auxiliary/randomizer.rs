#![deny(clippy::all)]
#![forbid(unsafe_code)]

use byteorder::{ByteOrder, LittleEndian};
use randomize::PCG32;

/// State and increment for a PCG32 stream.
pub type Seed = (u64, u64);

/// Read a fresh PCG32 seed from OS entropy.
///
/// # Panics
///
/// If the OS has no entropy source to offer.
pub fn generate_seed() -> Seed {
    let mut bytes = [0_u8; 16];
    getrandom::getrandom(&mut bytes).expect("OS entropy unavailable");
    let mut words = [0_u64; 2];
    LittleEndian::read_u64_into(&bytes, &mut words);
    (words[0], words[1])
}

/// Build a generator from a seed.
pub fn seeded_rng(seed: Seed) -> PCG32 {
    seed.into()
}

/// Draw one cell state: 1 when the sample lands above `fill`, 0 otherwise.
pub fn draw_state(rng: &mut PCG32, fill: f32) -> u8 {
    (randomize::f32_half_open_right(rng.next_u32()) > fill) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_seeds_differ() {
        // 128 random bits colliding twice in a row is not a realistic outcome.
        assert_ne!(generate_seed(), generate_seed());
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = seeded_rng((7, 11));
        let mut b = seeded_rng((7, 11));
        for _ in 0..64 {
            assert_eq!(draw_state(&mut a, 0.5), draw_state(&mut b, 0.5));
        }
    }

    #[test]
    fn half_fill_draws_both_states() {
        let mut rng = seeded_rng((3, 5));
        let draws: Vec<u8> = (0..1000).map(|_| draw_state(&mut rng, 0.5)).collect();
        assert!(draws.iter().all(|&s| s <= 1));
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
    }

    #[test]
    fn fill_bounds_are_absolute() {
        let mut rng = seeded_rng((42, 1));
        // Samples live in [0, 1), so nothing clears a fill of 1.0.
        assert!((0..256).all(|_| draw_state(&mut rng, 1.0) == 0));
        assert!((0..256).all(|_| draw_state(&mut rng, -1.0) == 1));
    }
}
