//! Selection tile generation.

use tessera_common::{Result, verify_arg};

/// Builds a selection tile of `length` slots of which exactly `selected` are
/// `true`.
///
/// The tile starts as `selected` leading `true` slots followed by `false`
/// padding and is then permuted in place with a Fisher-Yates shuffle drawn
/// from `rng`. Generating several tiles from one seeded generator in a fixed
/// order therefore yields a fully reproducible tile sequence.
///
/// `selected > length` is a configuration error; no tile is produced.
pub fn generate_tile(rng: &mut fastrand::Rng, selected: usize, length: usize) -> Result<Vec<bool>> {
    verify_arg!(selected, selected <= length);

    let mut tile = vec![true; selected];
    tile.resize(length, false);
    rng.shuffle(&mut tile);
    Ok(tile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_selected(tile: &[bool]) -> usize {
        tile.iter().filter(|&&slot| slot).count()
    }

    #[test]
    fn test_tile_shape() {
        let mut rng = fastrand::Rng::with_seed(987321546);
        for (selected, length) in [(0, 0), (0, 16), (1, 16), (8, 16), (16, 16), (62, 250)] {
            let tile = generate_tile(&mut rng, selected, length).unwrap();
            assert_eq!(tile.len(), length);
            assert_eq!(count_selected(&tile), selected);
        }
    }

    #[test]
    fn test_oversized_selection_is_rejected() {
        let mut rng = fastrand::Rng::with_seed(987321546);
        assert!(generate_tile(&mut rng, 17, 16).is_err());
        assert!(generate_tile(&mut rng, 1, 0).is_err());
    }

    #[test]
    fn test_same_seed_same_tile() {
        let mut rng_a = fastrand::Rng::with_seed(42);
        let mut rng_b = fastrand::Rng::with_seed(42);
        let tile_a = generate_tile(&mut rng_a, 128, 256).unwrap();
        let tile_b = generate_tile(&mut rng_b, 128, 256).unwrap();
        assert_eq!(tile_a, tile_b);

        // Consuming the same generator stream again produces the next tile
        // of the sequence, identically on both sides.
        let next_a = generate_tile(&mut rng_a, 10, 100).unwrap();
        let next_b = generate_tile(&mut rng_b, 10, 100).unwrap();
        assert_eq!(next_a, next_b);
    }

    #[test]
    fn test_distinct_seeds_permute_differently() {
        let mut rng_a = fastrand::Rng::with_seed(1);
        let mut rng_b = fastrand::Rng::with_seed(2);
        let tile_a = generate_tile(&mut rng_a, 128, 256).unwrap();
        let tile_b = generate_tile(&mut rng_b, 128, 256).unwrap();
        assert_ne!(tile_a, tile_b);
    }
}
