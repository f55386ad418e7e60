//! Tile period selection.

/// Smallest tile period considered when searching for an exact divisor of
/// the stream length.
const MIN_TILE_PERIOD: u64 = 20;

/// Picks the period of a selection tile for a stream of `total_elements`.
///
/// Streams short enough to fit within `max_pattern_size` are not tiled at
/// all: the period is the stream length itself. Longer streams get the
/// largest period in `[20, max_pattern_size]` that divides the stream length
/// exactly, so that cyclic replication of the tile covers the stream without
/// a partial trailing cycle.
///
/// When no period in that range divides the stream length (a prime length,
/// for instance), `max_pattern_size` is returned as a fallback and a warning
/// is emitted. The tiling then covers the stream unevenly and the realized
/// selection count drifts slightly from the target; sampling itself proceeds
/// normally.
pub fn find_tile_period(total_elements: u64, max_pattern_size: usize) -> usize {
    let max = max_pattern_size as u64;
    if total_elements <= max {
        return total_elements as usize;
    }

    for period in (MIN_TILE_PERIOD..=max).rev() {
        if total_elements % period == 0 {
            return period as usize;
        }
    }

    log::warn!(
        "no tile period within [{MIN_TILE_PERIOD}, {max}] divides {total_elements} elements; \
         falling back to {max}"
    );
    max_pattern_size
}
