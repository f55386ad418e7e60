//! Pattern sampler parameters.

/// Default upper bound on the length of a generated selection tile.
pub const DEFAULT_MAX_PATTERN_SIZE: usize = 256;

/// Default pseudo-random seed for tile generation.
///
/// A seed of `0` is reserved: it tells
/// [`PatternSampler::reset`](crate::PatternSampler) to keep the previously
/// generated tiles instead of drawing new ones.
pub const DEFAULT_SEED: u64 = 121212;

/// Parameters of a [`PatternSampler`](crate::PatternSampler).
///
/// Two configurations compare equal iff all four fields are equal. Callers
/// that cache sampling decisions can compare the configuration they sampled
/// under against the current one to decide whether the cached selection is
/// still valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSamplerConfig {
    /// Upper bound on the length of either tile. The sampler's memory use
    /// is proportional to this bound, independent of the stream length.
    pub max_pattern_size: usize,

    /// Primary selection tile, consulted for every element.
    pub pattern1: Vec<bool>,

    /// Corrective tile, consulted on primary misses. Empty when the primary
    /// tile alone meets the target.
    pub pattern2: Vec<bool>,

    /// Seed for tile generation; `0` freezes the stored tiles across
    /// resets.
    pub seed: u64,
}

impl Default for PatternSamplerConfig {
    fn default() -> Self {
        Self {
            max_pattern_size: DEFAULT_MAX_PATTERN_SIZE,
            pattern1: Vec::new(),
            pattern2: Vec::new(),
            seed: DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PatternSamplerConfig::default();
        assert_eq!(config.max_pattern_size, 256);
        assert_eq!(config.seed, 121212);
        assert!(config.pattern1.is_empty());
        assert!(config.pattern2.is_empty());
    }

    #[test]
    fn test_equality_covers_every_field() {
        let config = PatternSamplerConfig::default();

        let mut other = config.clone();
        assert_eq!(config, other);

        other.seed = 0;
        assert_ne!(config, other);

        let mut other = config.clone();
        other.max_pattern_size = 128;
        assert_ne!(config, other);

        let mut other = config.clone();
        other.pattern1 = vec![true, false];
        assert_ne!(config, other);

        let mut other = config.clone();
        other.pattern2 = vec![false];
        assert_ne!(config, other);
    }
}
