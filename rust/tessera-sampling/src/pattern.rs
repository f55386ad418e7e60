//! Periodic-pattern subset selection.

use tessera_common::{Result, error::Error};

use crate::config::PatternSamplerConfig;
use crate::period::find_tile_period;
use crate::sampler::{Sampler, SamplerState};
use crate::tile::generate_tile;

/// Selects a target fraction of an ordered element stream by replicating a
/// short precomputed boolean tile across it.
///
/// `PatternSampler` approximates Bernoulli selection with constant memory
/// and constant work per element. At [`reset`](Sampler::reset) it derives a
/// primary tile whose period preferably divides the stream length, plus an
/// optional corrective tile consulted on primary misses that nudges the
/// realized count toward the exact target. [`take_sample`](Sampler::take_sample)
/// then replays the tiles cyclically, one verdict per stream element, and
/// stops selecting once the target count is reached.
///
/// Identical seeds reproduce identical selections; setting the seed to `0`
/// freezes the stored tiles so a previously drawn selection survives
/// repeated configuration queries.
///
/// ```
/// use tessera_sampling::{PatternSampler, Sampler};
///
/// let mut sampler = PatternSampler::new();
/// sampler.state_mut().set_rate(0.25, 1000).unwrap();
/// sampler.reset().unwrap();
///
/// let chosen = (0..1000).filter(|_| sampler.take_sample()).count();
/// assert_eq!(chosen, 250);
/// ```
pub struct PatternSampler {
    state: SamplerState,
    config: PatternSamplerConfig,
    pub(crate) index1: usize,
    pub(crate) index2: usize,
}

impl PatternSampler {
    /// Creates a sampler with default parameters.
    pub fn new() -> PatternSampler {
        PatternSampler::with_config(PatternSamplerConfig::default())
    }

    /// Creates a sampler from an explicit configuration, typically to replay
    /// a previously drawn selection (stored tiles plus a seed of `0`).
    pub fn with_config(config: PatternSamplerConfig) -> PatternSampler {
        PatternSampler {
            state: SamplerState::default(),
            config,
            index1: 0,
            index2: 0,
        }
    }

    /// Current parameters.
    pub fn config(&self) -> &PatternSamplerConfig {
        &self.config
    }

    /// Mutable access to the parameters. Changes take effect at the next
    /// [`reset`](Sampler::reset).
    pub fn config_mut(&mut self) -> &mut PatternSamplerConfig {
        &mut self.config
    }

    /// Sizes the corrective tile from the shortfall the primary tile leaves
    /// over the remaining population. Returns `(0, 0)` when the primary tile
    /// already meets the target.
    fn plan_corrective_tile(&self, period1: usize, selected1: usize) -> (usize, usize) {
        let total = self.state.total_elements();

        // Fraction of the stream the primary tile selects on its own, and
        // the element count that implies over the full stream.
        let implied_ratio = selected1 as f64 / period1 as f64;
        let taken = (implied_ratio * total as f64) as u64;

        // Saturation covers callers that override the target count below
        // what the primary tile already yields.
        let left = self.state.needed_elements().saturating_sub(taken);
        if left == 0 {
            return (0, 0);
        }

        let remaining = total - taken;
        let residual_ratio = if remaining > 0 {
            left as f64 / remaining as f64
        } else {
            0.0
        };

        let period2 = find_tile_period(
            total / period1 as u64 * (period1 as u64 - selected1 as u64),
            self.config.max_pattern_size,
        );
        if period2 == 0 {
            return (0, 0);
        }
        let selected2 = (residual_ratio * period2 as f64).ceil() as usize;
        (period2, selected2)
    }
}

impl Default for PatternSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for PatternSampler {
    fn reset(&mut self) -> Result<()> {
        self.state.restart();
        self.index1 = 0;
        self.index2 = 0;

        // A zero seed keeps whatever tiles are already stored, so a caller
        // can freeze a drawn selection across reconfiguration.
        if self.config.seed == 0 {
            return Ok(());
        }

        let total = self.state.total_elements();
        if total == 0 {
            return Err(Error::invalid_operation(
                "reset of a sampling session with no elements",
            ));
        }

        let period1 = find_tile_period(total, self.config.max_pattern_size);
        let selected1 = (self.state.rate() * period1 as f64).floor() as usize;
        let (period2, selected2) = self.plan_corrective_tile(period1, selected1);

        // Both tiles are drawn from one generator seeded here, primary
        // first, so the whole session replays from the seed alone. Nothing
        // is committed unless both generations succeed.
        let mut rng = fastrand::Rng::with_seed(self.config.seed);
        let pattern1 = generate_tile(&mut rng, selected1, period1)?;
        let pattern2 = if period2 > 0 {
            generate_tile(&mut rng, selected2, period2)?
        } else {
            Vec::new()
        };

        self.config.pattern1 = pattern1;
        self.config.pattern2 = pattern2;
        Ok(())
    }

    fn take_sample(&mut self) -> bool {
        self.state.record_processed();

        // Early termination: once the quota is met the verdict is false
        // without consulting or advancing either cursor.
        if self.state.quota_met() || self.config.pattern1.is_empty() {
            return false;
        }

        let mut verdict = self.config.pattern1[self.index1];
        self.index1 += 1;
        if self.index1 >= self.config.pattern1.len() {
            self.index1 = 0;
        }

        if !verdict && !self.config.pattern2.is_empty() {
            verdict = self.config.pattern2[self.index2];
            self.index2 += 1;
            if self.index2 >= self.config.pattern2.len() {
                self.index2 = 0;
            }
        }

        if verdict {
            self.state.record_chosen();
        }
        verdict
    }

    fn state(&self) -> &SamplerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SamplerState {
        &mut self.state
    }
}
