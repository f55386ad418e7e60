//! Sampling session state and the strategy contract.

use tessera_common::{Result, verify_arg};

/// Progress and target counters shared by every sampling strategy.
///
/// The counters describe one pass over a configured stream: how many
/// elements the stream holds, which fraction of them the session should
/// select, the absolute target count derived from that fraction, and how far
/// the pass has advanced. Strategies hold a `SamplerState` by composition
/// and expose it through [`Sampler::state`], so the driving iteration loop
/// can configure and observe a session without knowing which strategy runs
/// behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplerState {
    total_elements: u64,
    rate: f64,
    needed_elements: u64,
    processed_elements: u64,
    chosen_elements: u64,
}

impl SamplerState {
    /// Configures the target selection rate for a stream of
    /// `total_elements`, deriving the absolute target count as
    /// `round(rate * total_elements)`.
    pub fn set_rate(&mut self, rate: f64, total_elements: u64) -> Result<()> {
        verify_arg!(rate, (0.0..=1.0).contains(&rate));
        self.rate = rate;
        self.total_elements = total_elements;
        self.needed_elements = (rate * total_elements as f64).round() as u64;
        Ok(())
    }

    /// Overrides the absolute target count for callers that derive it
    /// outside of [`set_rate`](Self::set_rate).
    pub fn set_needed_elements(&mut self, needed_elements: u64) -> Result<()> {
        verify_arg!(needed_elements, needed_elements <= self.total_elements);
        self.needed_elements = needed_elements;
        Ok(())
    }

    /// Rewinds the progress counters to the start of a pass, leaving the
    /// stream configuration (total, rate, target) untouched.
    pub fn restart(&mut self) {
        self.processed_elements = 0;
        self.chosen_elements = 0;
    }

    /// Total number of elements in the configured stream.
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Target fraction of stream elements to select, in `[0, 1]`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Absolute target count of selected elements.
    pub fn needed_elements(&self) -> u64 {
        self.needed_elements
    }

    /// Number of stream elements a verdict has been issued for.
    pub fn processed_elements(&self) -> u64 {
        self.processed_elements
    }

    /// Number of `true` verdicts issued so far. Never exceeds
    /// [`needed_elements`](Self::needed_elements).
    pub fn chosen_elements(&self) -> u64 {
        self.chosen_elements
    }

    pub(crate) fn record_processed(&mut self) {
        self.processed_elements += 1;
    }

    pub(crate) fn record_chosen(&mut self) {
        self.chosen_elements += 1;
    }

    pub(crate) fn quota_met(&self) -> bool {
        self.chosen_elements >= self.needed_elements
    }
}

/// A single-pass subset-selection strategy over an ordered element stream.
///
/// Strategies are driven by an external iteration loop: one
/// [`take_sample`](Sampler::take_sample) call per stream element, strictly
/// in stream order, after [`reset`](Sampler::reset) has prepared the
/// session. Instances are single-threaded; parallel sampling over
/// independent stream partitions uses one instance per partition.
pub trait Sampler {
    /// Prepares the session for a pass over the configured stream,
    /// recomputing whatever decision state the strategy keeps. Must be
    /// called once before the first [`take_sample`](Sampler::take_sample)
    /// and again after any configuration change.
    fn reset(&mut self) -> Result<()>;

    /// Returns the selection verdict for the next stream element.
    fn take_sample(&mut self) -> bool;

    /// Read access to the session counters.
    fn state(&self) -> &SamplerState;

    /// Mutable access to the session counters, used by the driving loop to
    /// configure the selection target.
    fn state_mut(&mut self) -> &mut SamplerState;
}
