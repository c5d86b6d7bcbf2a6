//! Random index selection for hints.

use rand::rngs::ThreadRng;
use rand::Rng;

/// A source of index samples.
///
/// Hints ask a `Sampler` which character positions to reveal, so that callers
/// can swap in a deterministic source.
pub trait Sampler {
  /// Picks `amount` distinct indices from `0..length`, in no particular order.
  ///
  /// Callers never ask for more indices than `length`.
  fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize>;
}

/// A [`Sampler`] backed by a `rand` generator, sampling uniformly without
/// replacement.
#[derive(Clone, Debug)]
pub struct RandomSampler<R> {
  rng: R,
}

impl<R: Rng> RandomSampler<R> {
  /// Creates a new `RandomSampler` drawing from `rng`.
  pub fn new(rng: R) -> Self {
    Self { rng }
  }
}

impl RandomSampler<ThreadRng> {
  /// Creates a `RandomSampler` over the thread-local generator.
  pub fn thread() -> Self {
    Self::new(rand::thread_rng())
  }
}

impl<R: Rng> Sampler for RandomSampler<R> {
  fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
    rand::seq::index::sample(&mut self.rng, length, amount).into_vec()
  }
}
