//! Runtime configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng as _;

use crate::error::Error;
use crate::error::Result;
use crate::qa::RandomSampler;

/// Environment variable holding the keyboard polling timeout, in milliseconds.
pub const POLL_MS_VAR: &str = "TRIVIA_MAZE_POLL_MS";

/// Environment variable holding the hint sampler seed.
pub const HINT_SEED_VAR: &str = "TRIVIA_MAZE_HINT_SEED";

/// Configuration for the keyboard pump and the hint sampler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  /// How long [`UserInput::start_frame()`] waits for the first key.
  ///
  /// [`UserInput::start_frame()`]: crate::input::UserInput::start_frame
  pub poll_interval: Duration,
  /// If set, hints are drawn from a deterministic source seeded with this
  /// value.
  pub hint_seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      poll_interval: Duration::from_millis(50),
      hint_seed: None,
    }
  }
}

impl Config {
  /// Builds a `Config` from the process environment, falling back to the
  /// defaults for unset variables.
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|var| env::var(var).ok())
  }

  /// Builds a `Config` using `lookup` to resolve variables.
  pub fn from_lookup(
    mut lookup: impl FnMut(&'static str) -> Option<String>,
  ) -> Result<Self> {
    let mut config = Self::default();
    if let Some(ms) = parse_var::<u64>(POLL_MS_VAR, &mut lookup)? {
      config.poll_interval = Duration::from_millis(ms);
    }
    config.hint_seed = parse_var(HINT_SEED_VAR, &mut lookup)?;
    log::debug!("loaded {:?}", config);
    Ok(config)
  }

  /// Creates the sampler used for generating hints.
  pub fn sampler(&self) -> RandomSampler<StdRng> {
    let rng = match self.hint_seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    RandomSampler::new(rng)
  }
}

fn parse_var<T: FromStr>(
  var: &'static str,
  lookup: &mut impl FnMut(&'static str) -> Option<String>,
) -> Result<Option<T>> {
  match lookup(var) {
    None => Ok(None),
    Some(value) => match value.trim().parse() {
      Ok(v) => Ok(Some(v)),
      Err(_) => Err(Error::Config { var, value }),
    },
  }
}
