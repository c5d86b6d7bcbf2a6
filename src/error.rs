//! Error types.

use thiserror::Error;

/// A specialized `Result` for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the trivia maze core.
#[derive(Debug, Error)]
pub enum Error {
  /// A question-and-answer item was constructed with inconsistent fields.
  #[error("invalid question: {0}")]
  InvalidQuestion(String),

  /// A context name outside the closed set of contexts.
  #[error("unknown command context `{0}`")]
  UnknownContext(String),

  /// An environment variable held a value that could not be parsed.
  #[error("bad value {value:?} for {var}")]
  Config { var: &'static str, value: String },

  /// The terminal failed while polling for key presses.
  #[error("terminal error: {0}")]
  Terminal(String),
}
