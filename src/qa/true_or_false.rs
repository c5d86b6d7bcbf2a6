use std::hash::Hash;
use std::hash::Hasher;

use crate::qa::Prompt;
use crate::qa::QuestionAndAnswer;

/// A true-or-false quiz item.
///
/// The option labels are display text only and take no part in identity.
#[derive(Clone, Debug)]
pub struct TrueOrFalseQa {
  prompt: Prompt,
  option_true: String,
  option_false: String,
  is_true: bool,
}

impl TrueOrFalseQa {
  /// Creates a new `TrueOrFalseQa`. The item is "true" exactly when
  /// `correct_answer` lowercases to `"true"`.
  pub fn new(
    question: impl Into<String>,
    correct_answer: impl Into<String>,
    category: impl Into<String>,
    option_true: impl Into<String>,
    option_false: impl Into<String>,
  ) -> Self {
    let prompt = Prompt::new(question, correct_answer, category);
    let is_true = prompt.correct_answer.to_lowercase() == "true";
    Self {
      prompt,
      option_true: option_true.into(),
      option_false: option_false.into(),
      is_true,
    }
  }

  /// Returns whether the statement posed is true.
  pub fn is_true(&self) -> bool {
    self.is_true
  }

  /// The label displayed for the "true" choice.
  pub fn option_true(&self) -> &str {
    &self.option_true
  }

  /// The label displayed for the "false" choice.
  pub fn option_false(&self) -> &str {
    &self.option_false
  }
}

impl QuestionAndAnswer for TrueOrFalseQa {
  fn question(&self) -> &str {
    &self.prompt.question
  }

  fn correct_answer(&self) -> &str {
    &self.prompt.correct_answer
  }

  fn category(&self) -> &str {
    &self.prompt.category
  }
}

impl PartialEq for TrueOrFalseQa {
  fn eq(&self, other: &Self) -> bool {
    self.prompt == other.prompt && self.is_true == other.is_true
  }
}

impl Eq for TrueOrFalseQa {}

impl Hash for TrueOrFalseQa {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.prompt.hash(state);
    self.is_true.hash(state);
  }
}
