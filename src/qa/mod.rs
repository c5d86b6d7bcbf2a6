//! Question-and-answer items.
//!
//! Every quiz item implements [`QuestionAndAnswer`], which exposes the prompt
//! and judges answers. Items that can drop a hint without giving the answer
//! away also implement [`Hintable`]; true/false items deliberately do not,
//! since with only two options any hint is the answer.
//!
//! Items are immutable values. Equality (and hashing) is structural over each
//! variant's identity fields, so two items built from the same text compare
//! equal and can be deduplicated in a set.
//!
//! [`Question`] is the closed union the model hands to the rest of the game.

mod multiple_choice;
mod sampler;
mod short_answer;
mod true_or_false;

pub use multiple_choice::MultipleChoiceQa;
pub use sampler::RandomSampler;
pub use sampler::Sampler;
pub use short_answer::ShortAnswerQa;
pub use true_or_false::TrueOrFalseQa;

/// The capability shared by all quiz items.
pub trait QuestionAndAnswer {
  /// The question text.
  fn question(&self) -> &str;

  /// The answer that is judged correct.
  fn correct_answer(&self) -> &str;

  /// The category the question belongs to.
  fn category(&self) -> &str;

  /// Checks whether `user_answer` is the correct answer.
  ///
  /// The comparison is an exact match after lowercasing both sides; there is
  /// no trimming and no partial credit.
  fn answer_is_correct(&self, user_answer: &str) -> bool {
    user_answer.to_lowercase() == self.correct_answer().to_lowercase()
  }
}

/// A quiz item that can produce a hint towards its answer.
pub trait Hintable: QuestionAndAnswer {
  /// Generates a hint. Randomized variants draw fresh positions from `sampler`
  /// on every call.
  fn hint(&self, sampler: &mut dyn Sampler) -> String;
}

/// The fields every variant's identity starts from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Prompt {
  pub question: String,
  pub correct_answer: String,
  pub category: String,
}

impl Prompt {
  pub fn new(
    question: impl Into<String>,
    correct_answer: impl Into<String>,
    category: impl Into<String>,
  ) -> Self {
    Self {
      question: question.into(),
      correct_answer: correct_answer.into(),
      category: category.into(),
    }
  }
}

/// Any quiz item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Question {
  TrueOrFalse(TrueOrFalseQa),
  MultipleChoice(MultipleChoiceQa),
  ShortAnswer(ShortAnswerQa),
}

impl Question {
  /// Returns this item as a [`Hintable`], if its variant supports hints.
  pub fn as_hintable(&self) -> Option<&dyn Hintable> {
    match self {
      Self::TrueOrFalse(_) => None,
      Self::MultipleChoice(qa) => Some(qa),
      Self::ShortAnswer(qa) => Some(qa),
    }
  }

  /// Generates a hint, or `None` for variants without one.
  pub fn hint(&self, sampler: &mut dyn Sampler) -> Option<String> {
    self.as_hintable().map(|qa| qa.hint(sampler))
  }

  /// Returns the options a player picks from, in display order. Free-text
  /// items have none.
  pub fn choices(&self) -> Vec<&str> {
    match self {
      Self::TrueOrFalse(qa) => vec![qa.option_true(), qa.option_false()],
      Self::MultipleChoice(qa) => {
        qa.options().iter().map(|o| o.as_str()).collect()
      }
      Self::ShortAnswer(_) => Vec::new(),
    }
  }

  fn inner(&self) -> &dyn QuestionAndAnswer {
    match self {
      Self::TrueOrFalse(qa) => qa,
      Self::MultipleChoice(qa) => qa,
      Self::ShortAnswer(qa) => qa,
    }
  }
}

impl QuestionAndAnswer for Question {
  fn question(&self) -> &str {
    self.inner().question()
  }

  fn correct_answer(&self) -> &str {
    self.inner().correct_answer()
  }

  fn category(&self) -> &str {
    self.inner().category()
  }

  fn answer_is_correct(&self, user_answer: &str) -> bool {
    self.inner().answer_is_correct(user_answer)
  }
}

impl From<TrueOrFalseQa> for Question {
  fn from(qa: TrueOrFalseQa) -> Self {
    Self::TrueOrFalse(qa)
  }
}

impl From<MultipleChoiceQa> for Question {
  fn from(qa: MultipleChoiceQa) -> Self {
    Self::MultipleChoice(qa)
  }
}

impl From<ShortAnswerQa> for Question {
  fn from(qa: ShortAnswerQa) -> Self {
    Self::ShortAnswer(qa)
  }
}
