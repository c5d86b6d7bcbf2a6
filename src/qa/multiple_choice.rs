use crate::error::Error;
use crate::error::Result;
use crate::qa::Hintable;
use crate::qa::Prompt;
use crate::qa::QuestionAndAnswer;
use crate::qa::Sampler;

/// A multiple-choice quiz item with four distinct options, one of which is the
/// correct answer.
///
/// Identity includes the options in order; shuffling them yields a different
/// item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultipleChoiceQa {
  prompt: Prompt,
  options: [String; 4],
}

impl MultipleChoiceQa {
  /// Creates a new `MultipleChoiceQa`.
  ///
  /// Fails if two options coincide or if none of them is `correct_answer`.
  pub fn new(
    question: impl Into<String>,
    correct_answer: impl Into<String>,
    category: impl Into<String>,
    option1: impl Into<String>,
    option2: impl Into<String>,
    option3: impl Into<String>,
    option4: impl Into<String>,
  ) -> Result<Self> {
    let prompt = Prompt::new(question, correct_answer, category);
    let options: [String; 4] =
      [option1.into(), option2.into(), option3.into(), option4.into()];

    for (i, a) in options.iter().enumerate() {
      if options[i + 1..].contains(a) {
        return Err(Error::InvalidQuestion(format!(
          "{:?}: option {:?} appears more than once",
          prompt.question, a
        )));
      }
    }
    if !options.contains(&prompt.correct_answer) {
      return Err(Error::InvalidQuestion(format!(
        "{:?}: answer {:?} is not among the options",
        prompt.question, prompt.correct_answer
      )));
    }

    Ok(Self { prompt, options })
  }

  /// Returns the four options in declared order.
  pub fn options(&self) -> &[String; 4] {
    &self.options
  }

  /// Returns the options that are not the answer, in declared order.
  pub fn incorrect_options(&self) -> impl Iterator<Item = &str> + '_ {
    self
      .options
      .iter()
      .filter(move |o| **o != self.prompt.correct_answer)
      .map(|o| o.as_str())
  }
}

impl QuestionAndAnswer for MultipleChoiceQa {
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

impl Hintable for MultipleChoiceQa {
  /// Rules out the first two incorrect options. Always the same two, so the
  /// sampler is never consulted.
  fn hint(&self, _: &mut dyn Sampler) -> String {
    let mut hint = String::from(
      "The correct answer is NOT one of the following choices: \n",
    );
    for option in self.incorrect_options().take(2) {
      hint.push_str("- ");
      hint.push_str(option);
      hint.push('\n');
    }
    hint
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::qa::RandomSampler;
  use rand::rngs::StdRng;
  use rand::SeedableRng as _;

  fn abcd(answer: &str) -> MultipleChoiceQa {
    MultipleChoiceQa::new("Pick one", answer, "letters", "A", "B", "C", "D")
      .unwrap()
  }

  #[test]
  fn hint_names_first_two_wrong_options() {
    let qa = abcd("B");
    for seed in 0..20 {
      let hint = qa.hint(&mut RandomSampler::new(StdRng::seed_from_u64(seed)));
      assert_eq!(
        hint,
        "The correct answer is NOT one of the following choices: \n- A\n- C\n"
      );
      assert!(!hint.contains("- D"));
    }
  }

  #[test]
  fn hint_skips_answer_in_first_slot() {
    let hint = abcd("A").hint(&mut RandomSampler::thread());
    assert!(hint.ends_with("- B\n- C\n"));
  }

  #[test]
  fn option_order_is_part_of_identity() {
    let a = abcd("B");
    let b =
      MultipleChoiceQa::new("Pick one", "B", "letters", "B", "A", "C", "D")
        .unwrap();
    assert_ne!(a, b);
    assert_eq!(a, abcd("B"));
  }

  #[test]
  fn rejects_duplicate_options() {
    let err = MultipleChoiceQa::new("Q", "A", "c", "A", "B", "A", "D");
    assert!(matches!(err, Err(Error::InvalidQuestion(_))));
  }

  #[test]
  fn rejects_missing_answer() {
    let err = MultipleChoiceQa::new("Q", "E", "c", "A", "B", "C", "D");
    assert!(matches!(err, Err(Error::InvalidQuestion(_))));
  }

  #[test]
  fn judging_is_case_insensitive_against_answer_only() {
    let qa = MultipleChoiceQa::new(
      "Capital?", "Paris", "geo", "Rome", "Paris", "Oslo", "Bern",
    )
    .unwrap();
    assert!(qa.answer_is_correct("PARIS"));
    assert!(!qa.answer_is_correct("Rome"));
  }
}
