use num::integer::div_ceil;

use crate::qa::Hintable;
use crate::qa::Prompt;
use crate::qa::QuestionAndAnswer;
use crate::qa::Sampler;

/// A free-text quiz item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortAnswerQa {
  prompt: Prompt,
}

impl ShortAnswerQa {
  /// Creates a new `ShortAnswerQa`.
  pub fn new(
    question: impl Into<String>,
    correct_answer: impl Into<String>,
    category: impl Into<String>,
  ) -> Self {
    Self {
      prompt: Prompt::new(question, correct_answer, category),
    }
  }
}

impl QuestionAndAnswer for ShortAnswerQa {
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

impl Hintable for ShortAnswerQa {
  /// Reveals half of each word's letters, rounding up.
  ///
  /// Revealed letters that sit next to each other in the answer are written
  /// together; a gap of one or more hidden letters becomes a single space, as
  /// does every word boundary. Hidden letters get no placeholder, so a gap at
  /// the end of one word and the start of the next is indistinguishable from a
  /// plain word break.
  fn hint(&self, sampler: &mut dyn Sampler) -> String {
    let mut hint = String::from("Hint: ");
    let words = self
      .prompt
      .correct_answer
      .split_whitespace()
      .collect::<Vec<_>>();
    for (i, word) in words.iter().enumerate() {
      let letters = word.chars().collect::<Vec<_>>();
      let shown = div_ceil(letters.len(), 2);
      let mut indices = sampler.sample_indices(letters.len(), shown);
      indices.sort_unstable();

      let mut next = 0;
      for idx in indices {
        if idx != next {
          hint.push(' ');
        }
        hint.push(letters[idx]);
        next = idx + 1;
      }

      if i + 1 < words.len() {
        hint.push(' ');
      }
    }
    hint
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::qa::tests::Scripted;
  use crate::qa::RandomSampler;
  use rand::rngs::StdRng;
  use rand::SeedableRng as _;

  fn cat_dog() -> ShortAnswerQa {
    ShortAnswerQa::new("Two pets?", "cat dog", "animals")
  }

  #[test]
  fn adjacent_letters_join_and_gaps_become_spaces() {
    let mut sampler = Scripted(vec![vec![1, 0], vec![2, 0]]);
    assert_eq!(cat_dog().hint(&mut sampler), "Hint: ca d g");
  }

  #[test]
  fn leading_gap_gets_a_space() {
    let mut sampler = Scripted(vec![vec![1, 2], vec![0, 1]]);
    assert_eq!(cat_dog().hint(&mut sampler), "Hint:  at do");
  }

  #[test]
  fn reveals_half_of_each_word_rounded_up() {
    let qa = ShortAnswerQa::new("Q?", "be lions", "c");
    let mut sampler = Scripted(vec![vec![0], vec![4, 0, 2]]);
    assert_eq!(qa.hint(&mut sampler), "Hint: b l o s");
  }

  #[test]
  fn random_hints_show_two_letters_per_word() {
    let qa = cat_dog();
    for seed in 0..50 {
      let hint = qa.hint(&mut RandomSampler::new(StdRng::seed_from_u64(seed)));
      let body = hint.strip_prefix("Hint: ").unwrap();
      let revealed = body.chars().filter(|c| *c != ' ').collect::<String>();
      assert_eq!(revealed.len(), 4, "{:?}", hint);

      // The first two revealed letters are an ordered pick from "cat", the
      // last two from "dog".
      let (cat, dog) = revealed.split_at(2);
      assert!(is_subsequence(cat, "cat"), "{:?}", hint);
      assert!(is_subsequence(dog, "dog"), "{:?}", hint);
    }
  }

  #[test]
  fn hints_are_not_cached() {
    let qa = ShortAnswerQa::new("Q?", "abcdefghijklmnop", "c");
    let mut sampler = RandomSampler::new(StdRng::seed_from_u64(11));
    let hints = (0..8).map(|_| qa.hint(&mut sampler)).collect::<Vec<_>>();
    assert!(hints.iter().any(|h| *h != hints[0]));
  }

  #[test]
  fn counts_characters_not_bytes() {
    let qa = ShortAnswerQa::new("Q?", "ñú", "c");
    let mut sampler = Scripted(vec![vec![1]]);
    assert_eq!(qa.hint(&mut sampler), "Hint:  ú");
  }

  fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
  }
}
