
use rand::{Rng, distributions::Uniform, prelude::Distribution, seq::SliceRandom};
use serde::{Serialize, Deserialize};

use crate::errors::{PrepError, Result};
use crate::vocabulary::Vocabulary;

/// One generated sentence: the profile it was composed for, and the shuffled
/// words. Serializes as `[name, [word, ...]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord(pub String, pub Vec<String>);

pub struct SentenceComposer<'a> {
  vocabulary: &'a Vocabulary,
  total_words: usize,
  preferred_count: usize,
}

impl<'a> SentenceComposer<'a> {
  pub fn new(
    vocabulary: &'a Vocabulary,
    total_words: usize,
    preference_rate_percentage: u32,
  ) -> SentenceComposer<'a> {
    // Truncating division: a 45% rate over 10 words reserves exactly 4 slots.
    let preferred_count = total_words * preference_rate_percentage as usize / 100;
    SentenceComposer {
      vocabulary,
      total_words,
      preferred_count,
    }
  }

  pub fn preferred_count(&self) -> usize {
    self.preferred_count
  }

  /// Composes one sentence for `name`: `preferred_count` draws from the
  /// profile's own list, the rest filler, shuffled together so no ordering
  /// pattern survives into the training data.
  pub fn compose<R: Rng>(&self, name: &str, rng: &mut R) -> Result<SentenceRecord> {
    let profile = self
      .vocabulary
      .get(name)
      .ok_or_else(|| PrepError::InvalidProfile(name.to_owned()))?;

    let mut words: Vec<String> = Vec::with_capacity(self.total_words);

    if self.preferred_count > 0 {
      let dist = Uniform::new(0, profile.preferred_words.len());
      for _ in 0..self.preferred_count {
        words.push(profile.preferred_words[dist.sample(rng)].clone());
      }
    }

    words.extend(self.filler_words(rng)?);
    words.shuffle(rng);

    Ok(SentenceRecord(name.to_owned(), words))
  }

  /// Filler words come from any profile, chosen uniformly. The word index is
  /// drawn against the length of the chosen profile's *name*, not its word
  /// list; the stock profiles have six-letter names and six-word lists, so
  /// the two bounds coincide there. A profile whose name outgrows its list
  /// makes the draw fallible, reported as a shape error.
  fn filler_words<R: Rng>(&self, rng: &mut R) -> Result<Vec<String>> {
    let filler_count = self.total_words - self.preferred_count.min(self.total_words);
    let mut words = Vec::with_capacity(filler_count);
    if filler_count == 0 {
      return Ok(words);
    }

    let profile_dist = Uniform::new(0, self.vocabulary.profiles.len());
    for _ in 0..filler_count {
      let profile = &self.vocabulary.profiles[profile_dist.sample(rng)];
      let name_len = profile.name.chars().count();
      let index = Uniform::new(0, name_len).sample(rng);
      let word = profile
        .preferred_words
        .get(index)
        .ok_or_else(|| PrepError::VocabularyShape {
          name: profile.name.clone(),
          name_len,
          word_count: profile.preferred_words.len(),
        })?;
      words.push(word.clone());
    }
    Ok(words)
  }
}
