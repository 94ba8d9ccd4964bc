
use std::{fs::File, io::BufWriter, path::{Path, PathBuf}};

use rand::Rng;

use crate::composer::{SentenceComposer, SentenceRecord};
use crate::errors::Result;
use crate::vocabulary::Vocabulary;

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
  pub total_words: usize,
  pub preference_rate_percentage: u32,
  pub samples_per_profile: usize,
}

impl Default for GeneratorConfig {
  fn default() -> GeneratorConfig {
    GeneratorConfig {
      total_words: 10,
      preference_rate_percentage: 40,
      samples_per_profile: 50,
    }
  }
}

/// Generates `samples_per_profile` sentences for every profile, one block per
/// profile in vocabulary order.
pub fn generate_corpus<R: Rng>(
  vocabulary: &Vocabulary,
  config: &GeneratorConfig,
  rng: &mut R,
) -> Result<Vec<SentenceRecord>> {
  let composer = SentenceComposer::new(
    vocabulary,
    config.total_words,
    config.preference_rate_percentage,
  );

  let mut sentences =
    Vec::with_capacity(config.samples_per_profile * vocabulary.profiles.len());
  for profile in &vocabulary.profiles {
    for _ in 0..config.samples_per_profile {
      sentences.push(composer.compose(&profile.name, rng)?);
    }
  }
  Ok(sentences)
}

/// The output name encodes the mixing rate so runs at different rates land in
/// different files.
pub fn corpus_file_name(config: &GeneratorConfig) -> String {
  format!("sentences_rate_{}.json", config.preference_rate_percentage)
}

/// Single whole-document write at the end of the run.
pub fn write_corpus(
  sentences: &[SentenceRecord],
  config: &GeneratorConfig,
  out_dir: &Path,
) -> Result<PathBuf> {
  let path = out_dir.join(corpus_file_name(config));
  serde_json::to_writer(BufWriter::new(File::create(&path)?), sentences)?;
  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::SmallRng, SeedableRng};

  #[test]
  fn one_block_per_profile_in_order() {
    let vocabulary = Vocabulary::stock();
    let config = GeneratorConfig::default();
    let mut rng = SmallRng::seed_from_u64(11);

    let sentences = generate_corpus(&vocabulary, &config, &mut rng).unwrap();
    assert_eq!(sentences.len(), 100);
    assert!(sentences[..50].iter().all(|s| s.0 == "Pieter"));
    assert!(sentences[50..].iter().all(|s| s.0 == "Anita"));
  }

  #[test]
  fn file_name_encodes_the_rate() {
    let config = GeneratorConfig {
      preference_rate_percentage: 70,
      ..GeneratorConfig::default()
    };
    assert_eq!(corpus_file_name(&config), "sentences_rate_70.json");
  }

  #[test]
  fn written_corpus_round_trips() {
    let vocabulary = Vocabulary::stock();
    let config = GeneratorConfig {
      samples_per_profile: 5,
      ..GeneratorConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(5);
    let sentences = generate_corpus(&vocabulary, &config, &mut rng).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(&sentences, &config, dir.path()).unwrap();
    assert_eq!(path, dir.path().join("sentences_rate_40.json"));

    let loaded: Vec<SentenceRecord> =
      serde_json::from_reader(File::open(&path).unwrap()).unwrap();
    assert_eq!(loaded, sentences);
  }
}
