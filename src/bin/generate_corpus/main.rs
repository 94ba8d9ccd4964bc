
// vim: shiftwidth=2

use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use log::info;

use training_prep::corpus::{generate_corpus, write_corpus, GeneratorConfig};
use training_prep::errors::Result;
use training_prep::vocabulary::Vocabulary;

#[derive(Parser, Debug)]
#[command()]
struct Args {
    /// Words per sentence.
    #[arg(long, default_value_t = 10)]
    total_words: usize,
    /// Percentage of each sentence drawn from the profile's own list.
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(0..=100))]
    preference_rate: u32,
    /// Sentences generated per profile.
    #[arg(long, default_value_t = 50)]
    samples_per_profile: usize,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  let config = GeneratorConfig {
    total_words: args.total_words,
    preference_rate_percentage: args.preference_rate,
    samples_per_profile: args.samples_per_profile,
  };

  let vocabulary = Vocabulary::stock();
  let mut rng = rand::thread_rng();
  let sentences = generate_corpus(&vocabulary, &config, &mut rng)?;

  info!(
    "Generated {} sentences across {} profiles",
    sentences.len(),
    vocabulary.profiles.len()
  );
  if let Some(first) = sentences.first() {
    info!("Sample for {}: {}", first.0, first.1.iter().format(" "));
  }

  let path = write_corpus(&sentences, &config, &args.out_dir)?;
  println!("Wrote {} sentences to {}", sentences.len(), path.display());
  Ok(())
}
