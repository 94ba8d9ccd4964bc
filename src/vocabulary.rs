
use lazy_static::lazy_static;

#[derive(Clone, Debug)]
pub struct Profile {
  pub name: String,
  pub preferred_words: Vec<String>,
}

/// Ordered name → preferred-words mapping. Order matters twice: corpus
/// generation emits one block per profile in this order, and the composer
/// draws filler profiles by index.
#[derive(Clone, Debug)]
pub struct Vocabulary {
  pub profiles: Vec<Profile>,
}

impl Vocabulary {
  pub fn stock() -> Vocabulary {
    STOCK.clone()
  }

  pub fn get(&self, name: &str) -> Option<&Profile> {
    self.profiles.iter().find(|p| p.name == name)
  }
}

fn profile(name: &str, words: &[&str]) -> Profile {
  Profile {
    name: name.to_owned(),
    preferred_words: words.iter().map(|w| (*w).to_owned()).collect(),
  }
}

lazy_static! {
  static ref STOCK: Vocabulary = Vocabulary {
    profiles: vec![
      profile("Pieter", &["work", "first", "chair", "table", "house", "clock"]),
      profile("Anita", &["train", "cable", "stone", "lamp", "display", "battery"]),
    ],
  };
}
