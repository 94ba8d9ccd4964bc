
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
  #[error("no profile named '{0}' in the vocabulary")]
  InvalidProfile(String),

  #[error("cursor {index} is outside the session bounds (0..{len})")]
  CursorOutOfRange { index: usize, len: usize },

  #[error("profile '{name}' has a {name_len}-letter name but only {word_count} preferred words")]
  VocabularyShape { name: String, name_len: usize, word_count: usize },

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
