
use std::{collections::HashMap, fs::File, io::BufWriter, path::Path};

use crate::errors::{PrepError, Result};
use crate::faces::FaceImage;

/// A manual-labeling session: a cursor over an ordered face sequence plus the
/// labels recorded so far. Keys of `results` are the face index in text form,
/// values are 0 (no glasses) or 1 (glasses).
pub struct LabelSession {
  faces: Vec<FaceImage>,
  index: usize,
  results: HashMap<String, u8>,
}

impl LabelSession {
  pub fn new(faces: Vec<FaceImage>) -> LabelSession {
    LabelSession {
      faces,
      index: 0,
      results: HashMap::new(),
    }
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.faces.len()
  }

  pub fn is_empty(&self) -> bool {
    self.faces.is_empty()
  }

  pub fn labeled_count(&self) -> usize {
    self.results.len()
  }

  pub fn current_face(&self) -> Option<&FaceImage> {
    self.faces.get(self.index)
  }

  pub fn label_for(&self, index: usize) -> Option<u8> {
    self.results.get(&index.to_string()).copied()
  }

  /// Moves the cursor forward by one and returns the new position. The cursor
  /// may land one past the last face; `is_finished` reports that state.
  pub fn advance(&mut self) -> usize {
    self.index += 1;
    self.index
  }

  /// Moves the cursor back by one, clamped at the front of the sequence, and
  /// returns the new position.
  pub fn retreat(&mut self) -> usize {
    self.index = self.index.saturating_sub(1);
    self.index
  }

  /// Stores `glasses` under the current cursor, overwriting any earlier label
  /// for the same face.
  pub fn record(&mut self, glasses: u8) -> Result<()> {
    if self.index >= self.faces.len() {
      return Err(PrepError::CursorOutOfRange {
        index: self.index,
        len: self.faces.len(),
      });
    }
    self.results.insert(self.index.to_string(), glasses);
    Ok(())
  }

  pub fn is_finished(&self) -> bool {
    self.index >= self.faces.len()
  }

  /// Writes the accumulated labels as a single JSON object. This is the only
  /// persistence point of the session, so failures surface to the caller.
  pub fn save(&self, path: &Path) -> Result<()> {
    serde_json::to_writer(BufWriter::new(File::create(path)?), &self.results)?;
    Ok(())
  }
}
