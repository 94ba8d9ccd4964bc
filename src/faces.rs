
use std::{fs::File, io::BufReader, path::Path};

use serde::{Serialize, Deserialize};

use crate::errors::Result;

// Darkest to lightest; intensity 1.0 maps to a blank cell.
const RAMP: &[u8] = b"@%#*+=-:. ";

/// A single grayscale face, pixel intensities in [0, 1], stored row-major.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaceImage(pub Vec<Vec<f32>>);

impl FaceImage {
  pub fn height(&self) -> usize {
    self.0.len()
  }

  pub fn width(&self) -> usize {
    self.0.first().map(|row| row.len()).unwrap_or(0)
  }

  // Character cells are roughly twice as tall as they are wide, so rows are
  // sampled twice as sparsely as columns.
  pub fn render(&self, max_rows: usize) -> String {
    let max_rows = max_rows.max(1);
    let row_step = ((self.height() + max_rows - 1) / max_rows).max(1);
    let col_step = (row_step / 2).max(1);

    let mut out = String::new();
    for row in self.0.iter().step_by(row_step) {
      for v in row.iter().step_by(col_step) {
        let v = v.clamp(0.0, 1.0);
        let i = (v * (RAMP.len() - 1) as f32).round() as usize;
        out.push(RAMP[i] as char);
      }
      out.push('\n');
    }
    out
  }
}

/// Loads an ordered face set from a JSON file: an array of images, each an
/// array of rows, each row an array of floats.
pub fn load_faces(path: &Path) -> Result<Vec<FaceImage>> {
  Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn parses_a_face_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faces.json");
    let mut file = File::create(&path).unwrap();
    file.write_all(b"[[[0.0, 1.0], [0.5, 0.25]]]").unwrap();

    let faces = load_faces(&path).unwrap();
    assert_eq!(faces.len(), 1);
    assert_eq!(faces[0].height(), 2);
    assert_eq!(faces[0].width(), 2);
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_faces(&dir.path().join("nope.json")).is_err());
  }

  #[test]
  fn render_maps_intensity_to_ramp() {
    let face = FaceImage(vec![vec![0.0, 1.0]]);
    assert_eq!(face.render(1), "@ \n");
  }

  #[test]
  fn render_downsamples_tall_images() {
    let face = FaceImage(vec![vec![0.0; 8]; 8]);
    let rendered = face.render(2);
    assert_eq!(rendered.lines().count(), 2);
  }
}
