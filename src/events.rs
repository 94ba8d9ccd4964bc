
use console::Key;

use crate::session::LabelSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
  MarkNoGlasses,
  MarkGlasses,
  Finish,
  Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
  Continue,
  Finished,
}

/// Maps a raw key to a session action. Unrecognized keys map to nothing and
/// the caller keeps waiting.
pub fn action_for_key(key: &Key) -> Option<KeyAction> {
  match key {
    Key::Char('z') => Some(KeyAction::MarkNoGlasses),
    Key::Char('m') => Some(KeyAction::MarkGlasses),
    Key::Char('y') => Some(KeyAction::Finish),
    Key::Char('b') => Some(KeyAction::Back),
    _ => None,
  }
}

/// Applies one action to the session. `Finished` tells the caller to persist
/// the results and stop.
pub fn apply_action(session: &mut LabelSession, action: KeyAction) -> Outcome {
  match action {
    KeyAction::MarkNoGlasses | KeyAction::MarkGlasses => {
      let label = if action == KeyAction::MarkGlasses { 1 } else { 0 };
      // A record attempt past the end means the sequence is exhausted; that
      // is the terminal signal, not an error worth surfacing.
      if session.record(label).is_err() {
        return Outcome::Finished;
      }
      session.advance();
    }
    KeyAction::Back => {
      session.retreat();
    }
    KeyAction::Finish => {
      return Outcome::Finished;
    }
  }

  if session.is_finished() {
    Outcome::Finished
  } else {
    Outcome::Continue
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::faces::FaceImage;

  fn session_of(n: usize) -> LabelSession {
    LabelSession::new((0..n).map(|_| FaceImage(vec![vec![0.0; 2]; 2])).collect())
  }

  #[test]
  fn key_table() {
    assert_eq!(action_for_key(&Key::Char('z')), Some(KeyAction::MarkNoGlasses));
    assert_eq!(action_for_key(&Key::Char('m')), Some(KeyAction::MarkGlasses));
    assert_eq!(action_for_key(&Key::Char('y')), Some(KeyAction::Finish));
    assert_eq!(action_for_key(&Key::Char('b')), Some(KeyAction::Back));
  }

  #[test]
  fn other_keys_are_ignored() {
    assert_eq!(action_for_key(&Key::Char('q')), None);
    assert_eq!(action_for_key(&Key::Char('Z')), None);
    assert_eq!(action_for_key(&Key::Enter), None);
    assert_eq!(action_for_key(&Key::Escape), None);
  }

  #[test]
  fn mark_no_records_zero_and_advances() {
    let mut session = session_of(3);
    assert_eq!(apply_action(&mut session, KeyAction::MarkNoGlasses), Outcome::Continue);
    assert_eq!(session.label_for(0), Some(0));
    assert_eq!(session.index(), 1);
  }

  #[test]
  fn mark_yes_records_one_and_advances() {
    let mut session = session_of(3);
    assert_eq!(apply_action(&mut session, KeyAction::MarkGlasses), Outcome::Continue);
    assert_eq!(session.label_for(0), Some(1));
    assert_eq!(session.index(), 1);
  }

  #[test]
  fn back_retreats_without_recording() {
    let mut session = session_of(3);
    apply_action(&mut session, KeyAction::MarkGlasses);
    assert_eq!(apply_action(&mut session, KeyAction::Back), Outcome::Continue);
    assert_eq!(session.index(), 0);
    assert_eq!(session.labeled_count(), 1);
  }

  #[test]
  fn finish_stops_immediately() {
    let mut session = session_of(3);
    assert_eq!(apply_action(&mut session, KeyAction::Finish), Outcome::Finished);
    assert_eq!(session.labeled_count(), 0);
  }

  #[test]
  fn labeling_the_last_face_finishes() {
    let mut session = session_of(1);
    assert_eq!(apply_action(&mut session, KeyAction::MarkGlasses), Outcome::Finished);
    assert_eq!(session.label_for(0), Some(1));
  }
}
