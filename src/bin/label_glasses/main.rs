
// vim: shiftwidth=2

use std::path::PathBuf;

use clap::Parser;
use console::{style, Term};
use dialoguer::Confirm;
use log::{debug, info};

use training_prep::errors::Result;
use training_prep::events::{action_for_key, apply_action, Outcome};
use training_prep::faces::load_faces;
use training_prep::session::LabelSession;

#[derive(Parser, Debug)]
#[command()]
struct Args {
    #[arg()]
    faces: PathBuf,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  let faces = load_faces(&args.faces)?;
  info!("Loaded {} faces from {}", faces.len(), args.faces.display());

  let results_path = args.out_dir.join("results.json");
  if results_path.exists() {
    let overwrite = Confirm::new()
      .with_prompt(format!("{} already exists; overwrite it?", results_path.display()))
      .default(false)
      .interact()
      .unwrap_or(false);
    if !overwrite {
      println!("Keeping {}", results_path.display());
      return Ok(());
    }
  }

  let term = Term::stdout();
  let mut session = LabelSession::new(faces);

  while !session.is_finished() {
    term.clear_screen()?;
    println!(
      "Face {}/{}   {}",
      session.index() + 1,
      session.len(),
      style("z: no glasses   m: glasses   b: back   y: save and quit").dim()
    );
    if let Some(label) = session.label_for(session.index()) {
      println!(
        "{}",
        style(format!("already labeled: {}", if label == 1 { "glasses" } else { "no glasses" })).cyan()
      );
    }
    if let Some(face) = session.current_face() {
      println!("{}", face.render(24));
    }

    let key = term.read_key()?;
    match action_for_key(&key) {
      Some(action) => {
        debug!("key {:?} -> {:?}", key, action);
        if apply_action(&mut session, action) == Outcome::Finished {
          break;
        }
      }
      None => {
        debug!("ignoring key {:?}", key);
      }
    }
  }

  session.save(&results_path)?;
  info!("Saved {} labels to {}", session.labeled_count(), results_path.display());
  println!(
    "Saved {} labels to {}",
    session.labeled_count(),
    results_path.display()
  );
  Ok(())
}
