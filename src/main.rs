use {
  crate::{
    action::Action,
    app::{App, State},
    arguments::Arguments,
    dialog::{Dialog, DialogEvent, Outcome},
    finger_guide::FingerGuide,
    format::format_time,
    settings::Settings,
    stats::Stats,
    summary::TestSummary,
    tone::Tone,
    tutor::Tutor,
  },
  anyhow::{Context, anyhow, bail},
  clap::Parser,
  crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    event::{
      self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
      MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
  },
  rand::seq::SliceRandom,
  serde::Deserialize,
  std::{
    cmp::Ordering,
    env,
    fmt::{self, Display, Formatter},
    fs::{self, OpenOptions},
    io::{self, Write, stdout},
    path::{Path, PathBuf},
    process,
    sync::{
      Mutex,
      atomic::{self, AtomicBool},
    },
    time::{Duration, Instant},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::{EnvFilter, fmt::writer::MakeWriterExt},
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod action;
mod app;
mod arguments;
mod dialog;
mod finger_guide;
mod format;
mod logging;
mod settings;
mod stats;
mod summary;
mod tone;
mod tutor;

const WORDS: &[&str] = &[
  "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on", "with",
  "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
  "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
  "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
  "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
  "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
  "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even",
  "new", "want", "because", "any", "these", "give", "day", "most", "us",
];

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  logging::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
