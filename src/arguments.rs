use super::*;

#[derive(Debug, Parser)]
#[clap(name = "tt-tutor", about = "Typing practice in the terminal")]
pub(crate) struct Arguments {
  #[clap(long, short, help = "Read settings from a TOML file")]
  config: Option<PathBuf>,
  #[clap(long, short, help = "Run a timed test lasting this many seconds")]
  duration: Option<u64>,
  #[clap(long, short, help = "Show the finger placement guide")]
  finger_guide: bool,
  #[clap(long, short, help = "Number of words in the test text")]
  word_count: Option<usize>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    Tutor::new(self.settings()?).run()
  }

  fn settings(&self) -> Result<Settings> {
    let mut settings = match &self.config {
      Some(path) => Settings::load(path)?,
      None => Settings::default(),
    };

    if let Some(duration) = self.duration {
      settings.duration = Some(duration);
    }

    if let Some(word_count) = self.word_count {
      settings.word_count = word_count;
    }

    if self.finger_guide {
      settings.show_finger_guide = true;
    }

    settings.validate()?;

    Ok(settings)
  }
}
