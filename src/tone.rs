use super::*;

/// Colour category of a rendered value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Tone {
  Good,
  Info,
  Plain,
  Poor,
  Warning,
}

impl Tone {
  fn banded(value: f64, good: f64, warning: f64) -> Self {
    if value >= good {
      Self::Good
    } else if value >= warning {
      Self::Warning
    } else {
      Self::Poor
    }
  }

  pub(crate) fn color(self) -> Color {
    match self {
      Self::Good => Color::Green,
      Self::Info => Color::Blue,
      Self::Plain => Color::Reset,
      Self::Poor => Color::Red,
      Self::Warning => Color::Yellow,
    }
  }

  pub(crate) fn for_accuracy(accuracy: f64) -> Self {
    Self::banded(accuracy, 95.0, 80.0)
  }

  pub(crate) fn for_wpm(wpm: f64) -> Self {
    Self::banded(wpm, 60.0, 40.0)
  }
}
