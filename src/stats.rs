use super::*;

/// Snapshot of a finished (or in-progress) typing test.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Stats {
  pub(crate) accuracy: f64,
  pub(crate) characters_typed: usize,
  pub(crate) correct_chars: usize,
  pub(crate) errors: usize,
  pub(crate) incorrect_chars: usize,
  pub(crate) time_elapsed: u64,
  pub(crate) wpm: f64,
}

impl Stats {
  /// Gross speed over every character typed, five characters to a word.
  pub(crate) fn average_speed(&self) -> u64 {
    if self.time_elapsed == 0 {
      return 0;
    }

    (self.characters_typed as f64 / 5.0 / (self.time_elapsed as f64 / 60.0)).round() as u64
  }

  pub(crate) fn characters_per_second(&self) -> String {
    if self.time_elapsed == 0 {
      return "0".into();
    }

    let per_second = self.characters_typed as f64 / self.time_elapsed as f64;

    // ties round up, not to even
    format!("{:.1}", (per_second * 10.0).round() / 10.0)
  }

  /// Accuracy floored at zero. The upper bound is left as reported.
  pub(crate) fn displayed_accuracy(&self) -> f64 {
    self.accuracy.max(0.0)
  }

  pub(crate) fn error_rate(&self) -> u64 {
    if self.characters_typed == 0 {
      return 0;
    }

    (self.incorrect_chars as f64 / self.characters_typed as f64 * 100.0).round() as u64
  }
}

impl Display for Stats {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "WPM: {} | Errors: {} | Accuracy: {}% | Time: {}",
      self.wpm,
      self.errors,
      self.displayed_accuracy(),
      format_time(self.time_elapsed)
    )
  }
}
