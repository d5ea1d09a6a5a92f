use super::*;

const HEADLINE_WIDTH: usize = 14;

const LABEL_WIDTH: usize = 24;

#[derive(Debug, PartialEq)]
pub(crate) struct Row {
  pub(crate) label: &'static str,
  pub(crate) tone: Tone,
  pub(crate) value: String,
}

impl Row {
  fn new(label: &'static str, value: impl ToString, tone: Tone) -> Self {
    Self {
      label,
      tone,
      value: value.to_string(),
    }
  }
}

/// Results dialog for a finished test.
#[derive(Debug)]
pub(crate) struct TestSummary<'a> {
  pub(crate) is_timed_test: bool,
  pub(crate) is_visible: bool,
  pub(crate) stats: &'a Stats,
  pub(crate) test_duration: Option<u64>,
}

#[derive(Debug, PartialEq)]
pub(crate) struct SummaryView {
  pub(crate) analysis: Vec<Row>,
  pub(crate) badge: &'static str,
  pub(crate) details: Vec<Row>,
  pub(crate) headline: Vec<Row>,
}

impl TestSummary<'_> {
  pub(crate) fn view(&self) -> Option<SummaryView> {
    if !self.is_visible {
      return None;
    }

    let stats = self.stats;

    let headline = vec![
      Row::new("WPM", stats.wpm, Tone::for_wpm(stats.wpm)),
      Row::new(
        "Accuracy",
        format!("{}%", stats.displayed_accuracy()),
        Tone::for_accuracy(stats.accuracy),
      ),
      Row::new("Errors", stats.errors, Tone::Poor),
      Row::new("Time", format_time(stats.time_elapsed), Tone::Info),
    ];

    let mut details = vec![
      Row::new("Characters Typed:", stats.characters_typed, Tone::Plain),
      Row::new("Correct Characters:", stats.correct_chars, Tone::Good),
      Row::new("Incorrect Characters:", stats.incorrect_chars, Tone::Poor),
    ];

    if let Some(duration) = self.test_duration.filter(|&d| self.is_timed_test && d > 0) {
      details.push(Row::new(
        "Test Duration:",
        format_time(duration),
        Tone::Plain,
      ));
    }

    let analysis = vec![
      Row::new(
        "Average Speed:",
        format!("{} WPM", stats.average_speed()),
        Tone::Plain,
      ),
      Row::new(
        "Error Rate:",
        format!("{}%", stats.error_rate()),
        Tone::Poor,
      ),
      Row::new(
        "Characters per Second:",
        stats.characters_per_second(),
        Tone::Plain,
      ),
    ];

    Some(SummaryView {
      analysis,
      badge: if self.is_timed_test {
        "Timed Test"
      } else {
        "Text-based Test"
      },
      details,
      headline,
    })
  }
}

impl SummaryView {
  pub(crate) fn draw(&self, w: &mut impl Write) -> Result {
    queue!(
      w,
      Clear(ClearType::All),
      MoveTo(0, 0),
      SetAttribute(Attribute::Bold),
      Print("Test Summary"),
      SetAttribute(Attribute::Reset),
      Print(format!("  [{}]", self.badge)),
      MoveToNextLine(2),
    )?;

    for row in &self.headline {
      queue!(
        w,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(row.tone.color()),
        Print(format!("{:<HEADLINE_WIDTH$}", row.value)),
        ResetColor,
        SetAttribute(Attribute::Reset),
      )?;
    }

    queue!(w, MoveToNextLine(1))?;

    for row in &self.headline {
      queue!(w, Print(format!("{:<HEADLINE_WIDTH$}", row.label)))?;
    }

    Self::section(w, "Performance Details", &self.details)?;
    Self::section(w, "Analysis", &self.analysis)?;

    queue!(
      w,
      MoveToNextLine(2),
      Print("[ctrl+r] Retry Test    [ctrl+x] Close"),
      MoveToNextLine(1),
    )?;

    w.flush()?;

    Ok(())
  }

  fn section(w: &mut impl Write, heading: &str, rows: &[Row]) -> Result {
    queue!(
      w,
      MoveToNextLine(2),
      SetAttribute(Attribute::Bold),
      Print(heading),
      SetAttribute(Attribute::Reset),
    )?;

    for row in rows {
      queue!(
        w,
        MoveToNextLine(1),
        Print(format!("  {:<LABEL_WIDTH$}", row.label)),
        SetForegroundColor(row.tone.color()),
        Print(&row.value),
        ResetColor,
      )?;
    }

    Ok(())
  }
}
