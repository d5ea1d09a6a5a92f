use super::*;

/// Raw mode and mouse capture for as long as this value lives.
struct Terminal;

impl Terminal {
  fn enter() -> Result<Self> {
    terminal::enable_raw_mode()?;
    let guard = Self;
    logging::set_screen_owned(true);
    command!(EnableMouseCapture, Hide)?;
    Ok(guard)
  }
}

impl Drop for Terminal {
  fn drop(&mut self) {
    logging::set_screen_owned(false);

    if let Err(error) = command!(ResetColor, Show, DisableMouseCapture) {
      warn!(%error, "failed to restore terminal state");
    }

    if let Err(error) = terminal::disable_raw_mode() {
      warn!(%error, "failed to disable raw mode");
    }
  }
}

pub(crate) struct Tutor {
  settings: Settings,
}

impl Tutor {
  pub(crate) fn new(settings: Settings) -> Self {
    Self { settings }
  }

  pub(crate) fn run(self) -> Result {
    let last = {
      let _terminal = Terminal::enter()?;
      let last = self.practice(&mut stdout())?;
      command!(Clear(ClearType::All), MoveTo(0, 0))?;
      last
    };

    if let Some(stats) = last {
      println!("{stats}");
    }

    Ok(())
  }

  /// Runs tests until the user quits mid-test or closes a summary.
  fn practice(&self, w: &mut impl Write) -> Result<Option<Stats>> {
    let mut last = None;

    for round in 1.. {
      info!(round, timed = self.settings.is_timed(), "starting typing test");

      let Some(stats) = App::new(&self.settings).run(w)? else {
        info!(round, "typing test abandoned");
        break;
      };

      info!(round, %stats, "typing test completed");

      let outcome = self.summarize(w, &stats)?;

      last = Some(stats);

      match outcome {
        Outcome::Retry => info!(round, "retrying typing test"),
        Outcome::Close => {
          info!(round, "closed test summary");
          break;
        }
      }
    }

    Ok(last)
  }

  fn summarize(&self, w: &mut impl Write, stats: &Stats) -> Result<Outcome> {
    let dropped = dialog::drain(|| Ok(event::poll(Duration::ZERO)?), || Ok(event::read()?))?;

    if dropped > 0 {
      debug!(dropped, "discarded input queued before test summary");
    }

    let mut dialog = Dialog::Open;

    loop {
      let summary = TestSummary {
        is_timed_test: self.settings.is_timed(),
        is_visible: dialog.is_open(),
        stats,
        test_duration: self.settings.duration,
      };

      if let Some(view) = summary.view() {
        view.draw(w)?;
      }

      if let Some(event) = DialogEvent::from_event(event::read()?) {
        if let Some(outcome) = dialog.handle(event) {
          return Ok(outcome);
        }
      }
    }
  }
}
