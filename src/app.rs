use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum State {
  Completed,
  Continuing,
  Quit,
}

/// A single typing test run.
#[derive(Clone, Debug)]
pub(crate) struct App {
  characters: usize,
  errors: usize,
  guide: FingerGuide,
  input: String,
  position: usize,
  settings: Settings,
  start_time: Option<Instant>,
  text: String,
}

impl Default for App {
  fn default() -> Self {
    Self {
      characters: 0,
      errors: 0,
      guide: FingerGuide::default(),
      input: String::new(),
      position: 0,
      settings: Settings::default(),
      start_time: None,
      text: String::new(),
    }
  }
}

impl App {
  pub(crate) fn new(settings: &Settings) -> Self {
    let mut generator = rand::thread_rng();

    let text = (0..settings.word_count)
      .filter_map(|_| WORDS.choose(&mut generator).copied())
      .collect::<Vec<&str>>();

    Self {
      guide: FingerGuide::new(settings.show_finger_guide),
      settings: settings.clone(),
      text: text.join(" "),
      ..Default::default()
    }
  }

  fn accuracy(&self) -> Result<f64> {
    if self.characters == 0 {
      return Ok(100.00);
    }

    let correct_chars = self
      .characters
      .checked_sub(self.errors)
      .ok_or_else(|| anyhow!("character count underflow"))?;

    let accuracy = (correct_chars as f64 / self.characters as f64) * 100.0;

    if accuracy.is_finite() {
      Ok(accuracy)
    } else {
      Err(anyhow!("accuracy calculation produced invalid result"))
    }
  }

  /// Characters still in the input, split into those matching the text and
  /// those that do not.
  fn classify(&self) -> (usize, usize) {
    self
      .input
      .chars()
      .zip(self.text.chars())
      .fold((0, 0), |(correct, incorrect), (typed, expected)| {
        if typed == expected {
          (correct + 1, incorrect)
        } else {
          (correct, incorrect + 1)
        }
      })
  }

  fn display(&self, w: &mut impl Write) -> Result {
    queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;

    let input_characters = self.input.chars().collect::<Vec<char>>();

    for (i, expected_character) in self.text.chars().enumerate() {
      queue!(
        w,
        SetForegroundColor(match i.cmp(&self.position) {
          Ordering::Less => match input_characters.get(i) {
            Some(&typed_character) if typed_character == expected_character => Color::Green,
            _ => Color::Red,
          },
          Ordering::Equal => Color::Yellow,
          Ordering::Greater => Color::White,
        }),
        Print(expected_character),
      )?;
    }

    let stats = self.stats()?;

    queue!(
      w,
      ResetColor,
      MoveToNextLine(2),
      SetForegroundColor(Tone::for_wpm(stats.wpm).color()),
      Print(&stats),
      ResetColor,
    )?;

    if let Some(remaining) = self.remaining() {
      queue!(
        w,
        MoveToNextLine(1),
        Print(format!("Time left: {}", format_time(remaining.as_secs()))),
      )?;
    }

    queue!(
      w,
      MoveToNextLine(1),
      Print("[tab] finger guide    [esc] quit"),
    )?;

    if let Some(panel) = self.guide.render(&self.settings) {
      panel.draw(w)?;
    }

    w.flush()?;

    Ok(())
  }

  fn elapsed(&self) -> Duration {
    let elapsed = self
      .start_time
      .map(|start_time| start_time.elapsed())
      .unwrap_or_default();

    match self.settings.duration {
      Some(duration) => elapsed.min(Duration::from_secs(duration)),
      None => elapsed,
    }
  }

  fn handle_action(&mut self, action: Action) -> State {
    match action {
      Action::Delete => {
        if !self.input.is_empty() {
          self.input.pop();

          if self.position > 0 {
            self.position -= 1;
          }
        }

        State::Continuing
      }
      Action::Escape => State::Quit,
      Action::Insert(c) => {
        let target_chars = self.text.chars().collect::<Vec<char>>();

        if self.position < target_chars.len() {
          self.start_time.get_or_insert_with(Instant::now);

          let expected_char = target_chars[self.position];

          self.input.push(c);
          self.characters += 1;

          if c != expected_char {
            self.errors += 1;
          }

          self.position += 1;

          if self.position >= target_chars.len() {
            State::Completed
          } else {
            State::Continuing
          }
        } else {
          State::Continuing
        }
      }
      Action::ToggleGuide => {
        self.guide.toggle();
        State::Continuing
      }
    }
  }

  fn remaining(&self) -> Option<Duration> {
    self
      .settings
      .duration
      .map(|duration| Duration::from_secs(duration).saturating_sub(self.elapsed()))
  }

  /// Runs until the text is finished or the time runs out, returning the
  /// final statistics, or `None` if the user quit.
  pub(crate) fn run(&mut self, w: &mut impl Write) -> Result<Option<Stats>> {
    loop {
      self.display(w)?;

      if self.tick() == State::Completed {
        return Ok(Some(self.stats()?));
      }

      if event::poll(Duration::from_millis(100))? {
        if let Some(action) = Action::from_event(event::read()?) {
          match self.handle_action(action) {
            State::Completed => return Ok(Some(self.stats()?)),
            State::Quit => return Ok(None),
            State::Continuing => continue,
          }
        }
      }
    }
  }

  pub(crate) fn stats(&self) -> Result<Stats> {
    let (correct_chars, incorrect_chars) = self.classify();

    Ok(Stats {
      accuracy: self.accuracy()?.round(),
      characters_typed: self.characters,
      correct_chars,
      errors: self.errors,
      incorrect_chars,
      time_elapsed: self.elapsed().as_secs(),
      wpm: self.wpm()?.round(),
    })
  }

  fn tick(&self) -> State {
    match self.remaining() {
      Some(remaining) if remaining.is_zero() => State::Completed,
      _ => State::Continuing,
    }
  }

  fn wpm(&self) -> Result<f64> {
    let elapsed = self.elapsed().as_secs_f64();

    if elapsed <= 0.0 {
      return Ok(0.0);
    }

    let words = self.position as f64 / 5.0;

    let minutes = elapsed / 60.0;

    let wpm = words / minutes;

    if wpm.is_finite() {
      Ok(wpm)
    } else {
      Err(anyhow!("wpm calculation produced invalid result"))
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, approx::assert_abs_diff_eq};

  fn started(seconds: u64) -> Option<Instant> {
    Some(Instant::now() - Duration::from_secs(seconds))
  }

  #[test]
  fn new_generates_requested_word_count() {
    let app = App::new(&Settings {
      word_count: 7,
      ..Default::default()
    });

    assert_eq!(app.text.split(' ').count(), 7);
    assert!(app.text.split(' ').all(|word| WORDS.contains(&word)));
    assert_eq!(app.start_time, None);
  }

  #[test]
  fn new_takes_guide_visibility_from_settings() {
    let app = App::new(&Settings {
      show_finger_guide: true,
      ..Default::default()
    });

    assert!(app.guide.show);
  }

  #[test]
  fn type_correct_char() {
    let mut app = App {
      text: "hello".into(),
      ..Default::default()
    };

    assert_eq!(app.handle_action(Action::Insert('h')), State::Continuing);

    assert_eq!(app.position, 1);
    assert_eq!(app.input, "h");
    assert_eq!(app.errors, 0);
    assert_eq!(app.characters, 1);
  }

  #[test]
  fn type_incorrect_char() {
    let mut app = App {
      text: "hello".into(),
      ..Default::default()
    };

    assert_eq!(app.handle_action(Action::Insert('x')), State::Continuing);

    assert_eq!(app.position, 1);
    assert_eq!(app.input, "x");
    assert_eq!(app.errors, 1);
    assert_eq!(app.characters, 1);
  }

  #[test]
  fn first_insert_starts_clock() {
    let mut app = App {
      text: "hello".into(),
      ..Default::default()
    };

    assert_eq!(app.start_time, None);

    app.handle_action(Action::Insert('h'));

    assert!(app.start_time.is_some());
  }

  #[test]
  fn complete_typing() {
    let mut app = App {
      text: "hi".into(),
      ..Default::default()
    };

    assert_eq!(app.handle_action(Action::Insert('h')), State::Continuing);

    assert_eq!(app.handle_action(Action::Insert('i')), State::Completed);
  }

  #[test]
  fn insert_past_end_is_ignored() {
    let mut app = App {
      text: "a".into(),
      ..Default::default()
    };

    assert_eq!(app.handle_action(Action::Insert('a')), State::Completed);
    assert_eq!(app.handle_action(Action::Insert('b')), State::Continuing);

    assert_eq!(app.input, "a");
    assert_eq!(app.characters, 1);
  }

  #[test]
  fn backspace() {
    let mut app = App {
      text: "hello".into(),
      ..Default::default()
    };

    for c in "he".chars() {
      assert_eq!(app.handle_action(Action::Insert(c)), State::Continuing);
    }

    assert_eq!(app.input, "he");
    assert_eq!(app.position, 2);

    assert_eq!(app.handle_action(Action::Delete), State::Continuing);

    assert_eq!(app.input, "h");
    assert_eq!(app.position, 1);
  }

  #[test]
  fn backspace_empty() {
    let mut app = App {
      text: "hello".into(),
      ..Default::default()
    };

    assert_eq!(app.handle_action(Action::Delete), State::Continuing);

    assert_eq!(app.input, "");
    assert_eq!(app.position, 0);
  }

  #[test]
  fn escape_quits() {
    let mut app = App::default();

    assert_eq!(app.handle_action(Action::Escape), State::Quit);
  }

  #[test]
  fn toggle_guide() {
    let mut app = App::default();

    assert_eq!(app.handle_action(Action::ToggleGuide), State::Continuing);
    assert!(app.guide.show);

    assert_eq!(app.handle_action(Action::ToggleGuide), State::Continuing);
    assert!(!app.guide.show);
  }

  #[test]
  fn accuracy() {
    let mut app = App {
      text: "test".into(),
      ..Default::default()
    };

    assert_eq!(app.accuracy().unwrap(), 100.0);

    assert_eq!(app.handle_action(Action::Insert('t')), State::Continuing);
    assert_eq!(app.accuracy().unwrap(), 100.0);

    assert_eq!(app.handle_action(Action::Insert('x')), State::Continuing);
    assert_eq!(app.accuracy().unwrap(), 50.0);

    assert_eq!(app.handle_action(Action::Insert('s')), State::Continuing);

    assert_abs_diff_eq!(app.accuracy().unwrap(), 66.66, epsilon = 0.01);

    assert_eq!(app.handle_action(Action::Insert('t')), State::Completed);

    assert_abs_diff_eq!(app.accuracy().unwrap(), 75.0, epsilon = 0.01);
  }

  #[test]
  fn wpm() {
    let mut app = App {
      start_time: started(60),
      text: "hello world test".into(),
      ..Default::default()
    };

    for c in "hello worl".chars() {
      app.handle_action(Action::Insert(c));
    }

    assert_abs_diff_eq!(app.wpm().unwrap(), 2.0, epsilon = 0.01);

    app.start_time = started(30);

    assert_abs_diff_eq!(app.wpm().unwrap(), 4.0, epsilon = 0.01);

    for c in "d test".chars() {
      app.handle_action(Action::Insert(c));
    }

    assert_abs_diff_eq!(app.wpm().unwrap(), 6.4, epsilon = 0.01);
  }

  #[test]
  fn wpm_before_start_is_zero() {
    let app = App {
      text: "hello".into(),
      ..Default::default()
    };

    assert_eq!(app.wpm().unwrap(), 0.0);
  }

  #[test]
  fn stats_after_correction() {
    let mut app = App {
      start_time: started(6),
      text: "hello".into(),
      ..Default::default()
    };

    app.handle_action(Action::Insert('h'));
    app.handle_action(Action::Insert('x'));
    app.handle_action(Action::Delete);

    for c in "ell".chars() {
      assert_eq!(app.handle_action(Action::Insert(c)), State::Continuing);
    }

    assert_eq!(app.handle_action(Action::Insert('o')), State::Completed);

    let stats = app.stats().unwrap();

    assert_eq!(stats.characters_typed, 6);
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.correct_chars, 5);
    assert_eq!(stats.incorrect_chars, 0);
    assert_eq!(stats.accuracy, 83.0);
    assert_eq!(stats.wpm, 10.0);
    assert_eq!(stats.time_elapsed, 6);
    assert!(stats.correct_chars + stats.incorrect_chars <= stats.characters_typed);
  }

  #[test]
  fn stats_count_uncorrected_mistakes() {
    let mut app = App {
      text: "abc".into(),
      ..Default::default()
    };

    for c in "axc".chars() {
      app.handle_action(Action::Insert(c));
    }

    let stats = app.stats().unwrap();

    assert_eq!(stats.correct_chars, 2);
    assert_eq!(stats.incorrect_chars, 1);
    assert_eq!(stats.errors, 1);
  }

  #[test]
  fn untimed_tick_continues() {
    let app = App {
      start_time: started(3600),
      text: "hello".into(),
      ..Default::default()
    };

    assert_eq!(app.tick(), State::Continuing);
    assert_eq!(app.remaining(), None);
  }

  #[test]
  fn timed_test_completes_when_time_runs_out() {
    let mut app = App {
      settings: Settings {
        duration: Some(2),
        ..Default::default()
      },
      text: "hello".into(),
      ..Default::default()
    };

    assert_eq!(app.tick(), State::Continuing);
    assert_eq!(app.remaining(), Some(Duration::from_secs(2)));

    app.start_time = started(5);

    assert_eq!(app.tick(), State::Completed);
    assert_eq!(app.remaining(), Some(Duration::ZERO));
    assert_eq!(app.stats().unwrap().time_elapsed, 2);
  }

  #[test]
  fn display_draws_text_and_stats() {
    let app = App {
      guide: FingerGuide::new(true),
      settings: Settings {
        duration: Some(30),
        ..Default::default()
      },
      text: "hi".into(),
      ..Default::default()
    };

    let mut output = Vec::new();

    app.display(&mut output).unwrap();

    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("WPM: 0"));
    assert!(output.contains("Time left: 30s"));
    assert!(output.contains("Finger Guide"));
  }
}
