use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DialogEvent {
  Close,
  /// Escape or a click. Never closes the dialog.
  Dismiss,
  Retry,
}

impl DialogEvent {
  /// Retry and close need a control chord so that keystrokes left over from
  /// the test cannot end the dialog.
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
          KeyCode::Char('r') if control => Some(Self::Retry),
          KeyCode::Char('x') if control => Some(Self::Close),
          KeyCode::Esc => Some(Self::Dismiss),
          _ => None,
        }
      }
      Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(_),
        ..
      }) => Some(Self::Dismiss),
      _ => None,
    }
  }
}

/// Discards events that are already queued, returning how many were dropped.
pub(crate) fn drain(
  mut pending: impl FnMut() -> Result<bool>,
  mut read: impl FnMut() -> Result<Event>,
) -> Result<usize> {
  let mut dropped = 0;

  while pending()? {
    read()?;
    dropped += 1;
  }

  Ok(dropped)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Outcome {
  Close,
  Retry,
}

/// Modal gate whose only exits are retry and close.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Dialog {
  #[default]
  Closed,
  Open,
}

impl Dialog {
  pub(crate) fn handle(&mut self, event: DialogEvent) -> Option<Outcome> {
    let outcome = match (*self, event) {
      (Self::Open, DialogEvent::Close) => Outcome::Close,
      (Self::Open, DialogEvent::Retry) => Outcome::Retry,
      (Self::Open, DialogEvent::Dismiss) => {
        debug!("ignoring dismissal of open dialog");
        return None;
      }
      (Self::Closed, _) => return None,
    };

    *self = Self::Closed;

    Some(outcome)
  }

  pub(crate) fn is_open(self) -> bool {
    self == Self::Open
  }
}
