use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
  Delete,
  Escape,
  Insert(char),
  ToggleGuide,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
        KeyCode::Backspace => Some(Self::Delete),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Escape),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(Self::Insert(c)),
        KeyCode::Esc => Some(Self::Escape),
        KeyCode::Tab => Some(Self::ToggleGuide),
        _ => None,
      },
      _ => None,
    }
  }
}
