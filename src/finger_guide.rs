use super::*;

const LOGO: &str = "[tt]";

const MAX_HEIGHT: usize = 12;

const DIAGRAM: &str = "  1    2    3    4    5    6    7    8    9    0
 LP   LR   LM   LI   LI   RI   RI   RM   RR   RP
    Q    W    E    R    T    Y    U    I    O    P
   LP   LR   LM   LI   LI   RI   RI   RM   RR   RP
      A    S    D   [F]   G    H   [J]   K    L    ;
     LP   LR   LM   LI   LI   RI   RI   RM   RR   RP
        Z    X    C    V    B    N    M    ,    .    /
       LP   LR   LM   LI   LI   RI   RI   RM   RR   RP
                 [            space            ]
                             thumbs
 L/R = left/right hand   P pinky  R ring  M middle  I index
 rest your index fingers on the bumps of F and J";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FingerGuide {
  pub(crate) show: bool,
}

#[derive(Debug, PartialEq)]
pub(crate) struct Panel {
  pub(crate) lines: Vec<&'static str>,
  pub(crate) title: String,
}

impl FingerGuide {
  pub(crate) fn new(show: bool) -> Self {
    Self { show }
  }

  /// Returns `None` while hidden. Settings do not affect the guide.
  pub(crate) fn render(&self, _settings: &Settings) -> Option<Panel> {
    if !self.show {
      return None;
    }

    Some(Panel::new(DIAGRAM))
  }

  pub(crate) fn toggle(&mut self) {
    self.show = !self.show;
  }
}

impl Panel {
  fn new(diagram: &'static str) -> Self {
    Self {
      lines: diagram.lines().take(MAX_HEIGHT).collect(),
      title: format!("{LOGO} Finger Guide"),
    }
  }

  pub(crate) fn draw(&self, w: &mut impl Write) -> Result {
    queue!(
      w,
      MoveToNextLine(2),
      SetAttribute(Attribute::Bold),
      Print(&self.title),
      SetAttribute(Attribute::Reset),
      MoveToNextLine(2),
    )?;

    for line in &self.lines {
      queue!(w, Print(line), MoveToNextLine(1))?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hidden_renders_nothing() {
    let guide = FingerGuide::new(false);

    assert_eq!(guide.render(&Settings::default()), None);

    assert_eq!(
      guide.render(&Settings {
        duration: Some(30),
        show_finger_guide: true,
        word_count: 5,
      }),
      None
    );
  }

  #[test]
  fn shown_renders_title_and_diagram() {
    let panel = FingerGuide::new(true).render(&Settings::default()).unwrap();

    assert!(panel.title.contains("Finger Guide"));
    assert!(panel.title.starts_with(LOGO));
    assert!(!panel.lines.is_empty());
    assert!(panel.lines.iter().any(|line| line.contains("[F]")));
  }

  #[test]
  fn diagram_height_is_bounded() {
    let panel = FingerGuide::new(true).render(&Settings::default()).unwrap();

    assert_eq!(panel.lines.len(), DIAGRAM.lines().count().min(MAX_HEIGHT));
  }

  #[test]
  fn tall_diagram_is_truncated() {
    let tall = (0..MAX_HEIGHT + 5)
      .map(|row| format!("row {row}"))
      .collect::<Vec<String>>()
      .join("\n");

    let panel = Panel::new(Box::leak(tall.into_boxed_str()));

    assert_eq!(panel.lines.len(), MAX_HEIGHT);
    assert_eq!(panel.lines[0], "row 0");
    assert_eq!(panel.lines[MAX_HEIGHT - 1], format!("row {}", MAX_HEIGHT - 1));
  }

  #[test]
  fn settings_do_not_change_output() {
    let guide = FingerGuide::new(true);

    assert_eq!(
      guide.render(&Settings::default()),
      guide.render(&Settings {
        duration: Some(120),
        show_finger_guide: false,
        word_count: 3,
      })
    );
  }

  #[test]
  fn toggle() {
    let mut guide = FingerGuide::default();

    guide.toggle();
    assert!(guide.show);

    guide.toggle();
    assert!(!guide.show);
  }

  #[test]
  fn draw() {
    let mut output = Vec::new();

    FingerGuide::new(true)
      .render(&Settings::default())
      .unwrap()
      .draw(&mut output)
      .unwrap();

    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Finger Guide"));
    assert!(output.contains("space"));
  }
}
