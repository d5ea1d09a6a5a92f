use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
  pub(crate) duration: Option<u64>,
  pub(crate) show_finger_guide: bool,
  pub(crate) word_count: usize,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      duration: None,
      show_finger_guide: false,
      word_count: 100,
    }
  }
}

impl Settings {
  pub(crate) fn is_timed(&self) -> bool {
    self.duration.is_some()
  }

  pub(crate) fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read settings file: {}", path.display()))?;

    let settings = toml::from_str::<Self>(&content)
      .with_context(|| format!("failed to parse settings file: {}", path.display()))?;

    debug!(path = %path.display(), ?settings, "loaded settings");

    Ok(settings)
  }

  pub(crate) fn validate(&self) -> Result {
    if self.word_count == 0 {
      bail!("word count must be greater than zero");
    }

    if self.duration == Some(0) {
      bail!("test duration must be greater than zero");
    }

    Ok(())
  }
}
