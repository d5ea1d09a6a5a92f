use super::*;

const LOG_PATH_VAR: &str = "TT_TUTOR_LOG";

/// Set while the terminal is in raw mode, where stderr shares the screen.
static SCREEN_OWNED: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_screen_owned(owned: bool) {
  SCREEN_OWNED.store(owned, atomic::Ordering::Relaxed);
}

fn stderr_enabled() -> bool {
  !SCREEN_OWNED.load(atomic::Ordering::Relaxed)
}

/// Logs go to the file named by `TT_TUTOR_LOG` when set. Otherwise they go
/// to stderr, except while the typing screen is up.
pub(crate) fn init() {
  let filter = EnvFilter::builder()
    .with_default_directive(tracing::Level::WARN.into())
    .from_env_lossy();

  if let Some(path) = env::var_os(LOG_PATH_VAR) {
    match OpenOptions::new().create(true).append(true).open(&path) {
      Ok(file) => {
        tracing_subscriber::fmt()
          .with_env_filter(filter)
          .with_target(true)
          .with_ansi(false)
          .with_writer(Mutex::new(file))
          .init();

        return;
      }
      Err(error) => eprintln!("warning: could not open log file {path:?}: {error}"),
    }
  }

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_writer(io::stderr.with_filter(|_| stderr_enabled()))
    .init();
}
