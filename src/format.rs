/// Renders whole seconds as `"{m}m {s}s"`, or `"{s}s"` under a minute.
pub(crate) fn format_time(seconds: u64) -> String {
  let (minutes, seconds) = (seconds / 60, seconds % 60);

  if minutes > 0 {
    format!("{minutes}m {seconds}s")
  } else {
    format!("{seconds}s")
  }
}
