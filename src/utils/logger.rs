// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static CONSOLE: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// (tag name, foreground, bold)
const TAGS: [(&str, &str, bool); 4] = [
  ("error", "#ff4444", true),
  ("warn", "#ffbb33", false),
  ("info", "#33b5e5", false),
  ("debug", "#aaaaaa", false),
];

struct ConsoleLogger;

/// Routes the `log` facade into the console pane.
pub fn init(view: &TextView, level: LevelFilter) -> Result<(), SetLoggerError> {
  let tag_table = view.buffer().tag_table();
  for (name, color, bold) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = CONSOLE.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Appends a plain block (reports, tables) to the console.
pub fn append_block(view: &TextView, text: &str) {
  let buffer = view.buffer();
  let mut end = buffer.end_iter();
  buffer.insert(&mut end, text);
  if !text.ends_with('\n') {
    buffer.insert(&mut buffer.end_iter(), "\n");
  }
  scroll_to_end(view);
}

fn scroll_to_end(view: &TextView) {
  let buffer = view.buffer();
  let mark = buffer.create_mark(None, &buffer.end_iter(), false);
  view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
  buffer.delete_mark(&mark);
}

fn decorate(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("🔴", "error"),
    Level::Warn => ("🟠", "warn"),
    Level::Info => ("🔵", "info"),
    Level::Debug | Level::Trace => ("⚪", "debug"),
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let (icon, tag_name) = decorate(record.level());
    let msg = format!("{}  {}\n", icon, record.args());

    // Records may come from anywhere; the buffer is touched on the main loop only
    glib::MainContext::default().spawn_local(async move {
      let Some(view) = CONSOLE.get().and_then(|weak| weak.upgrade()) else {
        return;
      };
      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);
      scroll_to_end(&view);
    });
  }

  fn flush(&self) {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_levels_map_to_known_tags() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
      let (_, tag) = decorate(level);
      assert!(TAGS.iter().any(|(name, _, _)| *name == tag));
    }
  }
}
