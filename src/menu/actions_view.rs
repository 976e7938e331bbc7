// src/menu/actions_view.rs

use crate::panels::PageWidgets;
use crate::state::AppState;
use crate::ui::interactions::redraw;
use gtk4::prelude::*;
use gtk4::{Application, Revealer};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
  app: &Application,
  state: Rc<RefCell<AppState>>,
  widgets: &PageWidgets,
  console_revealer: &Revealer,
) {
  // 1. Restore View (Reset)
  let act_reset = gtk4::gio::SimpleAction::new("view_reset", None);
  let s = state.clone();
  let areas = widgets.areas();
  act_reset.connect_activate(move |_, _| {
    s.borrow_mut().reset_view();
    redraw(&areas);
    log::debug!("View reset");
  });
  app.add_action(&act_reset);

  // 2. Console Visibility
  let act_console = gtk4::gio::SimpleAction::new("toggle_console", None);
  let rev_weak = console_revealer.downgrade();
  act_console.connect_activate(move |_, _| {
    if let Some(rev) = rev_weak.upgrade() {
      rev.set_reveal_child(!rev.reveals_child());
    }
  });
  app.add_action(&act_console);
}
