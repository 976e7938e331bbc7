use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Application, ApplicationWindow, Frame, Orientation, ScrolledWindow, TextView};
use gtk4::{Revealer, RevealerTransitionType};
use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod menu;
pub mod model;
pub mod panels;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;
use ui::interactions::setup_interactions;

fn main() {
  let app = Application::builder()
    .application_id("org.example.slipview")
    .build();

  app.connect_activate(build_ui);
  app.run();
}

fn build_ui(app: &Application) {
  let mut initial_state = AppState::new();
  let config_msg = initial_state.load_config();
  let (level, show_console) = (
    initial_state.config.level_filter(),
    initial_state.config.show_console,
  );
  let state = Rc::new(RefCell::new(initial_state));

  let window = ApplicationWindow::builder()
    .application(app)
    .title("SlipView - Crystal Plasticity Visualizer")
    .default_width(900)
    .default_height(1000)
    .build();

  // 1. TOP LEVEL: Vertical Box (Menu on top, Page, Console)
  let root_vbox = GtkBox::new(Orientation::Vertical, 0);
  window.set_child(Some(&root_vbox));

  // Console first, so the logger catches everything the page logs while building
  let console_view = TextView::builder()
    .editable(false)
    .cursor_visible(false)
    .monospace(true)
    .left_margin(10)
    .right_margin(10)
    .top_margin(10)
    .bottom_margin(10)
    .build();
  if let Err(e) = utils::logger::init(&console_view, level) {
    eprintln!("Logger already set: {}", e);
  }
  log::info!("{}", config_msg);

  let console_frame = Frame::new(None);
  console_frame.set_child(Some(
    &ScrolledWindow::builder()
      .min_content_height(150)
      .child(&console_view)
      .build(),
  ));
  let console_revealer = Revealer::builder()
    .transition_type(RevealerTransitionType::SlideUp)
    .child(&console_frame)
    .reveal_child(show_console)
    .build();

  // 2. PAGE (scrolls as a whole, like a document)
  let page = panels::page::build(state.clone(), &console_view);
  let page_scroll = ScrolledWindow::builder()
    .vexpand(true)
    .child(&page.root)
    .build();

  // 3. Menu Bar
  let menu_bar =
    menu::build_menu_and_actions(app, &window, state.clone(), &page, &console_revealer);

  root_vbox.append(&menu_bar);
  root_vbox.append(&page_scroll);
  root_vbox.append(&console_revealer);

  // --- Setup Logic ---
  setup_interactions(state, &page.areas());

  window.present();
}
