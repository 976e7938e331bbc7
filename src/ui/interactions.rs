// src/ui/interactions.rs

use crate::config::ViewSettings;
use crate::state::AppState;
use gtk4::glib;
use gtk4::{self as gtk, prelude::*};
use gtk4::{EventControllerScroll, EventControllerScrollFlags, GestureDrag};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const DRAG_SENSITIVITY: f64 = 0.01;
const ZOOM_STEP: f64 = 0.1;

/// Drag rotates, scroll zooms. Both plots share one view, so every area redraws.
pub fn setup_interactions(state: Rc<RefCell<AppState>>, areas: &[gtk::DrawingArea]) {
  let all: Rc<Vec<gtk::DrawingArea>> = Rc::new(areas.to_vec());

  for area in areas {
    // 1. Mouse Drag (Rotation)
    let drag = GestureDrag::new();
    let drag_start: Rc<Cell<ViewSettings>> = Rc::new(Cell::new(state.borrow().view));

    let s = state.clone();
    let start = drag_start.clone();
    drag.connect_drag_begin(move |_, _, _| {
      start.set(s.borrow().view);
    });

    let s = state.clone();
    let start = drag_start.clone();
    let targets = all.clone();
    drag.connect_drag_update(move |_, dx, dy| {
      s.borrow_mut().view = start
        .get()
        .rotated(dx * DRAG_SENSITIVITY, dy * DRAG_SENSITIVITY);
      redraw(&targets);
    });

    let s = state.clone();
    drag.connect_drag_end(move |_, _, _| {
      let v = s.borrow().view;
      log::debug!("View: pitch {:.2}, yaw {:.2}", v.pitch, v.yaw);
    });
    area.add_controller(drag);

    // 2. Scroll (Zoom)
    let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
    let s = state.clone();
    let targets = all.clone();
    scroll.connect_scroll(move |_, _, dy| {
      let factor = if dy > 0.0 { 1.0 - ZOOM_STEP } else { 1.0 + ZOOM_STEP };
      {
        let mut st = s.borrow_mut();
        st.view = st.view.zoomed(factor);
      }
      redraw(&targets);
      glib::Propagation::Stop
    });
    area.add_controller(scroll);
  }
}

pub fn redraw(areas: &[gtk::DrawingArea]) {
  for a in areas {
    a.queue_draw();
  }
}
