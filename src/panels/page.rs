// src/panels/page.rs

use gtk4::prelude::*;
use gtk4::{
  Align, Box as GtkBox, DrawingArea, DropDown, Label, Orientation, StringList, StringObject,
  TextView,
};

use crate::model::{lookup_slip_plane, slip_plane_labels, structure_for, CrystalSystem};
use crate::rendering;
use crate::state::AppState;
use crate::ui::controller::{PAGE_TITLE, SYSTEM_PROMPT};
use crate::utils::{logger, report};
use std::cell::RefCell;
use std::rc::Rc;

const FIGURE_HEIGHT: i32 = 420;

/// Widgets the callbacks and menu actions need to reach.
#[derive(Clone)]
pub struct PageWidgets {
  pub root: GtkBox,
  pub subheader: Label,
  pub structure_area: DrawingArea,
  pub slip_prompt: Label,
  pub slip_dropdown: DropDown,
  pub plane_area: DrawingArea,
  pub error_label: Label,
}

impl PageWidgets {
  pub fn areas(&self) -> Vec<DrawingArea> {
    vec![self.structure_area.clone(), self.plane_area.clone()]
  }
}

fn heading(markup: &str) -> Label {
  let label = Label::builder().halign(Align::Start).build();
  label.set_markup(markup);
  label
}

fn figure_area() -> DrawingArea {
  let area = DrawingArea::new();
  area.set_hexpand(true);
  area.set_content_height(FIGURE_HEIGHT);
  area
}

/// Builds the page: title, system selector, cell plot, slip plane selector, plane plot.
pub fn build(state: Rc<RefCell<AppState>>, console: &TextView) -> PageWidgets {
  let root = GtkBox::new(Orientation::Vertical, 10);
  root.set_margin_start(20);
  root.set_margin_end(20);
  root.set_margin_top(10);
  root.set_margin_bottom(10);

  root.append(&heading(&format!(
    "<span size='xx-large' weight='bold'>{}</span>",
    PAGE_TITLE
  )));

  // --- 1. Crystal System ---
  let (system, options) = {
    let st = state.borrow();
    (st.selection.system, st.page.slip_plane_options.clone())
  };

  root.append(&Label::builder().label(SYSTEM_PROMPT).halign(Align::Start).build());
  let names: Vec<&str> = CrystalSystem::ALL.iter().map(|s| s.name()).collect();
  let system_dropdown = DropDown::from_strings(&names);
  system_dropdown.set_selected(system.index() as u32);
  system_dropdown.set_halign(Align::Start);
  root.append(&system_dropdown);

  let subheader = heading("");
  root.append(&subheader);

  let structure_area = figure_area();
  root.append(&structure_area);

  // --- 2. Slip Plane ---
  let slip_prompt = Label::builder().halign(Align::Start).build();
  root.append(&slip_prompt);

  let slip_dropdown = DropDown::from_strings(&options);
  slip_dropdown.set_halign(Align::Start);
  root.append(&slip_dropdown);

  let plane_area = figure_area();
  root.append(&plane_area);

  let error_label = Label::builder().halign(Align::Start).visible(false).build();
  error_label.add_css_class("error");
  root.append(&error_label);

  let widgets = PageWidgets {
    root,
    subheader,
    structure_area,
    slip_prompt,
    slip_dropdown,
    plane_area,
    error_label,
  };

  setup_drawing(&widgets, state.clone());

  // --- 3. Selection Callbacks ---
  let s = state.clone();
  let w = widgets.clone();
  let con = console.clone();
  system_dropdown.connect_selected_notify(move |dd| {
    let Some(system) = CrystalSystem::from_index(dd.selected() as usize) else {
      return;
    };

    let changed = {
      let mut st = s.borrow_mut();
      let sel = st.selection.with_system(system);
      st.apply_selection(sel)
    };
    if !changed {
      return;
    }
    log::info!("Crystal system: {}", system);

    // Rebuilding the model fires the slip plane callback; the state borrow is released
    let labels = slip_plane_labels(system);
    w.slip_dropdown.set_model(Some(&StringList::new(&labels)));
    w.slip_dropdown.set_selected(0);

    refresh(&w, &s.borrow(), &con);
  });

  let s = state.clone();
  let w = widgets.clone();
  let con = console.clone();
  widgets.slip_dropdown.connect_selected_notify(move |dd| {
    let Some(label) = dd
      .selected_item()
      .and_then(|obj| obj.downcast::<StringObject>().ok())
      .map(|obj| obj.string().to_string())
    else {
      return;
    };

    let changed = {
      let mut st = s.borrow_mut();
      let sel = st.selection.with_slip_plane(&label);
      st.apply_selection(sel)
    };
    if changed {
      log::info!("Slip plane: {}", label);
      refresh(&w, &s.borrow(), &con);
    }
  });

  refresh(&widgets, &state.borrow(), console);
  widgets
}

fn setup_drawing(widgets: &PageWidgets, state: Rc<RefCell<AppState>>) {
  let s = state.clone();
  widgets.structure_area.set_draw_func(move |_, cr, w, h| {
    let st = s.borrow();
    if let Err(e) = rendering::draw_on_cairo(cr, &st.page.structure, &st.view, (w as u32, h as u32))
    {
      log::error!("Failed to draw '{}': {}", st.page.structure.title, e);
    }
  });

  let s = state;
  widgets.plane_area.set_draw_func(move |_, cr, w, h| {
    let st = s.borrow();
    // No figure for an invalid label; the error label is shown instead
    if let Ok(figure) = &st.page.plane {
      if let Err(e) = rendering::draw_on_cairo(cr, figure, &st.view, (w as u32, h as u32)) {
        log::error!("Failed to draw '{}': {}", figure.title, e);
      }
    }
  });
}

/// Pushes the current page into the widgets and writes the console report.
pub fn refresh(widgets: &PageWidgets, st: &AppState, console: &TextView) {
  let page = &st.page;

  widgets.subheader.set_markup(&format!(
    "<span size='large' weight='bold'>{}</span>",
    page.subheader
  ));
  widgets.slip_prompt.set_text(&page.slip_plane_prompt);

  match &page.plane {
    Ok(_) => {
      widgets.error_label.set_visible(false);
      widgets.plane_area.set_visible(true);
    }
    Err(e) => {
      widgets.error_label.set_text(&e.to_string());
      widgets.error_label.set_visible(true);
      widgets.plane_area.set_visible(false);
    }
  }

  widgets.structure_area.queue_draw();
  widgets.plane_area.queue_draw();

  logger::append_block(console, &report::structure_summary(&structure_for(st.selection.system)));
  if let Ok(plane) = lookup_slip_plane(st.selection.system, &st.selection.slip_plane) {
    logger::append_block(console, &report::plane_summary(&plane));
  }
}
