// these touch document()/window(), so only call them from handlers or effects
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::scroll::{scroll_target, Section};

pub fn section_top(section: &Section) -> Option<f64> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(el.offset_top() as f64)
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_section(section: Section, nav_offset: f64) {
    match section_top(&section) {
        Some(top) => smooth_scroll_to(scroll_target(top, nav_offset)),
        None => log::warn!("no anchor on the page for section {section}"),
    }
}
