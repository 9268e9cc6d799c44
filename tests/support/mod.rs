#![allow(dead_code)]

use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

// Helper to create a fresh mount point for each test
pub fn mount_point(id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<HtmlElement>()
}

// Give the reactive system a moment to flush DOM updates
pub async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

pub fn all(root: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into::<HtmlElement>())
        .collect()
}

pub fn one(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .unchecked_into::<HtmlElement>()
}

pub fn text(root: &HtmlElement, selector: &str) -> String {
    one(root, selector).text_content().unwrap_or_default()
}

pub fn is_disabled(element: &HtmlElement) -> bool {
    element.unchecked_ref::<HtmlButtonElement>().disabled()
}

// Leptos delegates input events, so the synthetic event has to bubble
fn fire_input(element: &HtmlElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

pub fn type_into_input(element: &HtmlElement, value: &str) {
    element.unchecked_ref::<HtmlInputElement>().set_value(value);
    fire_input(element);
}

pub fn type_into_textarea(element: &HtmlElement, value: &str) {
    element.unchecked_ref::<HtmlTextAreaElement>().set_value(value);
    fire_input(element);
}

// Current value of an input or textarea
pub fn value_of(element: &HtmlElement) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        element.unchecked_ref::<HtmlTextAreaElement>().value()
    }
}
