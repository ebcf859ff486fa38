use crate::constants::{PROJECT_CARD_LIFT, PROJECT_CARD_REST, SKILL_ITEM_LIFT, SKILL_ITEM_REST};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lift-on-hover transforms for the project cards and skill chips.
pub fn wire_hover_lifts(document: &web::Document) {
    for card in dom::select_all(document, ".project-card") {
        wire_hover(card, PROJECT_CARD_LIFT, PROJECT_CARD_REST);
    }
    for item in dom::select_all(document, ".skill-item") {
        wire_hover(item, SKILL_ITEM_LIFT, SKILL_ITEM_REST);
    }
}

fn wire_hover(el: web::Element, enter: &'static str, leave: &'static str) {
    set_transform_on(&el, "mouseenter", enter);
    set_transform_on(&el, "mouseleave", leave);
}

fn set_transform_on(el: &web::Element, event: &str, transform: &'static str) {
    let target = el.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(style) = dom::style_of(&target) {
            _ = style.set_property("transform", transform);
        }
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
