use crate::constants::{NAVBAR_SOLID_BG, NAVBAR_SOLID_SCROLL_PX, NAVBAR_TOP_BG, PARALLAX_RATE};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn on_window_scroll(mut handler: impl FnMut(f64) + 'static) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            handler(window.page_y_offset().unwrap_or(0.0));
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Navbar backdrop turns more opaque once the page scrolls away from the top.
pub fn wire_navbar_solidify(document: &web::Document) {
    let navbar = match dom::select(document, ".navbar") {
        Some(el) => el,
        None => return,
    };
    on_window_scroll(move |scrolled| {
        let background = if scrolled > NAVBAR_SOLID_SCROLL_PX {
            NAVBAR_SOLID_BG
        } else {
            NAVBAR_TOP_BG
        };
        if let Some(style) = dom::style_of(&navbar) {
            _ = style.set_property("background", background);
        }
    });
}

/// Hero content drifts against the scroll direction.
pub fn wire_hero_parallax(document: &web::Document) {
    if dom::select(document, ".hero").is_none() {
        return;
    }
    let content = match dom::select(document, ".hero-content") {
        Some(el) => el,
        None => return,
    };
    on_window_scroll(move |scrolled| {
        if let Some(style) = dom::style_of(&content) {
            let rate = scrolled * PARALLAX_RATE;
            _ = style.set_property("transform", &format!("translateY({rate}px)"));
        }
    });
}
