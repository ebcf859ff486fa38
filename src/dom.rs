use wasm_bindgen::JsCast;
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn select(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn select_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut found = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                found.push(el);
            }
        }
    }
    found
}

/// Inline style access that works for HTML and SVG elements alike.
pub fn style_of(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<web::SvgElement>().map(|svg| svg.style())
}

pub fn create_svg_element(document: &web::Document, name: &str) -> Option<web::Element> {
    document.create_element_ns(Some(SVG_NS), name).ok()
}

/// Appends a style element with the given rules to the document head.
pub fn inject_style(document: &web::Document, css: &str) {
    if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
        style.set_text_content(Some(css));
        _ = head.append_child(&style);
    }
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Runs a callback once after `ms` milliseconds.
pub fn after_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = wasm_bindgen::closure::Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}
