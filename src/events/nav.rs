use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hamburger toggling, plus closing the menu when a link is chosen.
pub fn wire_menu(document: &web::Document) {
    let (hamburger, menu) = match (
        dom::select(document, ".hamburger"),
        dom::select(document, ".nav-menu"),
    ) {
        (Some(h), Some(m)) => (h, m),
        _ => return,
    };

    let hamburger_toggle = hamburger.clone();
    let menu_toggle = menu.clone();
    dom::add_click_listener(&hamburger, move || {
        _ = hamburger_toggle.class_list().toggle("active");
        _ = menu_toggle.class_list().toggle("active");
    });

    for link in dom::select_all(document, ".nav-link") {
        let hamburger_close = hamburger.clone();
        let menu_close = menu.clone();
        dom::add_click_listener(&link, move || {
            _ = hamburger_close.class_list().remove_1("active");
            _ = menu_close.class_list().remove_1("active");
        });
    }
}

/// In-page anchors scroll smoothly to their targets instead of jumping.
pub fn wire_anchor_scroll(document: &web::Document) {
    for anchor in dom::select_all(document, r##"a[href^="#"]"##) {
        let document = document.clone();
        let anchor_href = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let href = match anchor_href.get_attribute("href") {
                Some(h) => h,
                None => return,
            };
            if let Some(target) = dom::select(&document, &href) {
                let options = web::ScrollIntoViewOptions::new();
                options.set_behavior(web::ScrollBehavior::Smooth);
                options.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(_)>);
        _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
