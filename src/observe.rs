use crate::constants::{
    HERO_INTRO_DELAY_MS, HERO_INTRO_TRANSITION, HERO_VISIBLE_THRESHOLD, SECTION_REVEAL_ROOT_MARGIN,
    SECTION_REVEAL_THRESHOLD, STAT_VISIBLE_THRESHOLD,
};
use crate::core::counter::{parse_target, CountUp, COUNT_TICK_MS};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observes the targets and calls `on_enter` for each one as it becomes
/// visible. The observer itself is handed to the callback so behaviors can
/// unobserve once they have fired.
fn observe_entries(
    options: Option<&web::IntersectionObserverInit>,
    targets: Vec<web::Element>,
    mut on_enter: impl FnMut(web::Element, &web::IntersectionObserver) + 'static,
) {
    if targets.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<web::IntersectionObserverEntry>() {
                    Ok(e) => e,
                    Err(_) => continue,
                };
                if entry.is_intersecting() {
                    on_enter(entry.target(), &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = match options {
        Some(opts) => {
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), opts)
        }
        None => web::IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    if let Ok(observer) = observer {
        for el in &targets {
            observer.observe(el);
        }
    }
    callback.forget();
}

fn threshold_options(threshold: f64) -> web::IntersectionObserverInit {
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options
}

/// Sections fade in the first time they scroll into view.
pub fn wire_section_reveal(document: &web::Document) {
    let sections = dom::select_all(document, "section");
    for section in &sections {
        _ = section.class_list().add_1("fade-in");
    }
    let options = threshold_options(SECTION_REVEAL_THRESHOLD);
    options.set_root_margin(SECTION_REVEAL_ROOT_MARGIN);
    observe_entries(Some(&options), sections, |target, _| {
        _ = target.class_list().add_1("visible");
    });
}

/// One-time hero title entrance once the hero is half in view.
pub fn wire_hero_intro(document: &web::Document) {
    let hero = match dom::select(document, ".hero") {
        Some(el) => el,
        None => return,
    };
    let title = match dom::select(document, ".hero-title") {
        Some(el) => el,
        None => return,
    };
    let played = Rc::new(Cell::new(false));
    let options = threshold_options(HERO_VISIBLE_THRESHOLD);
    observe_entries(Some(&options), vec![hero], move |_, _| {
        if played.get() {
            return;
        }
        if let Some(style) = dom::style_of(&title) {
            _ = style.set_property("opacity", "0");
            _ = style.set_property("transform", "translateY(20px)");
        }
        let title = title.clone();
        let played = played.clone();
        dom::after_timeout(HERO_INTRO_DELAY_MS, move || {
            if let Some(style) = dom::style_of(&title) {
                _ = style.set_property("transition", HERO_INTRO_TRANSITION);
                _ = style.set_property("opacity", "1");
                _ = style.set_property("transform", "translateY(0)");
            }
            played.set(true);
        });
    });
}

/// Stat figures count up from zero when they first become visible.
pub fn wire_stat_counters(document: &web::Document) {
    let stats = dom::select_all(document, ".stat");
    let options = threshold_options(STAT_VISIBLE_THRESHOLD);
    observe_entries(Some(&options), stats, |target, observer| {
        let number = match target.query_selector(".stat-number").ok().flatten() {
            Some(el) => el,
            None => return,
        };
        let target_value = parse_target(&number.text_content().unwrap_or_default());
        if target_value > 0.0 {
            animate_count_up(number, target_value);
            observer.unobserve(&target);
        }
    });
}

fn animate_count_up(element: web::Element, target: f64) {
    let mut counter = CountUp::new(target);
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_in_tick = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        let done = counter.step();
        element.set_text_content(Some(&counter.display()));
        if done {
            if let (Some(window), Some(id)) = (web::window(), handle_in_tick.get()) {
                window.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNT_TICK_MS,
        ) {
            handle.set(Some(id));
        }
    }
    closure.forget();
}

/// Deferred images get their real source when they approach the viewport.
pub fn wire_lazy_images(document: &web::Document) {
    let images = dom::select_all(document, "img[data-src]");
    observe_entries(None, images, |target, observer| {
        if let Some(src) = target.get_attribute("data-src") {
            if let Some(img) = target.dyn_ref::<web::HtmlImageElement>() {
                img.set_src(&src);
            }
            _ = target.class_list().remove_1("lazy");
            observer.unobserve(&target);
        }
    });
}
