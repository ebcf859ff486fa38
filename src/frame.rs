use crate::constants::BREATHE_TICK_MS;
use crate::core::breathe::Breathing;
use crate::core::ripple::{Ripple, RipplePhase};
use crate::scene::WebScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Grows one ripple on the browser's frame clock until it finishes, then
/// removes its element. Each click gets its own loop; ripples coexist.
pub fn animate_ripple(element: web::Element, mut ripple: Ripple) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let phase = ripple.step();
        _ = element.set_attribute("r", &ripple.radius.to_string());
        match phase {
            RipplePhase::Growing => {
                if let Some(w) = web::window() {
                    _ = w.request_animation_frame(
                        tick_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    );
                }
            }
            RipplePhase::Done => element.remove(),
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Subtle whole-scene breathing. Runs for the life of the page.
pub fn start_breathing(scene: Rc<WebScene>) {
    let mut breathing = Breathing::default();
    let closure = Closure::wrap(Box::new(move || {
        let scale = breathing.step();
        scene.set_breathe_scale(scale);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            BREATHE_TICK_MS,
        );
    }
    closure.forget();
}
