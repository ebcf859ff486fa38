use crate::core::geometry::{Influence, WebFrame, WebState};
use crate::core::ripple::Ripple;
use crate::dom;
use crate::frame;
use crate::scene::WebScene;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

static RIPPLE_CSS: &str = include_str!("../../styles/ripple.css");

/// Locates the web scene and wires the pointer, click and breathing
/// behaviors. Pages without the scene markup are left untouched.
pub fn arm_interactive_web(document: &web::Document) -> Option<()> {
    let scene = Rc::new(WebScene::locate(document)?);
    let window = web::window()?;
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let frame = WebFrame::new(width as f32, height as f32);
    let state = Rc::new(RefCell::new(WebState::new(frame, scene.circle_centers())));

    dom::inject_style(document, RIPPLE_CSS);

    // Settle the scene before the first pointer sample arrives.
    scene.apply(&state.borrow_mut().apply_influence(Influence::default()));

    wire_pointermove(document, scene.clone(), state);
    wire_click_ripple(scene.clone());
    frame::start_breathing(scene);

    log::info!("[web] interactive scene armed");
    Some(())
}

fn wire_pointermove(document: &web::Document, scene: Rc<WebScene>, state: Rc<RefCell<WebState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let update = state.borrow_mut().update(pointer);
        scene.apply(&update);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click_ripple(scene: Rc<WebScene>) {
    let root = scene.root.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = scene.root.get_bounding_client_rect();
        let origin = Vec2::new(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
        );
        if let Some(element) = scene.spawn_ripple(origin) {
            frame::animate_ripple(element, Ripple::new(origin));
        }
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
