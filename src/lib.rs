#![cfg(target_arch = "wasm32")]
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod notify;
mod observe;
mod particles;
mod scene;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let started = Instant::now();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::wire_menu(&document);
    events::wire_anchor_scroll(&document);
    observe::wire_section_reveal(&document);
    events::wire_navbar_solidify(&document);
    observe::wire_hero_intro(&document);
    observe::wire_stat_counters(&document);
    contact::wire_form(&document);
    events::wire_hover_lifts(&document);
    events::wire_hero_parallax(&document);
    particles::spawn_field(&document);
    theme::install_toggle(&document);
    observe::wire_lazy_images(&document);
    wire_loaded_class(&window);

    let scene_armed = events::arm_interactive_web(&document).is_some();
    log::info!(
        "[init] page wired in {:?} (scene {})",
        started.elapsed(),
        if scene_armed { "armed" } else { "absent" }
    );
    Ok(())
}

fn wire_loaded_class(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(document) = dom::window_document() {
            if let Some(body) = document.body() {
                _ = body.class_list().add_1("loaded");
            }
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
