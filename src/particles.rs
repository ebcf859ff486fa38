use crate::core::particles::{float_keyframes, scatter, PARTICLE_COUNT};
use crate::dom;
use rand::Rng;
use web_sys as web;

const CONTAINER_STYLE: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
    pointer-events: none; overflow: hidden; z-index: 1;";

/// Fills the hero with the floating particle field and injects the float
/// keyframes with this page load's drift.
pub fn spawn_field(document: &web::Document) {
    let hero = match dom::select(document, ".hero") {
        Some(el) => el,
        None => return,
    };

    let mut rng = rand::thread_rng();
    dom::inject_style(document, &float_keyframes(rng.gen::<f32>() * 200.0 - 100.0));

    let container = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    container.set_class_name("particles-container");
    if let Some(style) = dom::style_of(&container) {
        style.set_css_text(CONTAINER_STYLE);
    }

    for spec in scatter(PARTICLE_COUNT, &mut rng) {
        let particle = match document.create_element("div") {
            Ok(el) => el,
            Err(_) => continue,
        };
        particle.set_class_name("particle");
        if let Some(style) = dom::style_of(&particle) {
            style.set_css_text(&spec.inline_style());
        }
        _ = container.append_child(&particle);
    }

    _ = hero.append_child(&container);
}
