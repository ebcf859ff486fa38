use crate::dom;
use web_sys as web;

static LIGHT_THEME_CSS: &str = include_str!("../styles/light-theme.css");

const MOON_ICON: &str = r#"<i class="fas fa-moon"></i>"#;
const MOON_CLASS: &str = "fas fa-moon";
const SUN_CLASS: &str = "fas fa-sun";

const TOGGLE_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; width: 50px; \
    height: 50px; border-radius: 50%; background: linear-gradient(135deg, #667eea, #764ba2); \
    color: white; border: none; cursor: pointer; font-size: 1.2rem; z-index: 1000; \
    transition: all 0.3s ease; box-shadow: 0 4px 15px rgba(0, 0, 0, 0.3);";

/// Floating light/dark toggle. The light theme's rules ride along in a
/// bundled style sheet so the host page doesn't have to carry them.
pub fn install_toggle(document: &web::Document) {
    let button = match document.create_element("button") {
        Ok(el) => el,
        Err(_) => return,
    };
    button.set_inner_html(MOON_ICON);
    button.set_class_name("theme-toggle");
    if let Some(style) = dom::style_of(&button) {
        style.set_css_text(TOGGLE_STYLE);
    }

    let body = match document.body() {
        Some(b) => b,
        None => return,
    };
    let body_toggle = body.clone();
    let button_toggle = button.clone();
    dom::add_click_listener(&button, move || {
        _ = body_toggle.class_list().toggle("light-theme");
        let light = body_toggle.class_list().contains("light-theme");
        if let Some(icon) = button_toggle.query_selector("i").ok().flatten() {
            icon.set_class_name(if light { SUN_CLASS } else { MOON_CLASS });
        }
    });
    _ = body.append_child(&button);

    dom::inject_style(document, LIGHT_THEME_CSS);
}
