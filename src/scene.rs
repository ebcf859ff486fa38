use crate::core::geometry::{
    CenterAttrs, CircleAttrs, LineAttrs, SpiderAttrs, SpiralAttrs, WebUpdate,
};
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// The SVG scene the pointer drives. Elements are located once when the
/// scene is armed; every update mutates their attributes and inline styles
/// in place. Only ripples are created and removed at runtime.
pub struct WebScene {
    pub root: web::Element,
    lines: Vec<web::Element>,
    circles: Vec<web::Element>,
    spider: Option<web::Element>,
    center: Option<web::Element>,
    spirals: Vec<web::Element>,
}

impl WebScene {
    pub fn locate(document: &web::Document) -> Option<Self> {
        let root = dom::select(document, ".spider-web")?;
        Some(Self {
            lines: dom::select_all(document, ".web-line"),
            circles: dom::select_all(document, ".web-circle"),
            spider: dom::select(document, ".spider"),
            center: dom::select(document, ".web-center"),
            spirals: dom::select_all(document, ".web-spiral-line"),
            root,
        })
    }

    /// Starting connector circle centers, read from the markup once.
    /// Missing or unparsable coordinates count as zero.
    pub fn circle_centers(&self) -> Vec<Vec2> {
        self.circles
            .iter()
            .map(|el| Vec2::new(attr_or_zero(el, "cx"), attr_or_zero(el, "cy")))
            .collect()
    }

    pub fn apply(&self, update: &WebUpdate) {
        for (el, attrs) in self.lines.iter().zip(&update.lines) {
            apply_line(el, attrs);
        }
        for (el, attrs) in self.circles.iter().zip(&update.circles) {
            apply_circle(el, attrs);
        }
        if let Some(spider) = &self.spider {
            apply_spider(spider, &update.spider);
        }
        if let Some(center) = &self.center {
            apply_center(center, &update.center);
        }
        for spiral in &self.spirals {
            apply_spiral(spiral, &update.spiral);
        }
    }

    /// Creates a ripple circle at scene-local coordinates and hands it back
    /// for the frame driver to grow.
    pub fn spawn_ripple(&self, origin: Vec2) -> Option<web::Element> {
        let document = self.root.owner_document()?;
        let ripple = dom::create_svg_element(&document, "circle")?;
        _ = ripple.set_attribute("cx", &origin.x.to_string());
        _ = ripple.set_attribute("cy", &origin.y.to_string());
        _ = ripple.set_attribute("r", "0");
        _ = ripple.set_attribute("fill", "rgba(255, 255, 255, 0.3)");
        _ = ripple.class_list().add_1("ripple-effect");
        self.root.append_child(&ripple).ok()?;
        Some(ripple)
    }

    /// Whole-scene breathing transform.
    pub fn set_breathe_scale(&self, scale: f32) {
        if let Some(style) = dom::style_of(&self.root) {
            _ = style.set_property("transform", &format!("scale({scale})"));
        }
    }
}

fn attr_or_zero(el: &web::Element, name: &str) -> f32 {
    el.get_attribute(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0)
}

fn apply_line(el: &web::Element, attrs: &LineAttrs) {
    _ = el.set_attribute("x2", &attrs.end.x.to_string());
    _ = el.set_attribute("y2", &attrs.end.y.to_string());
    if let Some(style) = dom::style_of(el) {
        _ = style.set_property("stroke-opacity", &attrs.stroke_opacity.to_string());
        _ = style.set_property("stroke-width", &attrs.stroke_width.to_string());
    }
}

fn apply_circle(el: &web::Element, attrs: &CircleAttrs) {
    _ = el.set_attribute("r", &attrs.radius.to_string());
    _ = el.set_attribute("cx", &attrs.center.x.to_string());
    _ = el.set_attribute("cy", &attrs.center.y.to_string());
    if let Some(style) = dom::style_of(el) {
        _ = style.set_property("fill-opacity", &attrs.fill_opacity.to_string());
    }
}

fn apply_spider(el: &web::Element, attrs: &SpiderAttrs) {
    if let Some(style) = dom::style_of(el) {
        let transform = format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            attrs.translate.x, attrs.translate.y, attrs.scale, attrs.rotate_deg
        );
        _ = style.set_property("transform", &transform);
    }
}

fn apply_center(el: &web::Element, attrs: &CenterAttrs) {
    if let Some(style) = dom::style_of(el) {
        _ = style.set_property("transform", &format!("scale({})", attrs.scale));
        _ = style.set_property("fill-opacity", &attrs.fill_opacity.to_string());
    }
}

fn apply_spiral(el: &web::Element, attrs: &SpiralAttrs) {
    if let Some(style) = dom::style_of(el) {
        _ = style.set_property("transform", &format!("scale({})", attrs.scale));
        _ = style.set_property("stroke-opacity", &attrs.stroke_opacity.to_string());
    }
}
