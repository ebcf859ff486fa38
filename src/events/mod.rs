mod hover;
mod nav;
mod pointer;
mod scroll;

pub use hover::wire_hover_lifts;
pub use nav::{wire_anchor_scroll, wire_menu};
pub use pointer::arm_interactive_web;
pub use scroll::{wire_hero_parallax, wire_navbar_solidify};
