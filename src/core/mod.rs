pub mod breathe;
pub mod counter;
pub mod geometry;
pub mod particles;
pub mod ripple;
pub mod validate;
