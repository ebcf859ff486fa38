pub const BREATHE_STEP: f32 = 0.01;
pub const BREATHE_MIN_SCALE: f32 = 0.95;
pub const BREATHE_MAX_SCALE: f32 = 1.05;

/// Slow whole-scene scale oscillation. Stepped on a fixed timer; the
/// direction flips whenever the scale reaches the edge of the band.
#[derive(Clone, Copy, Debug)]
pub struct Breathing {
    pub scale: f32,
    direction: f32,
}

impl Default for Breathing {
    fn default() -> Self {
        Self {
            scale: 1.0,
            direction: 1.0,
        }
    }
}

impl Breathing {
    /// One timer tick; returns the scale to apply.
    pub fn step(&mut self) -> f32 {
        self.scale += self.direction * BREATHE_STEP;
        if self.scale >= BREATHE_MAX_SCALE || self.scale <= BREATHE_MIN_SCALE {
            self.direction = -self.direction;
        }
        self.scale
    }
}
