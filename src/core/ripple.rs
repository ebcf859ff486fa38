use glam::Vec2;

pub const RIPPLE_STEP: f32 = 5.0; // radius growth per animation frame
pub const RIPPLE_MAX_RADIUS: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RipplePhase {
    Growing,
    Done,
}

/// Expanding click ripple. Stepped once per animation frame; when it reports
/// `Done` the driver removes its element and stops.
#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    pub origin: Vec2,
    pub radius: f32,
}

impl Ripple {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            radius: 0.0,
        }
    }

    pub fn step(&mut self) -> RipplePhase {
        self.radius += RIPPLE_STEP;
        self.phase()
    }

    pub fn phase(&self) -> RipplePhase {
        if self.radius < RIPPLE_MAX_RADIUS {
            RipplePhase::Growing
        } else {
            RipplePhase::Done
        }
    }
}
