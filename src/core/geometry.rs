use glam::Vec2;
use smallvec::SmallVec;

// Scene-local layout of the web graphic (the SVG's own coordinate space)
pub const RADIAL_LINE_COUNT: usize = 8;
pub const RADIAL_STEP_DEG: f32 = 45.0;
pub const HUB: Vec2 = Vec2::new(400.0, 300.0); // anchor the radial lines fan out from

// Radial line response to pointer influence
pub const LINE_BASE_LENGTH: f32 = 200.0;
pub const LINE_LENGTH_SPAN: f32 = 100.0;
pub const LINE_REACH_SPAN: f32 = 50.0; // extra endpoint push at full influence
pub const LINE_OPACITY_BASE: f32 = 0.2;
pub const LINE_OPACITY_SPAN: f32 = 0.3;
pub const LINE_WIDTH_BASE: f32 = 1.0;
pub const LINE_WIDTH_SPAN: f32 = 2.0;

// Connector circle response
pub const CIRCLE_RADIUS_BASE: f32 = 3.0;
pub const CIRCLE_RADIUS_SPAN: f32 = 5.0;
pub const CIRCLE_OPACITY_BASE: f32 = 0.1;
pub const CIRCLE_OPACITY_SPAN: f32 = 0.4;
pub const CIRCLE_DRIFT_SPAN: f32 = 10.0; // per-update center nudge at full influence

// Focal marker response
pub const SPIDER_REST: Vec2 = Vec2::new(380.0, 280.0);
pub const SPIDER_FOLLOW: f32 = 0.1; // fraction of the pointer delta the marker follows
pub const SPIDER_SCALE_SPAN: f32 = 0.3;

// Center glyph and spiral decoration response
pub const CENTER_SCALE_SPAN: f32 = 0.5;
pub const CENTER_OPACITY_BASE: f32 = 0.3;
pub const CENTER_OPACITY_SPAN: f32 = 0.4;
pub const SPIRAL_SCALE_SPAN: f32 = 0.2;
pub const SPIRAL_OPACITY_BASE: f32 = 0.15;
pub const SPIRAL_OPACITY_SPAN: f32 = 0.2;

/// Fixed reference frame of the scene: viewport midpoint and the distance
/// from there to a viewport corner. Captured once when the scene is armed.
#[derive(Clone, Copy, Debug)]
pub struct WebFrame {
    pub center: Vec2,
    pub max_distance: f32,
}

impl WebFrame {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let center = Vec2::new(viewport_width, viewport_height) * 0.5;
        Self {
            center,
            max_distance: center.length(),
        }
    }

    /// Influence of a pointer sample on the scene. The distance is always
    /// inside the closed unit interval, however far the pointer strays.
    #[inline]
    pub fn influence(&self, pointer: Vec2) -> Influence {
        let delta = pointer - self.center;
        let distance = if self.max_distance > 0.0 {
            (delta.length() / self.max_distance).min(1.0)
        } else {
            0.0
        };
        Influence { distance, delta }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Influence {
    pub distance: f32,
    pub delta: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineAttrs {
    pub end: Vec2,
    pub stroke_opacity: f32,
    pub stroke_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleAttrs {
    pub center: Vec2,
    pub radius: f32,
    pub fill_opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiderAttrs {
    pub translate: Vec2,
    pub scale: f32,
    pub rotate_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterAttrs {
    pub scale: f32,
    pub fill_opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralAttrs {
    pub scale: f32,
    pub stroke_opacity: f32,
}

/// Everything one update writes onto the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct WebUpdate {
    pub lines: SmallVec<[LineAttrs; RADIAL_LINE_COUNT]>,
    pub circles: SmallVec<[CircleAttrs; RADIAL_LINE_COUNT]>,
    pub spider: SpiderAttrs,
    pub center: CenterAttrs,
    pub spiral: SpiralAttrs,
}

/// Unit direction of radial element `index`, at 45 degree steps.
#[inline]
pub fn radial_direction(index: usize) -> Vec2 {
    Vec2::from_angle((index as f32) * RADIAL_STEP_DEG.to_radians())
}

/// Mutable scene state. Lines, marker, glyph and spirals are pure functions
/// of the influence; the connector circle centers accumulate drift across
/// updates and are owned here, never read back from the document.
#[derive(Clone, Debug)]
pub struct WebState {
    pub frame: WebFrame,
    circle_centers: SmallVec<[Vec2; RADIAL_LINE_COUNT]>,
}

impl WebState {
    pub fn new(frame: WebFrame, circle_centers: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            frame,
            circle_centers: circle_centers.into_iter().collect(),
        }
    }

    pub fn circle_centers(&self) -> &[Vec2] {
        &self.circle_centers
    }

    /// Full update for a pointer sample in viewport coordinates.
    pub fn update(&mut self, pointer: Vec2) -> WebUpdate {
        let influence = self.frame.influence(pointer);
        self.apply_influence(influence)
    }

    /// Advances the circle drift and computes fresh attributes for every
    /// element of the scene.
    pub fn apply_influence(&mut self, influence: Influence) -> WebUpdate {
        let d = influence.distance;

        let lines = (0..RADIAL_LINE_COUNT)
            .map(|i| {
                let length = LINE_BASE_LENGTH + d * LINE_LENGTH_SPAN;
                let reach = length + d * LINE_REACH_SPAN;
                LineAttrs {
                    end: HUB + radial_direction(i) * reach,
                    stroke_opacity: LINE_OPACITY_BASE + d * LINE_OPACITY_SPAN,
                    stroke_width: LINE_WIDTH_BASE + d * LINE_WIDTH_SPAN,
                }
            })
            .collect();

        for (i, center) in self.circle_centers.iter_mut().enumerate() {
            *center += radial_direction(i) * (d * CIRCLE_DRIFT_SPAN);
        }
        let circles = self
            .circle_centers
            .iter()
            .map(|&center| CircleAttrs {
                center,
                radius: CIRCLE_RADIUS_BASE + d * CIRCLE_RADIUS_SPAN,
                fill_opacity: CIRCLE_OPACITY_BASE + d * CIRCLE_OPACITY_SPAN,
            })
            .collect();

        let spider = SpiderAttrs {
            translate: SPIDER_REST + influence.delta * SPIDER_FOLLOW,
            scale: 1.0 + d * SPIDER_SCALE_SPAN,
            rotate_deg: influence.delta.y.atan2(influence.delta.x).to_degrees(),
        };

        WebUpdate {
            lines,
            circles,
            spider,
            center: CenterAttrs {
                scale: 1.0 + d * CENTER_SCALE_SPAN,
                fill_opacity: CENTER_OPACITY_BASE + d * CENTER_OPACITY_SPAN,
            },
            spiral: SpiralAttrs {
                scale: 1.0 + d * SPIRAL_SCALE_SPAN,
                stroke_opacity: SPIRAL_OPACITY_BASE + d * SPIRAL_OPACITY_SPAN,
            },
        }
    }
}
