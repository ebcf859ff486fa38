use rand::Rng;

pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_PALETTE: [&str; 3] = ["#667eea", "#764ba2", "#8b5cf6"];

/// One background particle. Everything is chosen once at creation; motion
/// comes from the shared float keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f32,
    pub color: &'static str,
    pub left_pct: f32,
    pub top_pct: f32,
    pub opacity: f32,
    pub drift_secs: f32,
    pub delay_secs: f32,
}

/// Palette weighting: 40% / 40% / 20% for a unit roll.
pub fn pick_color(roll: f32) -> &'static str {
    if roll < 0.4 {
        PARTICLE_PALETTE[0]
    } else if roll < 0.8 {
        PARTICLE_PALETTE[1]
    } else {
        PARTICLE_PALETTE[2]
    }
}

pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            size_px: rng.gen::<f32>() * 4.0 + 1.0,
            color: pick_color(rng.gen::<f32>()),
            left_pct: rng.gen::<f32>() * 100.0,
            top_pct: rng.gen::<f32>() * 100.0,
            opacity: rng.gen::<f32>() * 0.6 + 0.2,
            drift_secs: rng.gen::<f32>() * 20.0 + 15.0,
            delay_secs: rng.gen::<f32>() * -20.0,
        })
        .collect()
}

impl ParticleSpec {
    pub fn inline_style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; \
             background: radial-gradient(circle, {color}CC 0%, {color}66 100%); \
             border-radius: 50%; left: {left}%; top: {top}%; opacity: {opacity}; \
             animation: float {drift}s linear infinite; animation-delay: {delay}s; \
             box-shadow: 0 0 {glow}px {color}44;",
            size = self.size_px,
            color = self.color,
            left = self.left_pct,
            top = self.top_pct,
            opacity = self.opacity,
            drift = self.drift_secs,
            delay = self.delay_secs,
            glow = self.size_px * 2.0,
        )
    }
}

/// The shared float animation. The final horizontal drift is rolled once
/// per page load, so the whole field leans the same way.
pub fn float_keyframes(drift_px: f32) -> String {
    format!(
        "@keyframes float {{
    0% {{ transform: translateY(100vh) translateX(0); opacity: 0; }}
    10% {{ opacity: 1; }}
    90% {{ opacity: 1; }}
    100% {{ transform: translateY(-100px) translateX({drift_px}px); opacity: 0; }}
}}"
    )
}
