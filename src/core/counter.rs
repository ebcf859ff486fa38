pub const COUNT_TICK_MS: i32 = 16;
pub const COUNT_DURATION_MS: f64 = 2000.0;

/// Climbs from zero to a target over the count-up duration, rendering as a
/// whole number with a trailing plus the way the stat figures are written.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: f64,
    current: f64,
    increment: f64,
}

impl CountUp {
    pub fn new(target: f64) -> Self {
        let increment = target / (COUNT_DURATION_MS / COUNT_TICK_MS as f64);
        Self {
            target,
            current: 0.0,
            increment,
        }
    }

    /// One timer tick. Clamps at the target and returns true once reached.
    pub fn step(&mut self) -> bool {
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            return true;
        }
        false
    }

    pub fn display(&self) -> String {
        format!("{}+", self.current.floor() as i64)
    }
}

/// Digits of a stat label, e.g. "25+" -> 25. Zero when there are none.
pub fn parse_target(text: &str) -> f64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0.0)
}
