/// Distance and speed below which a spring snaps onto its target.
const REST_DELTA: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 400.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio, never below 1.0 so the spring can't oscillate.
    fn damping_ratio(&self) -> f64 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        (self.damping / critical).max(1.0)
    }

    fn is_usable(&self) -> bool {
        self.stiffness.is_finite()
            && self.mass.is_finite()
            && self.damping.is_finite()
            && self.stiffness > 0.0
            && self.mass > 0.0
    }
}

/// A damped second-order filter chasing `target`.
///
/// Solved analytically per step, so frame length doesn't affect stability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, config: &SpringConfig, dt: f64) {
        if self.is_settled() || dt.is_nan() || dt <= 0.0 {
            return;
        }
        if !config.is_usable() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let omega = config.natural_frequency();
        let zeta = config.damping_ratio();
        let x0 = self.value - self.target;
        let v0 = self.velocity;

        let (x, v) = if zeta == 1.0 {
            let b = v0 + omega * x0;
            let decay = (-omega * dt).exp();
            ((x0 + b * dt) * decay, (v0 - omega * b * dt) * decay)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        if x.abs() < REST_DELTA && v.abs() < REST_DELTA {
            self.value = self.target;
            self.velocity = 0.0;
        } else {
            self.value = self.target + x;
            self.velocity = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_settles_on_target() {
        let config = SpringConfig::default();
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);
        for _ in 0..600 {
            spring.step(&config, FRAME);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value, 10.0);
    }

    #[test]
    fn test_approach_from_rest_is_monotonic() {
        // default damping (20) is under-damped for stiffness 400
        let config = SpringConfig::default();
        let mut spring = Spring::new(15.0);
        spring.set_target(0.0);
        let mut last = spring.value;
        for _ in 0..300 {
            spring.step(&config, FRAME);
            assert!(spring.value <= last, "{} > {}", spring.value, last);
            assert!(spring.value >= 0.0);
            last = spring.value;
        }
    }

    #[test]
    fn test_overdamped_is_monotonic() {
        let config = SpringConfig {
            stiffness: 100.0,
            damping: 80.0,
            mass: 1.0,
        };
        let mut spring = Spring::new(1.0);
        spring.set_target(2.0);
        let mut last = spring.value;
        for _ in 0..600 {
            spring.step(&config, FRAME);
            assert!(spring.value >= last);
            assert!(spring.value <= 2.0);
            last = spring.value;
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_no_jump_on_first_frame() {
        let config = SpringConfig::default();
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);
        spring.step(&config, FRAME);
        assert!(spring.value > 0.0);
        assert!(spring.value < 5.0);
    }

    #[test]
    fn test_zero_and_invalid_dt_are_ignored() {
        let config = SpringConfig::default();
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        spring.step(&config, 0.0);
        spring.step(&config, -1.0);
        spring.step(&config, f64::NAN);
        assert_eq!(spring.value, 0.0);
    }

    #[test]
    fn test_non_finite_target_ignored() {
        let mut spring = Spring::new(3.0);
        spring.set_target(f64::INFINITY);
        assert_eq!(spring.target, 3.0);
    }
}
