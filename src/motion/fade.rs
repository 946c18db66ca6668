/// Linear ramp toward a target value, moving at most `rate` units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub value: f64,
    pub target: f64,
}

impl Fade {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    pub fn step(&mut self, rate: f64, dt: f64) {
        if self.is_settled() || dt.is_nan() || dt <= 0.0 {
            return;
        }
        if !rate.is_finite() || rate <= 0.0 {
            self.value = self.target;
            return;
        }
        let max_move = rate * dt;
        let diff = self.target - self.value;
        if diff.abs() <= max_move {
            self.value = self.target;
        } else {
            self.value += max_move.copysign(diff);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramps_linearly() {
        let mut fade = Fade::new(0.0);
        fade.set_target(0.5);
        fade.step(1.0, 0.1);
        assert!((fade.value - 0.1).abs() < 1e-9);
        fade.step(1.0, 0.1);
        assert!((fade.value - 0.2).abs() < 1e-9);
        fade.step(1.0, 1.0);
        assert_eq!(fade.value, 0.5);
        assert!(fade.is_settled());
    }

    #[test]
    fn test_ramps_down() {
        let mut fade = Fade::new(0.5);
        fade.set_target(0.0);
        fade.step(2.0, 0.1);
        assert!((fade.value - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate_snaps() {
        let mut fade = Fade::new(0.0);
        fade.set_target(1.0);
        fade.step(0.0, 0.016);
        assert_eq!(fade.value, 1.0);
    }
}
