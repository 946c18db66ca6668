use super::{clamp_frame, Fade, Spring, SpringConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Rotation scale in degrees; the offset from the centre is taken as a
    /// fraction of the full width/height, so the edges reach `max_tilt / 2`.
    pub max_tilt: f64,
    pub scale: f64,
    pub glare: bool,
    pub max_glare_opacity: f64,
    pub perspective: f64,
    pub spring: SpringConfig,
    /// Seconds for the glare to fade fully in or out.
    pub glare_fade: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt: 15.0,
            scale: 1.05,
            glare: true,
            max_glare_opacity: 0.5,
            perspective: 1000.0,
            spring: SpringConfig::default(),
            glare_fade: 0.3,
        }
    }
}

impl TiltConfig {
    fn glare_rate(&self) -> f64 {
        if self.glare_fade > 0.0 {
            self.max_glare_opacity / self.glare_fade
        } else {
            f64::INFINITY
        }
    }
}

/// Pointer position relative to the element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerSample {
    fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltInput {
    Move(PointerSample),
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTarget {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    /// Glare centre as percentages of width and height.
    pub glare_x: f64,
    pub glare_y: f64,
}

impl TiltTarget {
    pub const NEUTRAL: TiltTarget = TiltTarget {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        glare_x: 50.0,
        glare_y: 50.0,
    };
}

/// Maps a pointer sample to the rotation it should settle at.
///
/// Returns `None` for degenerate rects so the caller can skip the event.
pub fn target_for(config: &TiltConfig, sample: PointerSample) -> Option<TiltTarget> {
    if !sample.is_valid() {
        return None;
    }
    let PointerSample {
        x,
        y,
        width,
        height,
    } = sample;
    let x = x.clamp(0.0, width);
    let y = y.clamp(0.0, height);

    Some(TiltTarget {
        rotate_x: -((y - height / 2.0) / height) * config.max_tilt,
        rotate_y: ((x - width / 2.0) / width) * config.max_tilt,
        scale: config.scale,
        glare_x: x / width * 100.0,
        glare_y: y / height * 100.0,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltState {
    pub rotate_x: Spring,
    pub rotate_y: Spring,
    pub scale: Spring,
    pub glare_x: f64,
    pub glare_y: f64,
    pub glare_opacity: Fade,
}

impl Default for TiltState {
    fn default() -> Self {
        Self {
            rotate_x: Spring::new(0.0),
            rotate_y: Spring::new(0.0),
            scale: Spring::new(1.0),
            glare_x: TiltTarget::NEUTRAL.glare_x,
            glare_y: TiltTarget::NEUTRAL.glare_y,
            glare_opacity: Fade::new(0.0),
        }
    }
}

impl TiltState {
    pub fn apply(&mut self, config: &TiltConfig, input: TiltInput) {
        match input {
            TiltInput::Move(sample) => {
                let Some(target) = target_for(config, sample) else {
                    return;
                };
                self.rotate_x.set_target(target.rotate_x);
                self.rotate_y.set_target(target.rotate_y);
                self.scale.set_target(target.scale);
                if config.glare {
                    self.glare_x = target.glare_x;
                    self.glare_y = target.glare_y;
                    self.glare_opacity.set_target(config.max_glare_opacity);
                }
            }
            TiltInput::Leave => {
                self.rotate_x.set_target(0.0);
                self.rotate_y.set_target(0.0);
                self.scale.set_target(1.0);
                self.glare_opacity.set_target(0.0);
            }
        }
    }

    pub fn advance(&mut self, config: &TiltConfig, dt: f64) {
        let dt = clamp_frame(dt);
        self.rotate_x.step(&config.spring, dt);
        self.rotate_y.step(&config.spring, dt);
        self.scale.step(&config.spring, dt);
        self.glare_opacity.step(config.glare_rate(), dt);
    }

    pub fn is_settled(&self) -> bool {
        self.rotate_x.is_settled()
            && self.rotate_y.is_settled()
            && self.scale.is_settled()
            && self.glare_opacity.is_settled()
    }

    pub fn transform(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
            config.perspective, self.rotate_x.value, self.rotate_y.value, self.scale.value
        )
    }

    pub fn glare_style(&self) -> String {
        format!(
            "background: radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,0.8) 0%, transparent 80%); opacity: {:.3};",
            self.glare_x, self.glare_y, self.glare_opacity.value
        )
    }
}

/// Applies `input` (if any) and advances the springs by `dt` seconds.
pub fn step(
    mut state: TiltState,
    config: &TiltConfig,
    dt: f64,
    input: Option<TiltInput>,
) -> TiltState {
    if let Some(input) = input {
        state.apply(config, input);
    }
    state.advance(config, dt);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn sample(x: f64, y: f64) -> PointerSample {
        PointerSample {
            x,
            y,
            width: 200.0,
            height: 100.0,
        }
    }

    fn config(max_tilt: f64) -> TiltConfig {
        TiltConfig {
            max_tilt,
            ..TiltConfig::default()
        }
    }

    #[test]
    fn test_top_left_corner() {
        let target = target_for(&config(10.0), sample(0.0, 0.0)).unwrap();
        assert_eq!(target.rotate_y, -5.0);
        assert_eq!(target.rotate_x, 5.0);
        assert_eq!(target.glare_x, 0.0);
        assert_eq!(target.glare_y, 0.0);
    }

    #[test]
    fn test_center_is_flat() {
        let target = target_for(&config(10.0), sample(100.0, 50.0)).unwrap();
        assert_eq!(target.rotate_x, 0.0);
        assert_eq!(target.rotate_y, 0.0);
        assert_eq!(target.glare_x, 50.0);
        assert_eq!(target.glare_y, 50.0);
    }

    #[test]
    fn test_rotation_bounded_by_max_tilt() {
        let cfg = config(12.0);
        for xi in 1..40 {
            for yi in 1..20 {
                let t = target_for(&cfg, sample(xi as f64 * 5.0, yi as f64 * 5.0)).unwrap();
                assert!(t.rotate_x.abs() <= 6.0);
                assert!(t.rotate_y.abs() <= 6.0);
            }
        }
        // outside the element is clamped to the edge
        let t = target_for(&cfg, sample(-50.0, 500.0)).unwrap();
        assert_eq!(t.rotate_y, -6.0);
        assert_eq!(t.rotate_x, -6.0);
    }

    #[test]
    fn test_offset_is_fraction_of_full_size() {
        let t = target_for(&config(10.0), sample(150.0, 25.0)).unwrap();
        assert_eq!(t.rotate_y, 2.5);
        assert_eq!(t.rotate_x, 2.5);
        assert_eq!(t.glare_x, 75.0);
        assert_eq!(t.glare_y, 25.0);
    }

    #[test]
    fn test_pointer_near_top_tilts_top_back() {
        let t = target_for(&config(10.0), sample(100.0, 10.0)).unwrap();
        assert!(t.rotate_x > 0.0);
        assert_eq!(t.rotate_y, 0.0);
    }

    #[test]
    fn test_degenerate_rect_is_ignored() {
        let cfg = TiltConfig::default();
        let before = TiltState::default();
        let bad = [
            PointerSample {
                x: 1.0,
                y: 1.0,
                width: 0.0,
                height: 100.0,
            },
            PointerSample {
                x: f64::NAN,
                y: 1.0,
                width: 100.0,
                height: 100.0,
            },
            PointerSample {
                x: 1.0,
                y: 1.0,
                width: 100.0,
                height: -4.0,
            },
        ];
        for sample in bad {
            let after = step(before, &cfg, 0.0, Some(TiltInput::Move(sample)));
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_move_does_not_snap() {
        let cfg = config(10.0);
        let state = step(
            TiltState::default(),
            &cfg,
            FRAME,
            Some(TiltInput::Move(sample(0.0, 0.0))),
        );
        assert!(state.rotate_y.value < 0.0);
        assert!(state.rotate_y.value > -5.0);
        assert_eq!(state.rotate_y.target, -5.0);
    }

    #[test]
    fn test_leave_returns_to_neutral_smoothly() {
        let cfg = config(10.0);
        let mut state = step(
            TiltState::default(),
            &cfg,
            0.0,
            Some(TiltInput::Move(sample(200.0, 100.0))),
        );
        while !state.is_settled() {
            state = step(state, &cfg, FRAME, None);
        }
        assert_eq!(state.scale.value, cfg.scale);
        assert_eq!(state.glare_opacity.value, cfg.max_glare_opacity);

        state = step(state, &cfg, FRAME, Some(TiltInput::Leave));
        let (mut last_x, mut last_y, mut last_s) =
            (state.rotate_x.value, state.rotate_y.value, state.scale.value);
        assert!(last_y > 0.0, "leave must not snap to neutral");
        for _ in 0..600 {
            state = step(state, &cfg, FRAME, None);
            assert!(state.rotate_x.value.abs() <= last_x.abs());
            assert!(state.rotate_y.value.abs() <= last_y.abs());
            assert!(state.scale.value <= last_s);
            assert!(state.scale.value >= 1.0);
            last_x = state.rotate_x.value;
            last_y = state.rotate_y.value;
            last_s = state.scale.value;
        }
        assert_eq!(state.rotate_x.value, 0.0);
        assert_eq!(state.rotate_y.value, 0.0);
        assert_eq!(state.scale.value, 1.0);
        assert_eq!(state.glare_opacity.value, 0.0);
    }

    #[test]
    fn test_glare_disabled() {
        let cfg = TiltConfig {
            glare: false,
            ..TiltConfig::default()
        };
        let state = step(
            TiltState::default(),
            &cfg,
            1.0,
            Some(TiltInput::Move(sample(20.0, 20.0))),
        );
        assert_eq!(state.glare_opacity.value, 0.0);
        assert_eq!(state.glare_x, 50.0);
    }

    #[test]
    fn test_css_output() {
        let cfg = TiltConfig::default();
        let state = TiltState::default();
        assert_eq!(
            state.transform(&cfg),
            "perspective(1000px) rotateX(0.000deg) rotateY(0.000deg) scale(1.0000)"
        );
        assert!(state.glare_style().contains("circle at 50.0% 50.0%"));
        assert!(state.glare_style().ends_with("opacity: 0.000;"));
    }
}
