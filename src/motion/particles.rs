/// One floating dot in the background field. Positions are percentages of
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
}

// R2 low-discrepancy sequence constants (1/g and 1/g^2 for the plastic number g)
const A1: f64 = 0.754_877_666_246_692_7;
const A2: f64 = 0.569_840_290_998_053_3;
const GOLDEN: f64 = 0.618_033_988_749_895;

/// Evenly spread particle layout. Deterministic so server and browser render
/// the same markup.
pub fn particle_field(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let n = i as f64;
            let jitter = (0.5 + GOLDEN * n).fract();
            Particle {
                x: (0.5 + A1 * n).fract() * 100.0,
                y: (0.5 + A2 * n).fract() * 100.0,
                size: 1.0 + jitter * 3.0,
                duration: 12.0 + jitter * 18.0,
                delay: -(((0.25 + A1 * A2 * n).fract()) * 20.0),
                opacity: 0.2 + jitter * 0.5,
            }
        })
        .collect()
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
            self.x, self.y, self.size, self.size, self.opacity, self.duration, self.delay
        )
    }
}
