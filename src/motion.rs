//! Frame-driven animation state for the interactive widgets.
//!
//! Everything here is plain data advanced by `step` functions, so it runs the
//! same under `cargo test` as it does inside a `requestAnimationFrame` loop.

mod fade;
pub mod marquee;
pub mod particles;
pub mod reveal;
mod spring;
pub mod tilt;

pub use fade::Fade;
pub use spring::{Spring, SpringConfig};

/// Longest frame we simulate; longer gaps (background tabs) are cut short.
pub const MAX_FRAME_SECS: f64 = 0.1;

pub(crate) fn clamp_frame(dt: f64) -> f64 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_SECS)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_frame() {
        assert_eq!(clamp_frame(0.016), 0.016);
        assert_eq!(clamp_frame(3.0), MAX_FRAME_SECS);
        assert_eq!(clamp_frame(-1.0), 0.0);
        assert_eq!(clamp_frame(f64::NAN), 0.0);
    }
}
