/// Seconds between the entrance of consecutive items in a list.
pub const STAGGER_SECS: f64 = 0.1;

/// One-shot entrance trigger. Flips to shown the first time its element is
/// visible and stays shown when the element scrolls away again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    shown: bool,
}

impl RevealLatch {
    /// Feeds the current visibility. Returns true only on the call that
    /// reveals the element.
    pub fn observe(&mut self, visible: bool) -> bool {
        let reveals = visible && !self.shown;
        self.shown |= visible;
        reveals
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

/// Entrance delay for the `index`th item of a list.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_first_visible() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_shown());
        assert!(latch.observe(true));
        assert!(latch.is_shown());
    }

    #[test]
    fn test_reveals_once() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_shown());
        assert!(!latch.observe(true));
        assert!(latch.is_shown());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0.0);
        assert_eq!(stagger_delay(1), 0.1);
        assert!((stagger_delay(3) - 0.3).abs() < 1e-12);
    }
}
