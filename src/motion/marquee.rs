use super::clamp_frame;

/// Number of back-to-back copies of the item list in the strip.
pub const COPIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    /// Seconds for the strip to travel one copy width.
    pub speed: f64,
    pub pause_on_hover: bool,
    pub drag_left: f64,
    pub drag_right: f64,
    /// Layout width of a single item including its gap.
    pub item_span: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: 30.0,
            pause_on_hover: true,
            drag_left: -1000.0,
            drag_right: 0.0,
            item_span: 100.0,
        }
    }
}

impl MarqueeConfig {
    pub fn copy_width(&self, item_count: usize) -> f64 {
        self.item_span * item_count as f64
    }

    fn velocity(&self, item_count: usize) -> f64 {
        if self.speed.is_finite() && self.speed > 0.0 {
            self.copy_width(item_count) / self.speed
        } else {
            0.0
        }
    }
}

/// The input sequence repeated `COPIES` times.
pub fn displayed<T: Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .cycle()
        .take(items.len() * COPIES)
        .cloned()
        .collect()
}

/// Folds `offset` into `(-width, 0]`.
pub fn wrap_offset(offset: f64, width: f64) -> f64 {
    if width <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    let r = offset.rem_euclid(width);
    if r == 0.0 {
        0.0
    } else {
        r - width
    }
}

/// Indices into the input list of the items a viewport of `viewport`
/// units shows when the strip sits at `offset`, left to right.
pub fn visible_indices(offset: f64, item_count: usize, item_span: f64, viewport: f64) -> Vec<usize> {
    if item_count == 0 || item_span <= 0.0 {
        return Vec::new();
    }
    let total = item_count * COPIES;
    let left = (-offset).max(0.0);
    let first = (left / item_span).floor() as usize;
    let last = (((left + viewport) / item_span).ceil() as usize).min(total);
    (first.min(total)..last).map(|i| i % item_count).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarqueeInput {
    PointerEnter,
    PointerLeave,
    DragStart { pointer_x: f64 },
    DragMove { pointer_x: f64 },
    DragEnd,
    ItemEnter(usize),
    ItemLeave(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin_pointer: f64,
    origin_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarqueeState {
    pub offset: f64,
    pub hovered: bool,
    pub hovered_item: Option<usize>,
    drag: Option<Drag>,
}

impl MarqueeState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_paused(&self, config: &MarqueeConfig) -> bool {
        self.is_dragging() || (config.pause_on_hover && self.hovered)
    }

    pub fn apply(&mut self, config: &MarqueeConfig, input: MarqueeInput) {
        match input {
            MarqueeInput::PointerEnter => self.hovered = true,
            MarqueeInput::PointerLeave => {
                self.hovered = false;
                self.hovered_item = None;
            }
            MarqueeInput::DragStart { pointer_x } => {
                if pointer_x.is_finite() {
                    self.drag = Some(Drag {
                        origin_pointer: pointer_x,
                        origin_offset: self.offset,
                    });
                }
            }
            MarqueeInput::DragMove { pointer_x } => {
                let Some(drag) = self.drag else {
                    return;
                };
                if !pointer_x.is_finite() {
                    return;
                }
                // widen the limits so grabbing outside them doesn't jump
                let lo = config.drag_left.min(drag.origin_offset);
                let hi = config.drag_right.max(drag.origin_offset);
                self.offset =
                    (drag.origin_offset + pointer_x - drag.origin_pointer).clamp(lo, hi);
            }
            MarqueeInput::DragEnd => self.drag = None,
            MarqueeInput::ItemEnter(index) => self.hovered_item = Some(index),
            MarqueeInput::ItemLeave(index) => {
                if self.hovered_item == Some(index) {
                    self.hovered_item = None;
                }
            }
        }
    }

    pub fn advance(&mut self, config: &MarqueeConfig, item_count: usize, dt: f64) {
        if item_count == 0 {
            self.offset = 0.0;
            return;
        }
        if self.is_paused(config) {
            return;
        }
        let dt = clamp_frame(dt);
        if dt == 0.0 {
            return;
        }
        let width = config.copy_width(item_count);
        self.offset = wrap_offset(self.offset - config.velocity(item_count) * dt, width);
    }

    pub fn transform(&self) -> String {
        format!("translateX({:.2}px)", self.offset)
    }
}

/// Applies `input` (if any) and advances the loop by `dt` seconds.
pub fn step(
    mut state: MarqueeState,
    config: &MarqueeConfig,
    item_count: usize,
    dt: f64,
    input: Option<MarqueeInput>,
) -> MarqueeState {
    if let Some(input) = input {
        state.apply(config, input);
    }
    state.advance(config, item_count, dt);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn config() -> MarqueeConfig {
        MarqueeConfig {
            speed: 10.0,
            ..MarqueeConfig::default()
        }
    }

    #[test]
    fn test_displayed_triples_in_order() {
        let items = ["a", "b", "a"];
        let shown = displayed(&items);
        assert_eq!(shown, vec!["a", "b", "a", "a", "b", "a", "a", "b", "a"]);
        assert!(displayed::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_copy_width_and_velocity() {
        let cfg = config();
        assert_eq!(cfg.copy_width(11), 1100.0);
        assert_eq!(cfg.velocity(11), 110.0);
    }

    #[test]
    fn test_moves_left_linearly() {
        let cfg = config();
        let state = step(MarqueeState::default(), &cfg, 5, 0.1, None);
        // 500 units in 10s
        assert!((state.offset - -5.0).abs() < 1e-9);
        let state = step(state, &cfg, 5, 0.1, None);
        assert!((state.offset - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_loop_wraps_to_start() {
        let cfg = config();
        let mut state = MarqueeState::default();
        // one full loop in 10s, 100ms at a time
        for _ in 0..100 {
            state = step(state, &cfg, 4, 0.1, None);
            assert!(state.offset <= 0.0);
            assert!(state.offset > -400.0);
        }
        assert!(state.offset.abs() < 1e-6 || (state.offset + 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(0.0, 100.0), 0.0);
        assert_eq!(wrap_offset(-100.0, 100.0), 0.0);
        assert_eq!(wrap_offset(-150.0, 100.0), -50.0);
        assert_eq!(wrap_offset(-40.0, 100.0), -40.0);
        assert_eq!(wrap_offset(-40.0, 0.0), 0.0);
    }

    #[test]
    fn test_seamless_loop_content() {
        let cfg = MarqueeConfig::default();
        let n = 11;
        let width = cfg.copy_width(n);
        for viewport in [250.0, 640.0, 1100.0] {
            let at_start = visible_indices(0.0, n, cfg.item_span, viewport);
            let at_wrap = visible_indices(-width, n, cfg.item_span, viewport);
            assert!(!at_start.is_empty());
            assert_eq!(at_start, at_wrap);
        }
        let mid = visible_indices(-250.0, n, cfg.item_span, 300.0);
        assert_eq!(mid, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_pause_on_hover() {
        let cfg = config();
        let state = step(MarqueeState::default(), &cfg, 5, 1.0 / 20.0, None);
        let frozen = state.offset;
        let state = step(state, &cfg, 5, FRAME, Some(MarqueeInput::PointerEnter));
        let state = step(state, &cfg, 5, FRAME, None);
        assert_eq!(state.offset, frozen);

        let state = step(state, &cfg, 5, 0.0, Some(MarqueeInput::PointerLeave));
        assert_eq!(state.offset, frozen);
        let state = step(state, &cfg, 5, 0.01, None);
        assert!((state.offset - (frozen - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_hover_without_pause() {
        let cfg = MarqueeConfig {
            pause_on_hover: false,
            ..config()
        };
        let state = step(
            MarqueeState::default(),
            &cfg,
            5,
            0.1,
            Some(MarqueeInput::PointerEnter),
        );
        assert!(state.hovered);
        assert!(state.offset < 0.0);
    }

    #[test]
    fn test_drag_tracks_pointer_and_resumes_from_release() {
        let cfg = config();
        let mut state = step(MarqueeState::default(), &cfg, 5, 0.1, None);
        let start = state.offset;

        state.apply(&cfg, MarqueeInput::DragStart { pointer_x: 300.0 });
        state.apply(&cfg, MarqueeInput::DragMove { pointer_x: 180.0 });
        assert_eq!(state.offset, start - 120.0);

        // auto motion is suspended while dragging
        let state = step(state, &cfg, 5, 0.5, None);
        assert_eq!(state.offset, start - 120.0);

        let released = state.offset;
        let state = step(state, &cfg, 5, 0.0, Some(MarqueeInput::DragEnd));
        assert_eq!(state.offset, released);
        let state = step(state, &cfg, 5, FRAME, None);
        assert!(state.offset < released);
        assert!(released - state.offset < 1.0);
    }

    #[test]
    fn test_drag_respects_limits() {
        let cfg = config();
        let mut state = MarqueeState::default();
        state.apply(&cfg, MarqueeInput::DragStart { pointer_x: 0.0 });
        state.apply(&cfg, MarqueeInput::DragMove { pointer_x: 400.0 });
        assert_eq!(state.offset, 0.0);
        state.apply(&cfg, MarqueeInput::DragMove { pointer_x: -5000.0 });
        assert_eq!(state.offset, -1000.0);
    }

    #[test]
    fn test_drag_move_without_start_is_ignored() {
        let cfg = config();
        let mut state = MarqueeState::default();
        state.apply(&cfg, MarqueeInput::DragMove { pointer_x: -50.0 });
        assert_eq!(state.offset, 0.0);
    }

    #[test]
    fn test_item_hover_tracking() {
        let cfg = config();
        let mut state = MarqueeState::default();
        state.apply(&cfg, MarqueeInput::ItemEnter(7));
        assert_eq!(state.hovered_item, Some(7));
        state.apply(&cfg, MarqueeInput::ItemLeave(3));
        assert_eq!(state.hovered_item, Some(7));
        state.apply(&cfg, MarqueeInput::ItemEnter(8));
        state.apply(&cfg, MarqueeInput::ItemLeave(8));
        assert_eq!(state.hovered_item, None);

        state.apply(&cfg, MarqueeInput::ItemEnter(2));
        state.apply(&cfg, MarqueeInput::PointerLeave);
        assert_eq!(state.hovered_item, None);
    }

    #[test]
    fn test_empty_list_never_moves() {
        let cfg = config();
        let state = step(MarqueeState::default(), &cfg, 0, 1.0, None);
        assert_eq!(state.offset, 0.0);
        assert!(visible_indices(0.0, 0, cfg.item_span, 500.0).is_empty());
    }
}
