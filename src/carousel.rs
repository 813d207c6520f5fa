//! Scroll-boundary bookkeeping for one horizontal row of cards.

/// Fixed distance (in logical points) a directional control scrolls the row.
pub const SCROLL_STEP: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    current_offset: f32,
    /// Offset requested by a nudge, consumed by the scroll surface on the
    /// next frame. The surface clamps it to its own bounds; no clamping
    /// happens here.
    pending_target: Option<f32>,
}

impl Default for Carousel {
    fn default() -> Self {
        // Assumes overflowing content sitting at the left edge until the
        // first scroll event reports real geometry.
        Self {
            can_scroll_left: false,
            can_scroll_right: true,
            current_offset: 0.0,
            pending_target: None,
        }
    }
}

impl Carousel {
    /// Recompute boundaries from the surface geometry. Called on every
    /// scroll event (every frame in an immediate-mode UI).
    pub fn on_scroll(&mut self, scroll_left: f32, content_width: f32, visible_width: f32) {
        self.current_offset = scroll_left;
        self.can_scroll_left = scroll_left > 0.0;
        self.can_scroll_right = scroll_left < content_width - visible_width - 1.0;
    }

    /// Request a smooth scroll by one step in the given direction.
    pub fn nudge(&mut self, direction: ScrollDirection) {
        let delta = match direction {
            ScrollDirection::Left => -SCROLL_STEP,
            ScrollDirection::Right => SCROLL_STEP,
        };
        self.pending_target = Some(self.current_offset + delta);
    }

    /// Target offset for the scroll surface to apply, one-shot.
    pub fn take_target(&mut self) -> Option<f32> {
        self.pending_target.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_assumes_left_edge_with_overflow() {
        let c = Carousel::default();
        assert!(!c.can_scroll_left);
        assert!(c.can_scroll_right);
    }

    #[test]
    fn at_left_edge_only_right_is_possible() {
        let mut c = Carousel::default();
        c.on_scroll(0.0, 2000.0, 800.0);
        assert!(!c.can_scroll_left);
        assert!(c.can_scroll_right);
    }

    #[test]
    fn right_boundary_is_one_point_inside_the_end() {
        let mut c = Carousel::default();
        // 2000 - 800 - 1 = 1199: at exactly 1199 the row counts as fully
        // scrolled to the right.
        c.on_scroll(1199.0, 2000.0, 800.0);
        assert!(c.can_scroll_left);
        assert!(!c.can_scroll_right);

        c.on_scroll(1198.0, 2000.0, 800.0);
        assert!(c.can_scroll_right);
    }

    #[test]
    fn mid_row_allows_both_directions() {
        let mut c = Carousel::default();
        c.on_scroll(600.0, 2000.0, 800.0);
        assert!(c.can_scroll_left);
        assert!(c.can_scroll_right);
    }

    #[test]
    fn nudge_requests_fixed_step_without_clamping() {
        let mut c = Carousel::default();
        c.on_scroll(100.0, 2000.0, 800.0);
        c.nudge(ScrollDirection::Right);
        assert_eq!(c.take_target(), Some(500.0));
        assert_eq!(c.take_target(), None);

        c.nudge(ScrollDirection::Left);
        // May go negative; the surface clamps, not the controller.
        assert_eq!(c.take_target(), Some(-300.0));
    }
}
