pub const DEFAULT_TOP_OFFSET: f64 = 50.0;
pub const DEFAULT_THRESHOLD: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarState {
    AtTop,
    Shown,
    Hidden,
}

impl NavbarState {
    /// Translation applied to the navbar root.
    pub fn transform(self) -> &'static str {
        match self {
            Self::Hidden => "translateY(-100%)",
            Self::AtTop | Self::Shown => "translateY(0)",
        }
    }

    /// Whether the compact "scrolled" styling applies.
    pub fn scrolled(self) -> bool {
        !matches!(self, Self::AtTop)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarTracker {
    state: NavbarState,
    last_y: f64,
    top_offset: f64,
    threshold: f64,
}

impl NavbarTracker {
    pub fn new(initial_y: f64) -> Self {
        Self::with_limits(initial_y, DEFAULT_TOP_OFFSET, DEFAULT_THRESHOLD)
    }

    pub fn with_limits(initial_y: f64, top_offset: f64, threshold: f64) -> Self {
        let state = if initial_y <= top_offset {
            NavbarState::AtTop
        } else {
            NavbarState::Shown
        };

        Self {
            state,
            last_y: initial_y,
            top_offset,
            threshold,
        }
    }

    pub fn state(&self) -> NavbarState {
        self.state
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Feeds one scroll offset and returns the resulting state.
    pub fn observe(&mut self, y: f64) -> NavbarState {
        if y <= self.top_offset {
            self.state = NavbarState::AtTop;
            self.last_y = y;
            return self.state;
        }

        let delta = y - self.last_y;
        self.last_y = y;
        if delta.abs() < self.threshold {
            return self.state;
        }

        if delta > 0.0 {
            self.state = NavbarState::Hidden;
        } else if self.state == NavbarState::Hidden {
            self.state = NavbarState::Shown;
        }

        self.state
    }
}

/// Element id targeted by an in-page link (`"#projects"` -> `"projects"`).
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_top_is_always_at_top() {
        let mut tracker = NavbarTracker::new(400.0);
        tracker.observe(500.0);
        assert_eq!(tracker.state(), NavbarState::Hidden);

        for y in [50.0, 0.0, 30.0, 12.5, 49.0] {
            assert_eq!(tracker.observe(y), NavbarState::AtTop);
        }
    }

    #[test]
    fn initial_state_follows_initial_offset() {
        assert_eq!(NavbarTracker::new(0.0).state(), NavbarState::AtTop);
        assert_eq!(NavbarTracker::new(50.0).state(), NavbarState::AtTop);
        assert_eq!(NavbarTracker::new(800.0).state(), NavbarState::Shown);
    }

    #[test]
    fn jitter_leaves_state_unchanged() {
        let mut tracker = NavbarTracker::new(300.0);
        let before = tracker.state();

        for y in [305.0, 301.0, 309.9, 300.5, 292.0] {
            assert_eq!(tracker.observe(y), before);
        }
        assert_eq!(tracker.last_y(), 292.0);
    }

    #[test]
    fn slow_steady_scroll_never_flips_state() {
        let mut tracker = NavbarTracker::new(300.0);

        for step in 1..=50 {
            let y = 300.0 + 4.0 * f64::from(step);
            assert_eq!(tracker.observe(y), NavbarState::Shown);
            assert_eq!(tracker.last_y(), y);
        }

        let mut hidden = NavbarTracker::new(300.0);
        hidden.observe(400.0);
        for step in 1..=20 {
            let y = 400.0 - 9.0 * f64::from(step);
            assert_eq!(hidden.observe(y), NavbarState::Hidden);
        }
    }

    #[test]
    fn delta_equal_to_threshold_transitions() {
        let mut tracker = NavbarTracker::new(300.0);

        assert_eq!(tracker.observe(309.75), NavbarState::Shown);
        assert_eq!(tracker.observe(319.75), NavbarState::Hidden);
        assert_eq!(tracker.observe(310.0), NavbarState::Hidden);
        assert_eq!(tracker.observe(300.0), NavbarState::Shown);
    }

    #[test]
    fn downward_hides_and_upward_shows() {
        let mut tracker = NavbarTracker::new(0.0);

        assert_eq!(tracker.observe(120.0), NavbarState::Hidden);
        assert_eq!(tracker.observe(400.0), NavbarState::Hidden);
        assert_eq!(tracker.observe(380.0), NavbarState::Shown);
        assert_eq!(tracker.observe(200.0), NavbarState::Shown);
        assert_eq!(tracker.observe(260.0), NavbarState::Hidden);
    }

    #[test]
    fn single_event_never_flips_twice() {
        let mut tracker = NavbarTracker::new(200.0);
        tracker.observe(300.0);

        let before = tracker.state();
        let after = tracker.observe(150.0);

        assert_eq!(before, NavbarState::Hidden);
        assert_eq!(after, NavbarState::Shown);
    }

    #[test]
    fn hidden_state_translates_off_screen() {
        assert_eq!(NavbarState::Hidden.transform(), "translateY(-100%)");
        assert_eq!(NavbarState::Shown.transform(), "translateY(0)");
        assert!(!NavbarState::AtTop.scrolled());
        assert!(NavbarState::Shown.scrolled());
    }

    #[test]
    fn anchor_targets_require_a_fragment() {
        assert_eq!(anchor_target_id("#projects"), Some("projects"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("/resume.pdf"), None);
    }
}
