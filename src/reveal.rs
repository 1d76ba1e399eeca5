use std::{collections::HashSet, hash::Hash, time::Duration};

pub const REVEALED_CLASS: &str = "animated";
pub const PROGRESS_ATTRIBUTE: &str = "data-progress";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub name: &'static str,
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    pub stagger: Duration,
    pub progress_bars: bool,
}

pub const TIMELINE: RevealGroup = RevealGroup {
    name: "timeline",
    selector: ".timeline-item",
    threshold: 0.15,
    root_margin: "0px 0px -80px 0px",
    stagger: Duration::from_millis(150),
    progress_bars: false,
};

pub const SEMINARS: RevealGroup = RevealGroup {
    name: "seminars",
    selector: ".seminar-item",
    threshold: 0.15,
    root_margin: "0px 0px -80px 0px",
    stagger: Duration::from_millis(150),
    progress_bars: false,
};

pub const SKILL_BARS: RevealGroup = RevealGroup {
    name: "skill_bars",
    selector: ".skill-progress-bar",
    threshold: 0.5,
    root_margin: "0px",
    stagger: Duration::ZERO,
    progress_bars: true,
};

pub const GENERAL: RevealGroup = RevealGroup {
    name: "general",
    selector: ".animate-on-scroll",
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
    stagger: Duration::ZERO,
    progress_bars: false,
};

/// Groups in claim order: an element matching several selectors joins the first.
pub const GROUPS: [RevealGroup; 4] = [TIMELINE, SEMINARS, SKILL_BARS, GENERAL];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation<K> {
    pub key: K,
    pub intersecting: bool,
    pub progress: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealAction<K> {
    pub key: K,
    pub delay: Duration,
    pub width: Option<String>,
}

#[derive(Debug)]
pub struct RevealTracker<K> {
    group: RevealGroup,
    revealed: HashSet<K>,
    immediate: bool,
}

impl<K: Clone + Eq + Hash> RevealTracker<K> {
    pub fn new(group: RevealGroup) -> Self {
        Self {
            group,
            revealed: HashSet::new(),
            immediate: false,
        }
    }

    /// Drops the stagger cascade, used when the viewer prefers reduced motion.
    pub fn immediate(mut self) -> Self {
        self.immediate = true;
        self
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Processes one observer callback batch.
    ///
    /// Every returned key should be revealed after its delay and then unobserved.
    pub fn process(&mut self, batch: &[Observation<K>]) -> Vec<RevealAction<K>> {
        let mut actions = Vec::new();

        for (index, observation) in batch.iter().enumerate() {
            if !observation.intersecting || self.revealed.contains(&observation.key) {
                continue;
            }

            self.revealed.insert(observation.key.clone());

            let delay = if self.immediate {
                Duration::ZERO
            } else {
                self.group.stagger * index as u32
            };
            let width = if self.group.progress_bars {
                observation.progress.as_deref().and_then(parse_progress)
            } else {
                None
            };

            actions.push(RevealAction {
                key: observation.key.clone(),
                delay,
                width,
            });
        }

        actions
    }
}

/// Normalizes a progress attribute (`"85%"`, `"85"`) into a CSS width.
pub fn parse_progress(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let value = number.parse::<f64>().ok().filter(|value| value.is_finite())?;

    let clamped = value.clamp(0.0, 100.0);
    if clamped.fract() == 0.0 {
        Some(format!("{}%", clamped as u32))
    } else {
        Some(format!("{clamped}%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(key: u32, intersecting: bool) -> Observation<u32> {
        Observation {
            key,
            intersecting,
            progress: None,
        }
    }

    #[test]
    fn reveal_is_one_shot_across_reentries() {
        let mut tracker = RevealTracker::new(GENERAL);

        assert_eq!(tracker.process(&[seen(1, true)]).len(), 1);
        assert!(tracker.process(&[seen(1, false)]).is_empty());
        assert!(tracker.process(&[seen(1, true)]).is_empty());
        assert!(tracker.is_revealed(&1));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut tracker = RevealTracker::new(GENERAL);

        assert!(tracker.process(&[seen(4, false), seen(5, false)]).is_empty());
        assert!(!tracker.is_revealed(&4));
    }

    #[test]
    fn staggered_groups_cascade_by_batch_index() {
        let mut tracker = RevealTracker::new(TIMELINE);

        let actions = tracker.process(&[seen(10, true), seen(11, false), seen(12, true)]);
        let delays: Vec<_> = actions.iter().map(|action| (action.key, action.delay)).collect();

        assert_eq!(
            delays,
            vec![(10, Duration::ZERO), (12, Duration::from_millis(300))]
        );
    }

    #[test]
    fn reduced_motion_reveals_without_delay() {
        let mut tracker = RevealTracker::new(SEMINARS).immediate();

        let actions = tracker.process(&[seen(1, true), seen(2, true), seen(3, true)]);

        assert!(actions.iter().all(|action| action.delay == Duration::ZERO));
    }

    #[test]
    fn progress_bars_carry_target_width() {
        let mut tracker = RevealTracker::new(SKILL_BARS);

        let actions = tracker.process(&[Observation {
            key: 7,
            intersecting: true,
            progress: Some("85%".to_string()),
        }]);

        assert_eq!(actions[0].width.as_deref(), Some("85%"));
    }

    #[test]
    fn general_group_ignores_progress_attribute() {
        let mut tracker = RevealTracker::new(GENERAL);

        let actions = tracker.process(&[Observation {
            key: 1,
            intersecting: true,
            progress: Some("40%".to_string()),
        }]);

        assert_eq!(actions[0].width, None);
    }

    #[test]
    fn progress_values_are_normalized_and_clamped() {
        assert_eq!(parse_progress("90").as_deref(), Some("90%"));
        assert_eq!(parse_progress(" 72.5 % ").as_deref(), Some("72.5%"));
        assert_eq!(parse_progress("140%").as_deref(), Some("100%"));
        assert_eq!(parse_progress("-3").as_deref(), Some("0%"));
        assert_eq!(parse_progress("wide"), None);
    }
}
