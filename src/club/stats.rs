use std::time::Duration;

/// Total run time of the landing page counter animation.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Number of discrete updates during the animation.
pub const COUNTER_STEPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeroStats {
    pub students: u32,
    pub events: u32,
    pub community: u32,
}

impl HeroStats {
    pub const TARGETS: HeroStats = HeroStats {
        students: 37,
        events: 7,
        community: 0,
    };
}

/// Counters that climb from zero to [`HeroStats::TARGETS`] in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    targets: HeroStats,
}

impl Default for CounterAnimation {
    fn default() -> Self {
        Self::new(HeroStats::TARGETS)
    }
}

impl CounterAnimation {
    pub fn new(targets: HeroStats) -> Self {
        Self { targets }
    }

    /// Completed steps after `elapsed`, capped at [`COUNTER_STEPS`].
    pub fn step(elapsed: Duration) -> u32 {
        let steps = COUNTER_STEPS as u128;
        (elapsed.as_millis() * steps / COUNTER_DURATION.as_millis()).min(steps) as u32
    }

    pub fn values(&self, elapsed: Duration) -> HeroStats {
        let step = Self::step(elapsed);
        if step >= COUNTER_STEPS {
            return self.targets;
        }
        let scale = |target: u32| (target as u64 * step as u64 / COUNTER_STEPS as u64) as u32;
        HeroStats {
            students: scale(self.targets.students),
            events: scale(self.targets.events),
            community: scale(self.targets.community),
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        Self::step(elapsed) >= COUNTER_STEPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let anim = CounterAnimation::default();
        assert_eq!(anim.values(Duration::ZERO), HeroStats::default());
    }

    #[test]
    fn midway_values_are_floored() {
        let anim = CounterAnimation::default();
        // 1000 ms is step 30 of 60.
        let v = anim.values(Duration::from_millis(1000));
        assert_eq!(v.students, 18);
        assert_eq!(v.events, 3);
        assert_eq!(v.community, 0);
        assert!(!anim.is_finished(Duration::from_millis(1000)));
    }

    #[test]
    fn reaches_targets_exactly() {
        let anim = CounterAnimation::default();
        assert_eq!(anim.values(Duration::from_secs(10)), HeroStats::TARGETS);
        assert!(anim.is_finished(COUNTER_DURATION));
    }

    #[test]
    fn last_step_lands_on_full_duration() {
        assert_eq!(CounterAnimation::step(Duration::from_millis(1980)), 59);
        assert_eq!(CounterAnimation::step(Duration::from_millis(1999)), 59);
        assert_eq!(CounterAnimation::step(COUNTER_DURATION), COUNTER_STEPS);

        let anim = CounterAnimation::default();
        assert!(!anim.is_finished(Duration::from_millis(1990)));
        assert_ne!(anim.values(Duration::from_millis(1990)), HeroStats::TARGETS);
        assert_eq!(anim.values(COUNTER_DURATION), HeroStats::TARGETS);
    }

    #[test]
    fn never_decreases() {
        let anim = CounterAnimation::default();
        let mut prev = HeroStats::default();
        for ms in (0..2100).step_by(10) {
            let v = anim.values(Duration::from_millis(ms));
            assert!(v.students >= prev.students && v.events >= prev.events);
            prev = v;
        }
    }
}
