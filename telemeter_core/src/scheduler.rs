//! Per-tick transmission gating.

use crate::config::ReportPolicy;
use crate::util::MINS_PER_HOUR;

/// Wall-clock-of-day snapshot passed into the scheduler each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Scheduler phase. `Reporting` lasts for the duration of one transmission
/// attempt; the node returns to `Idle` unconditionally afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Reporting,
}

/// Decides, once per tick, whether to transmit.
///
/// Grid policy: fire when `seconds == 0 && minutes % Q == 0`, which aligns
/// independently clocked nodes onto a shared grid. Interval policy: fire
/// when whole seconds since boot/sync hit a multiple of T. Either way a slot
/// key deduplicates re-evaluations inside the same satisfying instant, so a
/// report fires at most once per quantum.
#[derive(Debug)]
pub struct ReportScheduler {
    policy: ReportPolicy,
    state: SchedulerState,
    last_slot: Option<u64>,
}

impl ReportScheduler {
    pub fn new(policy: ReportPolicy) -> Self {
        Self {
            policy,
            state: SchedulerState::Idle,
            last_slot: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn policy(&self) -> ReportPolicy {
        self.policy
    }

    /// Evaluate the configured predicate for this tick. A `true` return
    /// moves the scheduler to `Reporting`; the caller must `complete()` it
    /// after the transmission attempt, whatever the outcome.
    pub fn due(&mut self, wall: WallTime, elapsed_s: u64) -> bool {
        let slot = match self.policy {
            ReportPolicy::Grid { quantum_min } => {
                if wall.seconds != 0 || wall.minutes % quantum_min.max(1) != 0 {
                    return false;
                }
                u64::from(wall.hours) * u64::from(MINS_PER_HOUR) + u64::from(wall.minutes)
            }
            ReportPolicy::Interval { period_s } => {
                let period = u64::from(period_s.max(1));
                if elapsed_s % period != 0 {
                    return false;
                }
                elapsed_s / period
            }
        };
        if self.last_slot == Some(slot) {
            return false;
        }
        self.last_slot = Some(slot);
        self.state = SchedulerState::Reporting;
        true
    }

    /// Return to `Idle`. There is no same-tick retry; the next opportunity
    /// is the next tick satisfying the predicate.
    pub fn complete(&mut self) {
        self.state = SchedulerState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(h: u8, m: u8, s: u8) -> WallTime {
        WallTime {
            hours: h,
            minutes: m,
            seconds: s,
        }
    }

    #[test]
    fn grid_fires_only_on_quantum_boundary() {
        let mut sched = ReportScheduler::new(ReportPolicy::Grid { quantum_min: 15 });
        assert!(!sched.due(wall(10, 14, 0), 0));
        assert!(!sched.due(wall(10, 15, 30), 1));
        assert!(sched.due(wall(10, 15, 0), 2));
        assert_eq!(sched.state(), SchedulerState::Reporting);
        sched.complete();
        assert_eq!(sched.state(), SchedulerState::Idle);
    }

    #[test]
    fn grid_dedupes_within_the_same_minute() {
        let mut sched = ReportScheduler::new(ReportPolicy::Grid { quantum_min: 15 });
        assert!(sched.due(wall(3, 30, 0), 0));
        sched.complete();
        // predicate still true inside the same satisfying instant
        assert!(!sched.due(wall(3, 30, 0), 1));
        // next quantum fires again
        assert!(sched.due(wall(3, 45, 0), 901));
    }

    #[test]
    fn interval_fires_every_period_regardless_of_phase() {
        let mut sched = ReportScheduler::new(ReportPolicy::Interval { period_s: 600 });
        let odd_wall = wall(9, 7, 13);
        assert!(sched.due(odd_wall, 0));
        sched.complete();
        assert!(!sched.due(odd_wall, 0));
        assert!(!sched.due(odd_wall, 599));
        assert!(sched.due(odd_wall, 600));
        sched.complete();
        assert!(sched.due(odd_wall, 1200));
    }
}
