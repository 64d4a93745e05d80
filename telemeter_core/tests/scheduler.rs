use telemeter_core::{ReportPolicy, ReportScheduler, SchedulerState, WallTime};

fn wall_at(day_second: u32) -> WallTime {
    WallTime {
        hours: ((day_second / 3_600) % 24) as u8,
        minutes: ((day_second / 60) % 60) as u8,
        seconds: (day_second % 60) as u8,
    }
}

#[test]
fn grid_quantum_15_fires_96_times_over_a_day() {
    let mut sched = ReportScheduler::new(ReportPolicy::Grid { quantum_min: 15 });
    let mut fired = Vec::new();
    for t in 0..86_400u32 {
        if sched.due(wall_at(t), u64::from(t)) {
            sched.complete();
            fired.push(t);
        }
    }
    assert_eq!(fired.len(), 96);
    for &t in &fired {
        let w = wall_at(t);
        assert_eq!(w.seconds, 0);
        assert_eq!(w.minutes % 15, 0);
    }
    // consecutive fires are exactly one quantum apart
    for pair in fired.windows(2) {
        assert_eq!(pair[1] - pair[0], 900);
    }
}

#[test]
fn grid_never_double_fires_when_clock_is_reread_within_a_second() {
    let mut sched = ReportScheduler::new(ReportPolicy::Grid { quantum_min: 5 });
    let boundary = wall_at(5 * 60);
    let mut count = 0;
    // a stalled tick loop can evaluate the same instant several times
    for _ in 0..10 {
        if sched.due(boundary, 0) {
            sched.complete();
            count += 1;
        }
    }
    assert_eq!(count, 1);
}

#[test]
fn interval_policy_is_phase_independent() {
    let mut sched = ReportScheduler::new(ReportPolicy::Interval { period_s: 7 });
    let odd_wall = wall_at(12_345); // 03:25:45, never on a grid boundary
    let fired: Vec<u64> = (1..=50)
        .filter(|&t| {
            let due = sched.due(odd_wall, t);
            if due {
                sched.complete();
            }
            due
        })
        .collect();
    assert_eq!(fired, vec![7, 14, 21, 28, 35, 42, 49]);
}

#[test]
fn state_round_trips_through_reporting() {
    let mut sched = ReportScheduler::new(ReportPolicy::Grid { quantum_min: 1 });
    assert_eq!(sched.state(), SchedulerState::Idle);
    assert!(sched.due(wall_at(60), 60));
    assert_eq!(sched.state(), SchedulerState::Reporting);
    sched.complete();
    assert_eq!(sched.state(), SchedulerState::Idle);
}
