use std::time::Duration;

use rstest::rstest;
use telemeter_hardware::{
    RampRangeSensor, ScriptedRangeSensor, SimClock, SimulatedRadio, SoftWallClock,
};
use telemeter_traits::{RadioLink, RangeSensor, WallClock};

const T: Duration = Duration::from_millis(60);

#[test]
fn scripted_sensor_plays_then_repeats_last() {
    let mut s = ScriptedRangeSensor::new([500, 0, 510]);
    let reads: Vec<u32> = (0..5).map(|_| s.measure(T).expect("measure")).collect();
    assert_eq!(reads, [500, 0, 510, 510, 510]);
}

#[rstest]
#[case(100, 10, &[100, 110, 120])]
#[case(0, 1, &[0, 1, 2])]
fn ramp_sensor_steps_linearly(#[case] start: u32, #[case] step: u32, #[case] expect: &[u32]) {
    let mut s = RampRangeSensor::new(start, step);
    for &e in expect {
        assert_eq!(s.measure(T).expect("measure"), e);
    }
}

#[test]
fn radio_rejects_everything_before_init() {
    let mut radio = SimulatedRadio::silent();
    let sent = radio.sent_log();
    assert!(radio.send(&[0x02, 0, 0]).is_err());
    radio.init().expect("init");
    radio.send(&[0x02, 0, 0]).expect("send after init");
    assert_eq!(sent.borrow().len(), 1);
}

#[test]
fn radio_serves_canned_reply_and_records_query() {
    let reply = vec![0, 0, 0, 0, 0x5B, 0, 0, 0];
    let mut radio = SimulatedRadio::answering(reply.clone());
    let queries = radio.query_log();
    radio.init().expect("init");
    let got = radio
        .send_with_reply(&[0x01], Duration::from_secs(1))
        .expect("round trip");
    assert_eq!(got, Some(reply));
    assert_eq!(*queries.borrow(), vec![vec![0x01]]);
}

#[test]
fn silent_radio_yields_no_reply() {
    let mut radio = SimulatedRadio::silent();
    radio.init().expect("init");
    let got = radio
        .send_with_reply(&[0x01], Duration::from_secs(1))
        .expect("round trip");
    assert_eq!(got, None);
}

#[test]
fn soft_wall_clock_advances_with_sim_time() {
    let clock = SimClock::new();
    let mut wall = SoftWallClock::new(clock.clone());
    wall.set_time(23, 59, 58);
    assert_eq!((wall.hours(), wall.minutes(), wall.seconds()), (23, 59, 58));

    clock.advance(Duration::from_secs(3));
    // wraps past midnight with no date component
    assert_eq!((wall.hours(), wall.minutes(), wall.seconds()), (0, 0, 1));
}

#[test]
fn soft_wall_clock_reset_rebases_elapsed_time() {
    let clock = SimClock::new();
    let mut wall = SoftWallClock::new(clock.clone());
    clock.advance(Duration::from_secs(1000));
    wall.set_time(6, 30, 0);
    clock.advance(Duration::from_secs(90));
    assert_eq!((wall.hours(), wall.minutes(), wall.seconds()), (6, 31, 30));
}
