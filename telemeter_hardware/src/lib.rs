#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Simulated hardware for the telemetry node.
//!
//! Everything here implements the `telemeter_traits` capability traits so
//! the core can be exercised without a rangefinder, a radio modem, or an
//! RTC. The pulse-wait helpers in `util` are the timing primitives a real
//! echo-based driver would build on.
pub mod clock;
pub mod error;
pub mod util;

pub use clock::SimClock;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use telemeter_traits::clock::Clock;
use telemeter_traits::{RadioLink, RangeSensor, WallClock};

/// Shared frame log handed out by [`SimulatedRadio`] so tests can inspect
/// traffic after the radio has moved into a node.
pub type FrameLog = Rc<RefCell<Vec<Vec<u8>>>>;

/// Sensor that plays back a fixed sequence of readings, then repeats the
/// last one. `0` entries simulate faulted measurements.
#[derive(Debug)]
pub struct ScriptedRangeSensor {
    seq: Vec<u32>,
    idx: usize,
}

impl ScriptedRangeSensor {
    pub fn new(seq: impl Into<Vec<u32>>) -> Self {
        Self {
            seq: seq.into(),
            idx: 0,
        }
    }
}

impl RangeSensor for ScriptedRangeSensor {
    fn measure(
        &mut self,
        _timeout: Duration,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        let v = if self.idx < self.seq.len() {
            let x = self.seq[self.idx];
            self.idx += 1;
            x
        } else {
            self.seq.last().copied().unwrap_or(0)
        };
        tracing::debug!(distance_tenths = v, "simulated measurement");
        Ok(v)
    }
}

/// Sensor that ramps linearly from `start` by `step` per reading, for
/// derivative-oriented experiments.
#[derive(Debug)]
pub struct RampRangeSensor {
    next: u32,
    step: u32,
}

impl RampRangeSensor {
    pub fn new(start: u32, step: u32) -> Self {
        Self { next: start, step }
    }
}

impl RangeSensor for RampRangeSensor {
    fn measure(
        &mut self,
        _timeout: Duration,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        let v = self.next;
        self.next = self.next.saturating_add(self.step);
        Ok(v)
    }
}

/// Radio double that records every accepted frame and serves one canned
/// reply to `send_with_reply`.
#[derive(Debug)]
pub struct SimulatedRadio {
    up: bool,
    accept: bool,
    reply: Option<Vec<u8>>,
    sent: FrameLog,
    queries: FrameLog,
}

impl SimulatedRadio {
    fn new(accept: bool, reply: Option<Vec<u8>>) -> Self {
        Self {
            up: false,
            accept,
            reply,
            sent: Rc::new(RefCell::new(Vec::new())),
            queries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Link that accepts frames and answers time queries with `reply`.
    pub fn answering(reply: Vec<u8>) -> Self {
        Self::new(true, Some(reply))
    }

    /// Link that accepts frames but never replies.
    pub fn silent() -> Self {
        Self::new(true, None)
    }

    /// Link whose medium rejects every transmission.
    pub fn rejecting() -> Self {
        Self::new(false, None)
    }

    /// Frames handed to `send`, oldest first.
    pub fn sent_log(&self) -> FrameLog {
        Rc::clone(&self.sent)
    }

    /// Frames handed to `send_with_reply`, oldest first.
    pub fn query_log(&self) -> FrameLog {
        Rc::clone(&self.queries)
    }
}

impl RadioLink for SimulatedRadio {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.up = true;
        tracing::debug!("simulated radio up");
        Ok(())
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if !self.up {
            return Err(Box::new(crate::error::HwError::LinkDown));
        }
        if !self.accept {
            return Err(Box::new(crate::error::HwError::Rejected));
        }
        self.sent.borrow_mut().push(frame.to_vec());
        Ok(())
    }

    fn send_with_reply(
        &mut self,
        frame: &[u8],
        _timeout: Duration,
    ) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.up {
            return Err(Box::new(crate::error::HwError::LinkDown));
        }
        self.queries.borrow_mut().push(frame.to_vec());
        Ok(self.reply.clone())
    }
}

/// Software RTC: seconds-of-day seeded by `set_time` and advanced by the
/// injected monotonic clock. Stands in for a hardware RTC register file.
#[derive(Debug)]
pub struct SoftWallClock<C: Clock> {
    clock: C,
    origin: Instant,
    base_s: u32,
}

impl<C: Clock> SoftWallClock<C> {
    pub fn new(clock: C) -> Self {
        let origin = clock.now();
        Self {
            clock,
            origin,
            base_s: 0,
        }
    }

    fn seconds_of_day(&self) -> u32 {
        let elapsed = self.clock.secs_since(self.origin);
        ((u64::from(self.base_s) + elapsed) % 86_400) as u32
    }
}

impl<C: Clock> WallClock for SoftWallClock<C> {
    fn set_time(&mut self, hours: u8, minutes: u8, seconds: u8) {
        self.base_s =
            u32::from(hours) * 3_600 + u32::from(minutes) * 60 + u32::from(seconds);
        self.origin = self.clock.now();
    }

    fn hours(&self) -> u8 {
        (self.seconds_of_day() / 3_600) as u8
    }

    fn minutes(&self) -> u8 {
        ((self.seconds_of_day() / 60) % 60) as u8
    }

    fn seconds(&self) -> u8 {
        (self.seconds_of_day() % 60) as u8
    }
}
