//! Startup clock synchronization over the radio link.
//!
//! Sends the single-byte time query and decodes the bounded-latency reply
//! into an epoch. Every failure mode (link error, no reply, malformed reply)
//! degrades to the configured baseline epoch; the handshake never runs in
//! the per-tick hot path.

use std::time::Duration;

use telemeter_traits::{RadioLink, WallClock};

use crate::config::SyncCfg;
use crate::message;
use crate::util::{SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MIN};

/// Absolute epoch seconds plus a wall-clock-of-day view.
///
/// There is no date component; hours/minutes/seconds are pure modulo views
/// of the epoch. The state only changes through an explicit resync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    epoch: u32,
}

impl ClockState {
    pub fn from_epoch(epoch: u32) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn hours(&self) -> u8 {
        ((self.epoch % SECS_PER_DAY) / SECS_PER_HOUR) as u8
    }

    pub fn minutes(&self) -> u8 {
        ((self.epoch / SECS_PER_MIN) % SECS_PER_MIN) as u8
    }

    pub fn seconds(&self) -> u8 {
        (self.epoch % SECS_PER_MIN) as u8
    }

    /// Seed a wall clock with this state's time of day.
    pub fn seed<W: WallClock + ?Sized>(&self, wall: &mut W) {
        wall.set_time(self.hours(), self.minutes(), self.seconds());
    }
}

/// Run the time handshake once and return the resulting clock state.
///
/// Never fails: any negative outcome falls back to `cfg.baseline_epoch`
/// so the node always has a usable time of day.
pub fn sync<R: RadioLink + ?Sized>(
    link: &mut R,
    cfg: &SyncCfg,
    reply_timeout: Duration,
) -> ClockState {
    let query = message::encode_time_query();
    match link.send_with_reply(&query, reply_timeout) {
        Ok(Some(reply)) => match message::decode_epoch(&reply, cfg.wire) {
            Some(epoch) => {
                tracing::info!(epoch, "clock sync ok");
                ClockState::from_epoch(epoch)
            }
            None => {
                tracing::warn!(
                    reply_len = reply.len(),
                    "malformed time reply, using baseline epoch"
                );
                ClockState::from_epoch(cfg.baseline_epoch)
            }
        },
        Ok(None) => {
            tracing::warn!("no time reply within timeout, using baseline epoch");
            ClockState::from_epoch(cfg.baseline_epoch)
        }
        Err(e) => {
            tracing::warn!(error = %e, "time query failed, using baseline epoch");
            ClockState::from_epoch(cfg.baseline_epoch)
        }
    }
}
