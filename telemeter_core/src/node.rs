//! The telemetry node: tick driver over injected sensor, link, and RTC.

use std::time::Duration;

use telemeter_traits::{RadioLink, RangeSensor, WallClock};

use crate::clock_sync::{self, ClockState};
use crate::config::NodeCfg;
use crate::error::{BuildError, Report as ErrReport, Result, TelemeterError};
use crate::filter;
use crate::median;
use crate::message::{self, Report};
use crate::scheduler::{ReportScheduler, WallTime};
use crate::status::TickOutcome;
use crate::util::SECS_PER_MIN;
use crate::window::{Sample, WindowBuffer};

/// Builder marker for a not-yet-provided component.
pub struct Missing;

/// Builder for [`TelemeterNode`]. Sensor, link, and wall clock must all be
/// provided before `build()` exists; the config is validated there.
pub struct NodeBuilder<S, R, W> {
    sensor: S,
    link: R,
    wall: W,
    cfg: NodeCfg,
}

impl Default for NodeBuilder<Missing, Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeBuilder<Missing, Missing, Missing> {
    pub fn new() -> Self {
        Self {
            sensor: Missing,
            link: Missing,
            wall: Missing,
            cfg: NodeCfg::default(),
        }
    }
}

impl<S, R, W> NodeBuilder<S, R, W> {
    pub fn with_sensor<T: RangeSensor>(self, sensor: T) -> NodeBuilder<T, R, W> {
        NodeBuilder {
            sensor,
            link: self.link,
            wall: self.wall,
            cfg: self.cfg,
        }
    }

    pub fn with_link<T: RadioLink>(self, link: T) -> NodeBuilder<S, T, W> {
        NodeBuilder {
            sensor: self.sensor,
            link,
            wall: self.wall,
            cfg: self.cfg,
        }
    }

    pub fn with_wall_clock<T: WallClock>(self, wall: T) -> NodeBuilder<S, R, T> {
        NodeBuilder {
            sensor: self.sensor,
            link: self.link,
            wall,
            cfg: self.cfg,
        }
    }

    pub fn with_config(mut self, cfg: NodeCfg) -> Self {
        self.cfg = cfg;
        self
    }
}

impl<S: RangeSensor, R: RadioLink, W: WallClock> NodeBuilder<S, R, W> {
    pub fn build(self) -> std::result::Result<TelemeterNode<S, R, W>, BuildError> {
        let cfg = self.cfg;
        if cfg.window.size < filter::KERNEL_LEN {
            return Err(BuildError::InvalidConfig(
                "window size below derivative kernel length",
            ));
        }
        if let crate::config::ReportPolicy::Grid { quantum_min } = cfg.policy {
            if quantum_min == 0 || quantum_min > 60 {
                return Err(BuildError::InvalidConfig("grid quantum out of 1..=60"));
            }
        }
        if let crate::config::ReportPolicy::Interval { period_s } = cfg.policy {
            if period_s == 0 {
                return Err(BuildError::InvalidConfig("interval period must be positive"));
            }
        }
        if cfg.timeouts.measure_ms == 0 || cfg.timeouts.reply_ms == 0 {
            return Err(BuildError::InvalidConfig("timeouts must be positive"));
        }
        let window = WindowBuffer::new(cfg.window.size);
        Ok(TelemeterNode {
            sensor: self.sensor,
            link: self.link,
            wall: self.wall,
            scheduler: ReportScheduler::new(cfg.policy),
            scratch: Vec::with_capacity(cfg.window.size),
            window,
            clock_state: ClockState::from_epoch(cfg.sync.baseline_epoch),
            elapsed_s: 0,
            last_sync_s: 0,
            started: false,
            cfg,
        })
    }
}

/// Single-threaded resident control loop. Owns the window, scratch buffer,
/// and clock state exclusively; collaborators are injected capabilities.
#[derive(Debug)]
pub struct TelemeterNode<S, R, W> {
    sensor: S,
    link: R,
    wall: W,
    cfg: NodeCfg,
    window: WindowBuffer,
    scratch: Vec<Sample>,
    scheduler: ReportScheduler,
    clock_state: ClockState,
    /// Whole seconds (ticks) since startup; drives the interval policy and
    /// the resync cadence.
    elapsed_s: u64,
    last_sync_s: u64,
    started: bool,
}

impl TelemeterNode<Missing, Missing, Missing> {
    pub fn builder() -> NodeBuilder<Missing, Missing, Missing> {
        NodeBuilder::new()
    }
}

impl<S: RangeSensor, R: RadioLink, W: WallClock> TelemeterNode<S, R, W> {
    /// One-time startup: bring up the link (fatal on failure), then run the
    /// clock handshake and seed the wall clock. Sync failures are non-fatal
    /// and fall back to the baseline epoch.
    pub fn startup(&mut self) -> Result<()> {
        self.link.init().map_err(|e| {
            ErrReport::new(TelemeterError::LinkInit(e.to_string()))
        })?;
        self.resync();
        self.started = true;
        tracing::info!(epoch = self.clock_state.epoch(), "node started");
        Ok(())
    }

    /// Run the time handshake now and reseed the wall clock.
    pub fn resync(&mut self) {
        let reply_timeout = Duration::from_millis(self.cfg.timeouts.reply_ms);
        let state = clock_sync::sync(&mut self.link, &self.cfg.sync, reply_timeout);
        state.seed(&mut self.wall);
        self.clock_state = state;
        self.last_sync_s = self.elapsed_s;
    }

    /// Re-run the handshake when the configured resync cadence has elapsed.
    /// Never called from inside `tick`.
    pub fn maybe_resync(&mut self) {
        if self.cfg.sync.resync_min == 0 {
            return;
        }
        let cadence_s = u64::from(self.cfg.sync.resync_min) * u64::from(SECS_PER_MIN);
        if self.elapsed_s.saturating_sub(self.last_sync_s) >= cadence_s {
            tracing::debug!("periodic clock resync");
            self.resync();
        }
    }

    /// One control-loop iteration: sample, window, differentiate, select the
    /// median, and transmit if the schedule says so.
    ///
    /// A sensor error or timed-out reading enters the window as the 0 fault
    /// sentinel; it is never discarded, so the median stays robust to up to
    /// N/2 such outliers while the derivative may be locally distorted.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let timeout = Duration::from_millis(self.cfg.timeouts.measure_ms);
        let sample = match self.sensor.measure(timeout) {
            Ok(0) => {
                tracing::warn!("sensor returned fault sentinel");
                0
            }
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "sensor read failed, recording sentinel");
                0
            }
        };
        self.window.push(sample);
        self.elapsed_s = self.elapsed_s.saturating_add(1);

        let derivative = filter::apply(self.window.snapshot());
        let median = median::median_into(self.window.snapshot(), &mut self.scratch);
        let warm = self.window.is_warm();

        let wall = WallTime {
            hours: self.wall.hours(),
            minutes: self.wall.minutes(),
            seconds: self.wall.seconds(),
        };
        tracing::debug!(
            h = wall.hours,
            m = wall.minutes,
            s = wall.seconds,
            sample,
            median,
            derivative,
            warm,
            "tick"
        );

        if !self.scheduler.due(wall, self.elapsed_s) {
            return Ok(TickOutcome::Sampled {
                sample,
                median,
                derivative,
                warm,
            });
        }

        let report = Report {
            latest: sample,
            median,
            slope: filter::slope_from_accum(derivative),
        };
        let frame = message::encode_report(&report, self.cfg.layout);
        let sent = self.link.send(&frame);
        // back to Idle whatever happened; no same-tick retry
        self.scheduler.complete();
        match sent {
            Ok(()) => {
                tracing::info!(
                    latest = report.latest,
                    median = report.median,
                    slope = report.slope,
                    frame_len = frame.len(),
                    "report sent"
                );
                Ok(TickOutcome::Reported { report, warm })
            }
            Err(e) => {
                tracing::warn!(error = %e, "transmission not accepted");
                Ok(TickOutcome::SendFailed {
                    report,
                    warm,
                    error: TelemeterError::Transmission(e.to_string()),
                })
            }
        }
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock_state
    }

    pub fn wall_clock(&self) -> &W {
        &self.wall
    }

    pub fn window(&self) -> &[Sample] {
        self.window.snapshot()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn cfg(&self) -> &NodeCfg {
        &self.cfg
    }
}
