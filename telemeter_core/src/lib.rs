#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core telemetry-node logic (hardware-agnostic).
//!
//! This crate provides the resident control loop of a distance telemetry
//! node. All hardware interactions go through the `telemeter_traits`
//! capability traits (`RangeSensor`, `RadioLink`, `WallClock`).
//!
//! ## Architecture
//!
//! - **Window**: fixed-capacity FIFO of recent samples (`window` module)
//! - **Filtering**: fixed-point Savitzky–Golay FIR derivative (`filter`)
//! - **Order statistic**: in-place quickselect median (`median`)
//! - **Clock sync**: epoch handshake with baseline fallback (`clock_sync`)
//! - **Scheduling**: grid-quantized or fixed-interval gating (`scheduler`)
//! - **Wire codec**: explicit big-endian frames (`message`)
//! - **Tick driver**: `TelemeterNode` (`node`) and the polled `runner`
//!
//! ## Fixed-Point Arithmetic
//!
//! Samples are integer tenths of a millimeter (`u32`, 0 = fault sentinel);
//! the derivative is an `i64` accumulator in Q15 (scale 32768) over the
//! kernel normalizer 280. Nothing in the per-tick path allocates or touches
//! floating point.

// Module declarations
pub mod clock_sync;
pub mod config;
pub mod conversions;
pub mod error;
pub mod filter;
pub mod median;
pub mod message;
pub mod mocks;
pub mod node;
pub mod runner;
pub mod scheduler;
pub mod status;
pub mod util;
pub mod window;

pub use clock_sync::{ClockState, sync};
pub use config::{EpochWire, NodeCfg, PayloadLayout, ReportPolicy, SyncCfg, Timeouts, WindowCfg};
pub use error::{BuildError, Result, TelemeterError};
pub use filter::{FIR_SCALE, KERNEL_LEN, SAVGOL_DERIV, apply, slope_from_accum};
pub use median::{median_into, select};
pub use message::{
    CMD_REPORT, CMD_TIME_QUERY, Report, decode_epoch, decode_report, encode_report,
    encode_time_query,
};
pub use node::{NodeBuilder, TelemeterNode};
pub use runner::run_resident;
pub use scheduler::{ReportScheduler, SchedulerState, WallTime};
pub use status::TickOutcome;
pub use window::{Sample, WindowBuffer};
