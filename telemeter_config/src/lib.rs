#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Deployment configuration schemas for the telemetry node.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Deployed variants disagree on the epoch wire format, the report payload
//!   layout, and the scheduling predicate; each is pinned here per build
//!   rather than inferred at runtime.
use serde::Deserialize;

/// Sliding-window parameters.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct WindowCfg {
    /// Number of samples retained; must be at least the FIR kernel length (15).
    pub size: usize,
}

impl Default for WindowCfg {
    fn default() -> Self {
        Self { size: 21 }
    }
}

/// Which predicate gates a transmission.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Fire when `seconds == 0 && minutes % quantum_min == 0` (shared grid).
    #[default]
    Grid,
    /// Fire when seconds since boot/sync is a multiple of `interval_s`.
    Interval,
}

/// Report payload layout on the wire. All fields are big-endian.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// 3 bytes: cmd + u16 median.
    Median16,
    /// 7 bytes: cmd + u16 latest + u16 median + i16 slope. Canonical.
    #[default]
    Full,
    /// 5 bytes: cmd + u32 median.
    Median32,
}

/// Reporting schedule and payload selection.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct ReportCfg {
    pub policy: Policy,
    /// Grid quantum in minutes (grid policy).
    pub quantum_min: u8,
    /// Fixed period in seconds (interval policy).
    pub interval_s: u32,
    pub layout: Layout,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self {
            policy: Policy::Grid,
            quantum_min: 15,
            interval_s: 900,
            layout: Layout::Full,
        }
    }
}

/// Epoch encoding used by the time service reply.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EpochWire {
    /// Raw 32-bit big-endian integer at a fixed offset of an 8-byte reply.
    #[default]
    BigEndian,
    /// Eight ASCII decimal digits accumulated byte-by-byte.
    Ascii,
}

/// Clock synchronization parameters.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct SyncCfg {
    pub wire: EpochWire,
    /// Epoch seconds used when the handshake gets no (usable) reply.
    pub baseline_epoch: u32,
    /// Re-run the handshake every this many minutes; 0 disables resync.
    pub resync_min: u32,
}

impl Default for SyncCfg {
    fn default() -> Self {
        Self {
            wire: EpochWire::BigEndian,
            baseline_epoch: 1_500_000_000,
            resync_min: 0,
        }
    }
}

/// Blocking-operation bounds.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Timeouts {
    /// Max wait per sensor measurement attempt (ms).
    #[serde(alias = "sensor_ms")]
    pub measure_ms: u64,
    /// Max wait for a send-with-reply round trip (ms).
    pub reply_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            measure_ms: 60,
            reply_ms: 30_000,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowCfg,
    pub report: ReportCfg,
    pub sync: SyncCfg,
    pub timeouts: Timeouts,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    /// Cross-field validation; call after deserialization.
    pub fn validate(&self) -> eyre::Result<()> {
        if self.window.size < 15 {
            eyre::bail!(
                "window.size must be at least the derivative kernel length (15), got {}",
                self.window.size
            );
        }
        match self.report.policy {
            Policy::Grid => {
                if !(1..=60).contains(&self.report.quantum_min) {
                    eyre::bail!(
                        "report.quantum_min must be in 1..=60, got {}",
                        self.report.quantum_min
                    );
                }
            }
            Policy::Interval => {
                if self.report.interval_s == 0 {
                    eyre::bail!("report.interval_s must be positive for the interval policy");
                }
            }
        }
        if self.timeouts.measure_ms == 0 {
            eyre::bail!("timeouts.measure_ms must be positive");
        }
        if self.timeouts.reply_ms == 0 {
            eyre::bail!("timeouts.reply_ms must be positive");
        }
        Ok(())
    }
}
