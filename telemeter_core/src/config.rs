//! Runtime configuration structs for the node core.
//!
//! These mirror the TOML-facing schemas in `telemeter_config` but carry only
//! what the control loop needs; see `conversions.rs` for the bridges.

/// Sliding-window parameters.
#[derive(Debug, Clone, Copy)]
pub struct WindowCfg {
    /// Number of samples retained. Must be >= the FIR kernel length.
    pub size: usize,
}

impl Default for WindowCfg {
    fn default() -> Self {
        Self { size: 21 }
    }
}

/// Transmission gating policy. Exactly one is active per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPolicy {
    /// Fire when `seconds == 0 && minutes % quantum_min == 0`. Aligns
    /// independently clocked nodes onto a shared grid.
    Grid { quantum_min: u8 },
    /// Fire when whole seconds since boot/sync is a multiple of `period_s`,
    /// irrespective of wall-clock phase.
    Interval { period_s: u32 },
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self::Grid { quantum_min: 15 }
    }
}

/// Report payload layout. All multi-byte fields are big-endian on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadLayout {
    /// cmd + u16 median (3 bytes).
    Median16,
    /// cmd + u16 latest + u16 median + i16 slope (7 bytes).
    #[default]
    Full,
    /// cmd + u32 median (5 bytes).
    Median32,
}

/// Epoch encoding in the time-service reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EpochWire {
    /// 32-bit big-endian integer at a fixed offset of an 8-byte reply.
    #[default]
    BigEndian,
    /// Eight ASCII decimal digits accumulated byte-by-byte.
    Ascii,
}

/// Clock synchronization parameters.
#[derive(Debug, Clone, Copy)]
pub struct SyncCfg {
    pub wire: EpochWire,
    /// Epoch seconds used when the handshake yields no usable reply.
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

/// Bounds for the two blocking operations in the loop.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// Max wait per sensor measurement attempt (ms).
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

/// Full node configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeCfg {
    pub window: WindowCfg,
    pub policy: ReportPolicy,
    pub layout: PayloadLayout,
    pub sync: SyncCfg,
    pub timeouts: Timeouts,
}
