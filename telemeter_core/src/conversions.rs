//! `From` implementations bridging `telemeter_config` types to core types.
//!
//! These keep the TOML schema and the runtime structs decoupled without
//! field-by-field mapping at every call site.

use crate::config::{
    EpochWire, NodeCfg, PayloadLayout, ReportPolicy, SyncCfg, Timeouts, WindowCfg,
};

// ── WindowCfg ────────────────────────────────────────────────────────────────

impl From<&telemeter_config::WindowCfg> for WindowCfg {
    fn from(c: &telemeter_config::WindowCfg) -> Self {
        Self { size: c.size }
    }
}

// ── ReportPolicy ─────────────────────────────────────────────────────────────

impl From<&telemeter_config::ReportCfg> for ReportPolicy {
    fn from(c: &telemeter_config::ReportCfg) -> Self {
        match c.policy {
            telemeter_config::Policy::Grid => Self::Grid {
                quantum_min: c.quantum_min,
            },
            telemeter_config::Policy::Interval => Self::Interval {
                period_s: c.interval_s,
            },
        }
    }
}

// ── PayloadLayout ────────────────────────────────────────────────────────────

impl From<telemeter_config::Layout> for PayloadLayout {
    fn from(l: telemeter_config::Layout) -> Self {
        match l {
            telemeter_config::Layout::Median16 => Self::Median16,
            telemeter_config::Layout::Full => Self::Full,
            telemeter_config::Layout::Median32 => Self::Median32,
        }
    }
}

// ── SyncCfg ──────────────────────────────────────────────────────────────────

impl From<telemeter_config::EpochWire> for EpochWire {
    fn from(w: telemeter_config::EpochWire) -> Self {
        match w {
            telemeter_config::EpochWire::BigEndian => Self::BigEndian,
            telemeter_config::EpochWire::Ascii => Self::Ascii,
        }
    }
}

impl From<&telemeter_config::SyncCfg> for SyncCfg {
    fn from(c: &telemeter_config::SyncCfg) -> Self {
        Self {
            wire: c.wire.into(),
            baseline_epoch: c.baseline_epoch,
            resync_min: c.resync_min,
        }
    }
}

// ── Timeouts ─────────────────────────────────────────────────────────────────

impl From<&telemeter_config::Timeouts> for Timeouts {
    fn from(c: &telemeter_config::Timeouts) -> Self {
        Self {
            measure_ms: c.measure_ms,
            reply_ms: c.reply_ms,
        }
    }
}

// ── NodeCfg ──────────────────────────────────────────────────────────────────

impl From<&telemeter_config::Config> for NodeCfg {
    fn from(c: &telemeter_config::Config) -> Self {
        Self {
            window: (&c.window).into(),
            policy: (&c.report).into(),
            layout: c.report.layout.into(),
            sync: (&c.sync).into(),
            timeouts: (&c.timeouts).into(),
        }
    }
}
