//! Binary message encoding for the radio link.
//!
//! Frames are a command byte followed by a fixed payload layout chosen per
//! deployment. Every multi-byte field is explicitly big-endian via
//! `to_be_bytes`/`from_be_bytes`; nothing here depends on native memory
//! layout or packed structs.

use crate::config::{EpochWire, PayloadLayout};
use crate::util::saturate_u16;

/// Command byte: query the network time service.
pub const CMD_TIME_QUERY: u8 = 0x01;
/// Command byte: telemetry report.
pub const CMD_REPORT: u8 = 0x02;

/// Offset of the big-endian epoch field inside an 8-byte time reply.
const EPOCH_OFFSET: usize = 4;
/// Digit count of the ASCII epoch variant.
const EPOCH_ASCII_LEN: usize = 8;

/// Telemetry fields carried by a report frame.
///
/// `latest` and `median` are distance in tenths of a millimeter; `slope` is
/// (distance tenths)/second, already normalized out of the FIR accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub latest: u32,
    pub median: u32,
    pub slope: i16,
}

/// The single-byte clock query frame.
pub fn encode_time_query() -> [u8; 1] {
    [CMD_TIME_QUERY]
}

/// Encode a report frame in the given layout. Values wider than their wire
/// field saturate.
pub fn encode_report(report: &Report, layout: PayloadLayout) -> Vec<u8> {
    match layout {
        PayloadLayout::Median16 => {
            let mut frame = Vec::with_capacity(3);
            frame.push(CMD_REPORT);
            frame.extend_from_slice(&saturate_u16(report.median).to_be_bytes());
            frame
        }
        PayloadLayout::Full => {
            let mut frame = Vec::with_capacity(7);
            frame.push(CMD_REPORT);
            frame.extend_from_slice(&saturate_u16(report.latest).to_be_bytes());
            frame.extend_from_slice(&saturate_u16(report.median).to_be_bytes());
            frame.extend_from_slice(&report.slope.to_be_bytes());
            frame
        }
        PayloadLayout::Median32 => {
            let mut frame = Vec::with_capacity(5);
            frame.push(CMD_REPORT);
            frame.extend_from_slice(&report.median.to_be_bytes());
            frame
        }
    }
}

/// Decode a report frame previously produced by `encode_report`.
///
/// Fields absent from the layout decode as 0. Returns `None` on a wrong
/// command byte or length.
pub fn decode_report(frame: &[u8], layout: PayloadLayout) -> Option<Report> {
    let (&cmd, payload) = frame.split_first()?;
    if cmd != CMD_REPORT {
        return None;
    }
    match layout {
        PayloadLayout::Median16 => {
            if payload.len() != 2 {
                return None;
            }
            let median = u16::from_be_bytes(payload.get(0..2)?.try_into().ok()?);
            Some(Report {
                latest: 0,
                median: u32::from(median),
                slope: 0,
            })
        }
        PayloadLayout::Full => {
            if payload.len() != 6 {
                return None;
            }
            let latest = u16::from_be_bytes(payload.get(0..2)?.try_into().ok()?);
            let median = u16::from_be_bytes(payload.get(2..4)?.try_into().ok()?);
            let slope = i16::from_be_bytes(payload.get(4..6)?.try_into().ok()?);
            Some(Report {
                latest: u32::from(latest),
                median: u32::from(median),
                slope,
            })
        }
        PayloadLayout::Median32 => {
            if payload.len() != 4 {
                return None;
            }
            let median = u32::from_be_bytes(payload.get(0..4)?.try_into().ok()?);
            Some(Report {
                latest: 0,
                median,
                slope: 0,
            })
        }
    }
}

/// Decode an epoch value from a time-service reply payload.
///
/// - `BigEndian`: 32-bit big-endian integer at byte offset 4 of a reply at
///   least 8 bytes long (the first word is service padding).
/// - `Ascii`: exactly 8 ASCII decimal digits accumulated most significant
///   first.
///
/// Returns `None` on a short or malformed payload; callers fall back to the
/// configured baseline epoch.
pub fn decode_epoch(payload: &[u8], wire: EpochWire) -> Option<u32> {
    match wire {
        EpochWire::BigEndian => {
            let raw = payload.get(EPOCH_OFFSET..EPOCH_OFFSET + 4)?;
            Some(u32::from_be_bytes(raw.try_into().ok()?))
        }
        EpochWire::Ascii => {
            if payload.len() != EPOCH_ASCII_LEN {
                return None;
            }
            let mut epoch: u32 = 0;
            for &b in payload {
                if !b.is_ascii_digit() {
                    return None;
                }
                epoch = epoch * 10 + u32::from(b - b'0');
            }
            Some(epoch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_layout_is_seven_bytes_big_endian() {
        let report = Report {
            latest: 0x0102,
            median: 0x0304,
            slope: -2,
        };
        let frame = encode_report(&report, PayloadLayout::Full);
        assert_eq!(frame, [0x02, 0x01, 0x02, 0x03, 0x04, 0xFF, 0xFE]);
    }

    #[test]
    fn oversized_values_saturate_into_u16_fields() {
        let report = Report {
            latest: 100_000,
            median: 70_000,
            slope: 0,
        };
        let frame = encode_report(&report, PayloadLayout::Full);
        assert_eq!(&frame[1..3], &[0xFF, 0xFF]);
        assert_eq!(&frame[3..5], &[0xFF, 0xFF]);
    }

    #[test]
    fn median32_keeps_full_width() {
        let report = Report {
            latest: 0,
            median: 0x0001_0000,
            slope: 0,
        };
        let frame = encode_report(&report, PayloadLayout::Median32);
        assert_eq!(frame, [0x02, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(
            decode_report(&frame, PayloadLayout::Median32),
            Some(Report {
                latest: 0,
                median: 0x0001_0000,
                slope: 0
            })
        );
    }

    #[test]
    fn decode_rejects_wrong_command_or_length() {
        assert_eq!(decode_report(&[], PayloadLayout::Full), None);
        assert_eq!(
            decode_report(&[0x01, 0, 0, 0, 0, 0, 0], PayloadLayout::Full),
            None
        );
        assert_eq!(decode_report(&[0x02, 0, 0], PayloadLayout::Full), None);
    }

    #[test]
    fn epoch_big_endian_reads_fixed_offset() {
        let reply = [0xAA, 0xBB, 0xCC, 0xDD, 0x5B, 0x0E, 0x8C, 0x40];
        assert_eq!(
            decode_epoch(&reply, EpochWire::BigEndian),
            Some(0x5B0E_8C40)
        );
        assert_eq!(decode_epoch(&reply[..7], EpochWire::BigEndian), None);
    }

    #[test]
    fn epoch_ascii_accumulates_digits() {
        assert_eq!(decode_epoch(b"15000000", EpochWire::Ascii), Some(15_000_000));
        assert_eq!(decode_epoch(b"15x00000", EpochWire::Ascii), None);
        assert_eq!(decode_epoch(b"1500000", EpochWire::Ascii), None);
    }
}
