#![no_main]
use libfuzzer_sys::fuzz_target;

use telemeter_core::{EpochWire, PayloadLayout, decode_epoch, decode_report};

fuzz_target!(|data: &[u8]| {
    // Decoders must reject malformed frames without panicking, and any
    // accepted report must re-encode to the exact input bytes.
    for layout in [
        PayloadLayout::Median16,
        PayloadLayout::Full,
        PayloadLayout::Median32,
    ] {
        if let Some(report) = decode_report(data, layout) {
            assert_eq!(telemeter_core::encode_report(&report, layout), data);
        }
    }
    let _ = decode_epoch(data, EpochWire::BigEndian);
    let _ = decode_epoch(data, EpochWire::Ascii);
});
