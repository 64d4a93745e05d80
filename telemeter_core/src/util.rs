//! Common time/width helpers for telemeter_core.

/// Number of milliseconds in one second.
pub const MILLIS_PER_SEC: u64 = 1_000;
/// Number of seconds in one minute.
pub const SECS_PER_MIN: u32 = 60;
/// Number of minutes in one hour.
pub const MINS_PER_HOUR: u32 = 60;
/// Number of seconds in one hour.
pub const SECS_PER_HOUR: u32 = 3_600;
/// Number of seconds in one day.
pub const SECS_PER_DAY: u32 = 86_400;

/// Saturating narrowing of a sample value to its 16-bit wire width.
#[inline]
pub fn saturate_u16(v: u32) -> u16 {
    v.min(u32::from(u16::MAX)) as u16
}

/// Saturating narrowing of a signed value to its 16-bit wire width.
#[inline]
pub fn saturate_i16(v: i64) -> i16 {
    v.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate_u16_clamps_high() {
        assert_eq!(saturate_u16(0), 0);
        assert_eq!(saturate_u16(65_535), u16::MAX);
        assert_eq!(saturate_u16(70_000), u16::MAX);
    }

    #[test]
    fn saturate_i16_clamps_both_ends() {
        assert_eq!(saturate_i16(-12), -12);
        assert_eq!(saturate_i16(40_000), i16::MAX);
        assert_eq!(saturate_i16(-40_000), i16::MIN);
    }
}
