//! Empirical SID envelope constants.
//!
//! Both tables are taken from published reSID/libsidplayfp reverse-engineering
//! (spec §4.6, §9): the 16-entry rate-period table and the exponential-decay
//! period bands used during Decay/Release. These are not derived, they are
//! measured silicon behavior — see spec §9's explicit "do not infer rates".

/// Cycles-per-envelope-step for each of the 16 ADSR rate-register values.
pub const RATE_PERIOD: [u16; 16] = [
    9, 32, 63, 95, 149, 220, 267, 313, 392, 977, 1954, 3126, 3907, 11720, 19532, 31251,
];

/// How many rate-table periods must elapse between single-unit envelope
/// decrements, indexed by current envelope level. Implements the
/// exponential approximation real SID hardware exhibits during Decay and
/// Release (linear Attack is unaffected).
pub fn exp_period(level: u8) -> u8 {
    match level {
        0xFF..=0x5E => 1,
        0x5D..=0x36 => 2,
        0x35..=0x1A => 4,
        0x19..=0x0E => 8,
        0x0D..=0x06 => 16,
        _ => 30,
    }
}
