//! Fixed-precision rounding and canonical number formatting

/// Results are rounded to eight decimal places
pub const ROUNDING_SCALE: f64 = 100_000_000.0;

/// Round to eight decimal places, halves toward positive infinity
///
/// Absorbs binary representation error in decimal arithmetic:
/// `0.1 + 0.2` rounds to `0.3`. Values too large to scale are returned as-is,
/// they carry no fractional digits at that magnitude anyway.
pub fn round(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / ROUNDING_SCALE
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Canonical decimal string for a finite value
///
/// Shortest representation that round-trips, never in exponent notation,
/// with negative zero written as `0`. The output only uses characters the
/// accumulator accepts, so a committed result can be edited further.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
