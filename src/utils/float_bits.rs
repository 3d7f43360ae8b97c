// quiet bit is the most significant bit of the 52-bit mantissa
const QUIET_BIT: u64 = 1 << 51;

/// Returns `true` if `x` is a NaN whose quiet bit is clear.
///
/// `f64` has no such query of its own, so it is read off the bit pattern.
pub fn is_signaling_nan(x: f64) -> bool {
    x.is_nan() && x.to_bits() & QUIET_BIT == 0
}

/// A signaling NaN with the smallest non-zero payload.
///
/// Any arithmetic on it yields a quiet NaN, only moves and bit casts keep it signaling.
pub fn signaling_nan() -> f64 {
    f64::from_bits(0x7ff0_0000_0000_0001)
}
