use std::fmt;
use std::hash::{Hash, Hasher};
use ordered_float::OrderedFloat;
use crate::utils::float_bits::is_signaling_nan;

/// A complex number over `f64` in rectangular form.
///
/// Values never change after construction, every operator and function
/// returns a new `Complex`. Polar coordinates are derived on demand with
/// [`Complex::radius`] and [`Complex::angle`].
///
/// Equality is IEEE-754 equality of both components, so a value with a NaN
/// component is not equal to itself and `Complex` is deliberately not `Eq`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// `0 + i`
    pub const I: Complex = Complex { re: 0_f64, im: 1_f64 };
    /// Positive infinity in both components.
    pub const INFINITY: Complex = Complex { re: f64::INFINITY, im: f64::INFINITY };
    pub const NAN: Complex = Complex { re: f64::NAN, im: f64::NAN };
    // f64::NAN is already the canonical quiet NaN
    pub const QUIET_NAN: Complex = Complex { re: f64::NAN, im: f64::NAN };

    pub const fn new (re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn zero () -> Self {
        Self::new(0_f64, 0_f64)
    }

    pub fn one () -> Self {
        Self::new(1_f64, 0_f64)
    }

    /// Builds `r * (cos(theta) + i*sin(theta))`.
    ///
    /// Neither `r` nor `theta` is normalized: a negative radius or an angle
    /// outside `(-pi, pi]` goes straight into the formula.
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    pub fn real (&self) -> f64 {
        self.re
    }

    pub fn imaginary (&self) -> f64 {
        self.im
    }

    /// Magnitude, same as [`Complex::abs`].
    pub fn radius (&self) -> f64 {
        self.abs()
    }

    /// Argument in `[-pi, pi]`, same as [`Complex::phase`].
    pub fn angle (&self) -> f64 {
        self.phase()
    }

    pub fn is_finite (&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn is_infinite (&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    pub fn is_normal (&self) -> bool {
        self.re.is_normal() && self.im.is_normal()
    }

    pub fn is_subnormal (&self) -> bool {
        self.re.is_subnormal() || self.im.is_subnormal()
    }

    /// Both components are `+0.0` or `-0.0`.
    pub fn is_zero (&self) -> bool {
        self.re == 0_f64 && self.im == 0_f64
    }

    pub fn is_nan (&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    pub fn is_signaling (&self) -> bool {
        is_signaling_nan(self.re) || is_signaling_nan(self.im)
    }

    /// Either component has its sign bit set, including `-0.0` and negative NaNs.
    pub fn is_sign_minus (&self) -> bool {
        self.re.is_sign_negative() || self.im.is_sign_negative()
    }
}

// `{:?}` keeps the decimal point, so 1.0 prints as "1.0" and not "1"
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{:?} - i{:?}", self.re, self.im.abs())
        } else {
            write!(f, "{:?} + i{:?}", self.re, self.im)
        }
    }
}

// OrderedFloat hashes +0.0 and -0.0 alike, which keeps Hash in line with IEEE equality
impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.re).hash(state);
        OrderedFloat(self.im).hash(state);
    }
}

macro_rules! impl_from_real {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Complex {
                fn from(value: $t) -> Self {
                    Complex::new(value as f64, 0_f64)
                }
            }
        )*
    };
}

impl_from_real!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64);

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::f64::consts::PI;
    use super::*;
    use crate::utils::float_bits::signaling_nan;

    fn hash_of (z: &Complex) -> u64 {
        let mut hasher = DefaultHasher::new();
        z.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_keeps_components () {
        let z = Complex::new(-0_f64, f64::INFINITY);
        assert!(z.real().is_sign_negative());
        assert_eq!(z.real(), 0_f64);
        assert_eq!(z.imaginary(), f64::INFINITY);
    }

    #[test]
    fn test_from_polar () {
        let z = Complex::from_polar(2_f64, PI / 2_f64);
        assert!(z.real().abs() < 1e-15);
        assert_eq!(z.imaginary(), 2_f64);

        // negative radius is not folded into the angle
        let z = Complex::from_polar(-1_f64, 0_f64);
        assert_eq!(z, Complex::new(-1_f64, 0_f64));
    }

    #[test]
    fn test_radius_and_angle () {
        let z = Complex::new(3_f64, 4_f64);
        assert_eq!(z.radius(), 5_f64);
        assert_eq!(z.angle(), 4_f64.atan2(3_f64));
        assert_eq!(Complex::new(-1_f64, 0_f64).angle(), PI);
    }

    #[test]
    fn test_from_integers_and_floats () {
        assert_eq!(Complex::from(7_u8), Complex::new(7_f64, 0_f64));
        assert_eq!(Complex::from(-7_i8), Complex::new(-7_f64, 0_f64));
        assert_eq!(Complex::from(u16::MAX), Complex::new(65535_f64, 0_f64));
        assert_eq!(Complex::from(-3_i32), Complex::new(-3_f64, 0_f64));
        assert_eq!(Complex::from(1_u64 << 53), Complex::new(9007199254740992_f64, 0_f64));
        assert_eq!(Complex::from(-12_isize), Complex::new(-12_f64, 0_f64));
        assert_eq!(Complex::from(0.5_f32), Complex::new(0.5_f64, 0_f64));
        assert_eq!(Complex::from(-2.25_f64), Complex::new(-2.25_f64, 0_f64));
    }

    #[test]
    fn test_real_embedding_has_positive_zero_imaginary () {
        for z in [Complex::from(-1_i64), Complex::from(-1.5_f64), Complex::from(-0_f64)] {
            assert!(!z.imaginary().is_sign_negative(), "{z}");
        }
    }

    #[test]
    fn test_special_values () {
        assert_eq!(Complex::I, Complex::new(0_f64, 1_f64));
        assert!(Complex::INFINITY.real().is_infinite() && Complex::INFINITY.real() > 0_f64);
        assert!(Complex::INFINITY.imaginary().is_infinite() && Complex::INFINITY.imaginary() > 0_f64);
        assert!(Complex::NAN.real().is_nan() && Complex::NAN.imaginary().is_nan());
        assert!(Complex::QUIET_NAN.is_nan());
        assert!(!Complex::QUIET_NAN.is_signaling());
    }

    #[test]
    fn test_nan_is_not_equal_to_itself () {
        assert_ne!(Complex::NAN, Complex::NAN);
        let z = Complex::new(1_f64, f64::NAN);
        assert_ne!(z, z);
    }

    #[test]
    fn test_signed_zeros_are_equal () {
        assert_eq!(Complex::new(0_f64, 0_f64), Complex::new(-0_f64, -0_f64));
    }

    #[test]
    fn test_hash_agrees_with_equality () {
        let a = Complex::new(0_f64, 0_f64);
        let b = Complex::new(-0_f64, -0_f64);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = Complex::new(1.5_f64, -2_f64);
        assert_eq!(hash_of(&c), hash_of(&Complex::new(1.5_f64, -2_f64)));
        // swapped components must not collide the way xor of the two hashes would
        assert_ne!(hash_of(&Complex::new(1_f64, 2_f64)), hash_of(&Complex::new(2_f64, 1_f64)));
    }

    #[test]
    fn test_is_finite_and_is_infinite () {
        assert!(Complex::new(1_f64, -2_f64).is_finite());
        assert!(!Complex::new(1_f64, f64::INFINITY).is_finite());
        assert!(!Complex::new(f64::NAN, 0_f64).is_finite());

        assert!(Complex::new(f64::NEG_INFINITY, 0_f64).is_infinite());
        assert!(Complex::new(0_f64, f64::INFINITY).is_infinite());
        assert!(!Complex::new(f64::NAN, 0_f64).is_infinite());
    }

    #[test]
    fn test_is_normal_needs_both () {
        assert!(Complex::new(1_f64, -2_f64).is_normal());
        // zero is not a normal number
        assert!(!Complex::new(1_f64, 0_f64).is_normal());
        assert!(!Complex::new(f64::MIN_POSITIVE / 2_f64, 1_f64).is_normal());
    }

    #[test]
    fn test_is_subnormal_needs_either () {
        let tiny = f64::MIN_POSITIVE / 2_f64;
        assert!(Complex::new(1_f64, tiny).is_subnormal());
        assert!(Complex::new(-tiny, 1_f64).is_subnormal());
        assert!(!Complex::new(1_f64, 0_f64).is_subnormal());
    }

    #[test]
    fn test_is_zero () {
        assert!(Complex::zero().is_zero());
        assert!(Complex::new(-0_f64, 0_f64).is_zero());
        assert!(Complex::new(-0_f64, -0_f64).is_zero());
        assert!(!Complex::new(0_f64, 1e-300).is_zero());
    }

    #[test]
    fn test_is_nan_needs_either () {
        assert!(Complex::NAN.is_nan());
        assert!(Complex::new(1_f64, f64::NAN).is_nan());
        assert!(Complex::new(f64::NAN, 1_f64).is_nan());
        assert!(!Complex::INFINITY.is_nan());
    }

    #[test]
    fn test_is_signaling () {
        assert!(Complex::new(signaling_nan(), 0_f64).is_signaling());
        assert!(Complex::new(0_f64, signaling_nan()).is_signaling());
        assert!(!Complex::NAN.is_signaling());
        assert!(!Complex::one().is_signaling());
    }

    #[test]
    fn test_is_sign_minus_reads_sign_bit () {
        assert!(Complex::new(1_f64, -0_f64).is_sign_minus());
        assert!(Complex::new(-0_f64, 1_f64).is_sign_minus());
        assert!(Complex::new(-1_f64, 1_f64).is_sign_minus());
        assert!(!Complex::new(0_f64, 0_f64).is_sign_minus());
        assert!(!Complex::I.is_sign_minus());
    }

    #[test]
    fn test_display () {
        assert_eq!(Complex::new(1.5_f64, 2_f64).to_string(), "1.5 + i2.0");
        assert_eq!(Complex::new(-3_f64, -4.5_f64).to_string(), "-3.0 - i4.5");
        assert_eq!(Complex::I.to_string(), "0.0 + i1.0");
        assert_eq!(Complex::INFINITY.to_string(), "inf + iinf");
        assert_eq!(Complex::NAN.to_string(), "NaN + iNaN");
    }

    #[test]
    fn test_display_negative_zero_imaginary () {
        assert_eq!(Complex::new(1_f64, -0_f64).to_string(), "1.0 - i0.0");
        assert_eq!(Complex::new(1_f64, 0_f64).to_string(), "1.0 + i0.0");
    }
}
