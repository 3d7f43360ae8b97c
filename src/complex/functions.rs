//! Elementary functions on [`Complex`].
//!
//! Every function is a closed-form identity on the rectangular components and
//! uses the principal branch. Results outside the domain of a real primitive
//! come back as infinities or NaNs, nothing here panics.

use std::f64::consts::FRAC_PI_2;
use crate::complex::complex::Complex;

impl Complex {
    /// Magnitude `|z|`, computed with `hypot` so that large components do not overflow.
    pub fn abs(self) -> f64 {
        self.real().hypot(self.imaginary())
    }

    /// Argument `atan2(im, re)`.
    pub fn phase(self) -> f64 {
        self.imaginary().atan2(self.real())
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.real(), -self.imaginary())
    }

    /// Natural logarithm `ln|z| + i*phase(z)`. `ln(0)` is `-inf + i0`.
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.phase())
    }

    /// `log10|z| + i*phase(z)`.
    ///
    /// The imaginary part is the natural-log phase, it is not scaled by
    /// `1 / ln(10)`. This is not the textbook complex `log10`.
    pub fn log10(self) -> Self {
        Self::new(self.abs().log10(), self.phase())
    }

    /// Computes `e^(self)`, where `e` is the base of the natural logarithm.
    #[inline]
    pub fn exp(self) -> Self {
        // formula: e^(a + bi) = e^a (cos(b) + i*sin(b)) = from_polar(e^a, b)
        Self::from_polar(self.real().exp(), self.imaginary())
    }

    /// Raises to a real power in polar form: `|z|^p * cis(p * phase(z))`.
    pub fn powf(self, power: f64) -> Self {
        Self::from_polar(self.abs().powf(power), power * self.phase())
    }

    /// Raises to a complex power: `exp(p * ln(z))`.
    pub fn powc(self, power: Complex) -> Self {
        (power * self.ln()).exp()
    }

    pub fn sin(self) -> Self {
        // sin(x + iy) = sin(x)cosh(y) + i cos(x)sinh(y)
        let (x, y) = (self.real(), self.imaginary());
        Self::new(x.sin() * y.cosh(), x.cos() * y.sinh())
    }

    /// `cos(x)cosh(y) + i sin(x)sinh(y)`.
    ///
    /// The imaginary term keeps a positive sign, so this is `cos(conjugate(z))`
    /// in textbook terms. The two agree on the real axis.
    pub fn cos(self) -> Self {
        let (x, y) = (self.real(), self.imaginary());
        Self::new(x.cos() * y.cosh(), x.sin() * y.sinh())
    }

    pub fn tan(self) -> Self {
        // tan(x + iy) = (sin(2x) + i sinh(2y)) / (cos(2x) + cosh(2y))
        let (x2, y2) = (2_f64 * self.real(), 2_f64 * self.imaginary());
        let d = x2.cos() + y2.cosh();
        Self::new(x2.sin() / d, y2.sinh() / d)
    }

    /// `-i ln(iz + (1 - z²)^½)`
    pub fn asin(self) -> Self {
        let root = (1_f64 - self * self).powf(0.5);
        -Complex::I * (Complex::I * self + root).ln()
    }

    /// `pi/2 - asin(z)`
    pub fn acos(self) -> Self {
        FRAC_PI_2 - self.asin()
    }

    /// `(i/2) ln((i + z) / (i - z))`
    pub fn atan(self) -> Self {
        let q = (Complex::I + self) / (Complex::I - self);
        0.5_f64 * Complex::I * q.ln()
    }

    pub fn sinh(self) -> Self {
        // sinh(x + iy) = sinh(x)cos(y) + i cosh(x)sin(y)
        let (x, y) = (self.real(), self.imaginary());
        Self::new(x.sinh() * y.cos(), x.cosh() * y.sin())
    }

    pub fn cosh(self) -> Self {
        // cosh(x + iy) = cosh(x)cos(y) + i sinh(x)sin(y)
        let (x, y) = (self.real(), self.imaginary());
        Self::new(x.cosh() * y.cos(), x.sinh() * y.sin())
    }

    pub fn tanh(self) -> Self {
        // tanh(x + iy) = (sinh(2x) + i sin(2y)) / (cosh(2x) + cos(2y))
        let (x2, y2) = (2_f64 * self.real(), 2_f64 * self.imaginary());
        let d = x2.cosh() + y2.cos();
        Self::new(x2.sinh() / d, y2.sin() / d)
    }

    /// `ln(z + (z² + 1)^½)`
    pub fn asinh(self) -> Self {
        (self + (self * self + 1_f64).powf(0.5)).ln()
    }

    /// `ln(z + (z² - 1)^½)`
    pub fn acosh(self) -> Self {
        (self + (self * self - 1_f64).powf(0.5)).ln()
    }

    /// `½ ln((1 + z) / (1 - z))`
    pub fn atanh(self) -> Self {
        0.5_f64 * ((1_f64 + self) / (1_f64 - self)).ln()
    }
}
