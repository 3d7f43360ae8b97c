use std::ops::{Add, Div, Mul, Neg, Sub};
use crate::complex::complex::Complex;

// (a + i b) + (c + i d) == (a + c) + i (b + d)
impl Add<Complex> for Complex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.real() + other.real(), self.imaginary() + other.imaginary())
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: f64) -> Self::Output {
        Self::Output::new(self.real() + other, self.imaginary())
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Self::Output {
        other + self
    }
}

// (a + i b) - (c + i d) == (a - c) + i (b - d)
impl Sub<Complex> for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.real() - other.real(), self.imaginary() - other.imaginary())
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: f64) -> Self::Output {
        Self::Output::new(self.real() - other, self.imaginary())
    }
}

// s - (c + i d) == (s - c) - i d, the imaginary part flips sign
impl Sub<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Self::Output {
        Complex::new(self - other.real(), -other.imaginary())
    }
}

// (a + i b)(c + i d) == (ac - bd) + i (bc + ad)
impl Mul<Complex> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self::Output {
        let re = self.real() * other.real() - self.imaginary() * other.imaginary();
        let im = self.imaginary() * other.real() + self.real() * other.imaginary();
        Self::Output::new(re, im)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: f64) -> Self::Output {
        Self::Output::new(self.real() * other, self.imaginary() * other)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Self::Output {
        other * self
    }
}

/// `(a + i b) / (c + i d) == ((ac + bd) + i (bc - ad)) / (c² + d²)`
///
/// A zero divisor is not special-cased: the result carries whatever
/// infinities and NaNs IEEE-754 division by zero produces. Check
/// [`Complex::is_zero`] first when that matters.
impl Div<Complex> for Complex {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self::Output {
        let (a, b) = (self.real(), self.imaginary());
        let (c, d) = (other.real(), other.imaginary());
        let denom = c * c + d * d;
        Self::Output::new((a * c + b * d) / denom, (b * c - a * d) / denom)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, other: f64) -> Self::Output {
        Self::Output::new(self.real() / other, self.imaginary() / other)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn div(self, other: Complex) -> Self::Output {
        Complex::from(self) / other
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.real(), -self.imaginary())
    }
}

/// A complex value equals a real one when its imaginary part is zero of either sign.
impl PartialEq<f64> for Complex {
    fn eq(&self, other: &f64) -> bool {
        self.real() == *other && self.imaginary() == 0_f64
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, other: &Complex) -> bool {
        other == self
    }
}
