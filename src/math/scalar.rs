use std::fmt;
use std::ops::{
    Add,
    Div,
    Mul,
    Sub
};

use serde::{
    Deserialize,
    Serialize
};

/// A single `f64` wrapped as a value type.
///
/// Arithmetic follows IEEE 754: dividing by zero gives an infinity or NaN
/// instead of an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Scalar {
    value: f64
}

impl Scalar {
    pub fn new(value: f64) -> Scalar {
        Scalar { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn sin(&self) -> f64 {
        self.value.sin()
    }

    pub fn cos(&self) -> f64 {
        self.value.cos()
    }

    pub fn tan(&self) -> f64 {
        self.value.tan()
    }

    pub fn asin(&self) -> f64 {
        self.value.asin()
    }

    pub fn acos(&self) -> f64 {
        self.value.acos()
    }

    pub fn atan(&self) -> f64 {
        self.value.atan()
    }

    pub fn sinh(&self) -> f64 {
        self.value.sinh()
    }

    pub fn cosh(&self) -> f64 {
        self.value.cosh()
    }

    pub fn tanh(&self) -> f64 {
        self.value.tanh()
    }

    pub fn exp(&self) -> f64 {
        self.value.exp()
    }

    /// Natural logarithm.
    pub fn log(&self) -> f64 {
        self.value.ln()
    }

    pub fn log10(&self) -> f64 {
        self.value.log10()
    }

    pub fn sqrt(&self) -> f64 {
        self.value.sqrt()
    }

    pub fn cbrt(&self) -> f64 {
        self.value.cbrt()
    }

    pub fn abs(&self) -> f64 {
        self.value.abs()
    }

    pub fn pow(&self, n: f64) -> f64 {
        self.value.powf(n)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

impl From<Scalar> for f64 {
    fn from(scalar: Scalar) -> Self {
        scalar.value
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.value + rhs.value)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.value - rhs.value)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.value * rhs.value)
    }
}

impl Div for Scalar {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.value / rhs.value)
    }
}
