use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::realfunction::RealFunction;

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────────────────────────────────────
//
// Coefficients are stored in ascending power order:
//
//   p(x) = c_0 + c_1·x + c_2·x^2 + ... + c_d·x^d
//
// An empty coefficient list is the zero polynomial.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Polynomial {
        Polynomial { coefficients }
    }

    pub fn zero() -> Polynomial {
        Polynomial { coefficients: Vec::new() }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Index of the highest stored coefficient; `0` for constants and for
    /// the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Horner evaluation from the highest power down.
    fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| f64::mul_add(acc, x, c))
    }

    pub fn derivative(&self) -> Polynomial {
        let coefficients = self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| k as f64 * c)
            .collect();
        Polynomial { coefficients }
    }

    /// Antiderivative with zero constant term.
    pub fn antiderivative(&self) -> Polynomial {
        if self.coefficients.is_empty() {
            return Polynomial::zero();
        }
        let mut coefficients = Vec::with_capacity(self.coefficients.len() + 1);
        coefficients.push(0.0);
        coefficients.extend(
            self.coefficients
                .iter()
                .enumerate()
                .map(|(k, &c)| c / (k + 1) as f64)
        );
        Polynomial { coefficients }
    }

    /// Exact ∫_a^b p(x) dx.
    pub fn definite_integral(&self, a: f64, b: f64) -> f64 {
        if a == b {
            return 0.0;
        }
        let primitive = self.antiderivative();
        primitive.evaluate(b) - primitive.evaluate(a)
    }
}

impl RealFunction for Polynomial {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}
