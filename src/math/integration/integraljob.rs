use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::realfunction::RealFunction;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::solver::Solver;

pub const DEFAULT_STEPS: i64 = 100;

fn default_steps() -> i64 {
    DEFAULT_STEPS
}

/// A named definite integral read from configuration: the integrand is
/// referenced by name and resolved when the job is run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegralJob {
    name: String,
    integrand: String,
    lower: f64,
    upper: f64,
    #[serde(default = "default_steps")]
    steps: i64
}

impl IntegralJob {
    pub fn new(name: String, integrand: String, lower: f64, upper: f64, steps: i64) -> IntegralJob {
        IntegralJob { name, integrand, lower, upper, steps }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn integrand(&self) -> &str {
        &self.integrand
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    pub fn run<F>(&self, f: &F) -> Result<f64, IntegrationError> where
        F: RealFunction + ?Sized {
        Solver::integrate(f, self.lower, self.upper, self.steps)
    }
}
