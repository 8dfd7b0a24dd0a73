/// A real-valued function of one real variable.
///
/// Every `Fn(f64) -> f64` is a `RealFunction`, so closures and plain
/// function pointers can be handed to the integrator directly.
pub trait RealFunction {
    fn value(&self, x: f64) -> f64;
}

impl<F> RealFunction for F where
    F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
