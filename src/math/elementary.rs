//! Elementary functions on plain `f64`, mirroring the methods of
//! [`Scalar`](crate::math::scalar::Scalar).

pub fn sin(x: f64) -> f64 { x.sin() }

pub fn cos(x: f64) -> f64 { x.cos() }

pub fn tan(x: f64) -> f64 { x.tan() }

pub fn asin(x: f64) -> f64 { x.asin() }

pub fn acos(x: f64) -> f64 { x.acos() }

pub fn atan(x: f64) -> f64 { x.atan() }

pub fn sinh(x: f64) -> f64 { x.sinh() }

pub fn cosh(x: f64) -> f64 { x.cosh() }

pub fn tanh(x: f64) -> f64 { x.tanh() }

pub fn exp(x: f64) -> f64 { x.exp() }

/// Natural logarithm.
pub fn log(x: f64) -> f64 { x.ln() }

pub fn log10(x: f64) -> f64 { x.log10() }

pub fn sqrt(x: f64) -> f64 { x.sqrt() }

pub fn cbrt(x: f64) -> f64 { x.cbrt() }

pub fn abs(x: f64) -> f64 { x.abs() }

pub fn pow(x: f64, n: f64) -> f64 { x.powf(n) }

/// Looks up a one-argument elementary function by its name.
///
/// `pow` takes two arguments and is not listed.
pub fn by_name(name: &str) -> Option<fn(f64) -> f64> {
    let function: fn(f64) -> f64 = match name {
        "sin" => sin,
        "cos" => cos,
        "tan" => tan,
        "asin" => asin,
        "acos" => acos,
        "atan" => atan,
        "sinh" => sinh,
        "cosh" => cosh,
        "tanh" => tanh,
        "exp" => exp,
        "log" => log,
        "log10" => log10,
        "sqrt" => sqrt,
        "cbrt" => cbrt,
        "abs" => abs,
        _ => return None
    };
    Some(function)
}
