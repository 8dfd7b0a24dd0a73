use std::io::Write;

use calculus::configuration::Configuration;
use calculus::manager::managererror::ManagerError;
use calculus::math::constants::PI;
use calculus::math::integration::integrationerror::IntegrationError;
use calculus::math::integration::solver::Solver;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn runs_configured_integrals_in_file_order() {
    let file = write_config(r#"{
        "polynomial": [
            {"name": "square", "coefficients": [0.0, 0.0, 1.0]},
            {"name": "cubic", "coefficients": [1.0, -1.0, 0.0, 4.0]}
        ],
        "integral": [
            {"name": "square_area", "integrand": "square", "lower": 0.0, "upper": 1.0, "steps": 100},
            {"name": "cubic_area", "integrand": "cubic", "lower": 2.0, "upper": -1.0, "steps": 2},
            {"name": "sine_hump", "integrand": "sin", "lower": 0.0, "upper": 3.141592653589793}
        ]
    }"#);

    let config = Configuration::new();
    config.from_reader(file.path()).unwrap();
    let results = config.run_all().unwrap();

    let names: Vec<&str> = results.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["square_area", "cubic_area", "sine_hump"]);

    assert!((results[0].1 - 1.0 / 3.0).abs() < 1e-12);
    // ∫_2^-1 (1 - x + 4x^3) dx = -(3 - 1.5 + 15)
    assert!((results[1].1 + 16.5).abs() < 1e-12);
    assert!((results[2].1 - 2.0).abs() < 1e-7);
}

#[test]
fn unknown_integrand_name_fails() {
    let file = write_config(r#"{
        "integral": [{"name": "x", "integrand": "erf", "lower": 0.0, "upper": 1.0}]
    }"#);

    let config = Configuration::new();
    config.from_reader(file.path()).unwrap();
    let error = config.run_all().unwrap_err();
    assert!(matches!(error, ManagerError::NameNotFoundError(ref name) if name == "erf"));
}

#[test]
fn malformed_configuration_fails() {
    let file = write_config(r#"{"polynomial": [{"name": "p", "coefficients": "none"}]}"#);
    let config = Configuration::new();
    assert!(matches!(config.from_reader(file.path()), Err(ManagerError::JsonParseError(_))));
}

#[test]
fn library_scenarios() {
    let square = Solver::integrate(&|x: f64| x * x, 0.0, 1.0, 100).unwrap();
    assert!((square - 0.3333333333).abs() < 1e-9);

    let sine = Solver::integrate(&f64::sin, 0.0, PI, 100).unwrap();
    assert!((sine - 2.0).abs() < 1e-7);

    let linear = |x: f64| 3.0 * x + 1.0;
    assert!(matches!(
        Solver::integrate(&linear, 0.0, 10.0, 3),
        Err(IntegrationError::InvalidArgument { steps: 3 })
    ));
    assert!(matches!(
        Solver::integrate(&linear, 0.0, 10.0, -4),
        Err(IntegrationError::InvalidArgument { steps: -4 })
    ));
}
