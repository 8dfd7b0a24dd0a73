use std::cell::{
    Ref,
    RefCell
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::elementary;
use crate::math::function::polynomial::Polynomial;
use crate::math::function::polynomialmanager::PolynomialManager;
use crate::math::function::realfunction::RealFunction;
use crate::math::integration::integraljob::IntegralJob;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    polynomial: Vec<serde_json::Value>,
    #[serde(default)]
    integral: Vec<IntegralJob>
}

pub struct Configuration {
    polynomial_manager: Manager<Rc<Polynomial>>,
    integral_jobs_cell: RefCell<Vec<IntegralJob>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            polynomial_manager: PolynomialManager::new(),
            integral_jobs_cell: RefCell::new(Vec::new())
        }
    }

    pub fn integral_jobs(&self) -> Ref<'_, Vec<IntegralJob>> {
        self.integral_jobs_cell.borrow()
    }

    pub fn add_integral_job(&self, job: IntegralJob) {
        self.integral_jobs_cell.borrow_mut().push(job);
    }

    pub fn from_reader<P>(&self, file_path: P) -> Result<(), ManagerError> where
        P: AsRef<Path> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json(json_value)
    }

    /// Loads polynomials and integral jobs. A configuration that fails to
    /// parse leaves the previously loaded state untouched.
    pub fn from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        self.polynomial_manager.insert_obj_from_json_vec(&json_prop.polynomial)?;
        info!(
            polynomials = json_prop.polynomial.len(),
            integrals = json_prop.integral.len(),
            "configuration loaded"
        );
        self.integral_jobs_cell.borrow_mut().extend(json_prop.integral);
        Ok(())
    }

    /// Resolves an integrand name. Configured polynomials take precedence
    /// over the built-in elementary functions.
    pub fn integrand(&self, name: &str) -> Result<Rc<dyn RealFunction>, ManagerError> {
        if self.polynomial_manager.contains(name) {
            let polynomial = self.polynomial_manager.get(name)?;
            return Ok(polynomial as Rc<dyn RealFunction>);
        }
        elementary::by_name(name)
            .map(|function| Rc::new(function) as Rc<dyn RealFunction>)
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn run(&self, job: &IntegralJob) -> Result<f64, ManagerError> {
        let integrand = self.integrand(job.integrand())?;
        let value = job.run(integrand.as_ref())?;
        info!(name = job.name(), value, "integral evaluated");
        Ok(value)
    }

    /// Runs every configured job in file order, stopping at the first
    /// failure.
    pub fn run_all(&self) -> Result<Vec<(String, f64)>, ManagerError> {
        self.integral_jobs()
            .iter()
            .map(|job| self.run(job).map(|value| (job.name().to_owned(), value)))
            .collect()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
