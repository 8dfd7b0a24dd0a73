use std::rc::Rc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::function::polynomial::Polynomial;

#[derive(Deserialize)]
struct PolynomialJsonProp {
    coefficients: Vec<f64>
}

fn get_polynomial_from_json(json_value: serde_json::Value) -> Result<Rc<Polynomial>, ManagerError> {
    let props: PolynomialJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(Rc::new(Polynomial::new(props.coefficients)))
}

pub struct PolynomialManager;

impl PolynomialManager {
    pub fn new() -> Manager<Rc<Polynomial>> {
        Manager::new(get_polynomial_from_json)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::PolynomialManager;
    use crate::manager::manager::IManager;
    use crate::manager::managererror::ManagerError;
    use crate::math::function::realfunction::RealFunction;

    #[test]
    fn builds_named_polynomials() {
        let manager = PolynomialManager::new();
        manager.insert_obj_from_json_vec(&[json!({"name": "line", "coefficients": [1.0, 2.0]})]).unwrap();
        let line = manager.get("line").unwrap();
        assert_eq!(line.value(3.0), 7.0);
    }

    #[test]
    fn coefficients_are_required() {
        let manager = PolynomialManager::new();
        let error = manager.insert_obj_from_json_vec(&[json!({"name": "line"})]).unwrap_err();
        assert!(matches!(error, ManagerError::JsonParseError(_)));
        assert!(!manager.contains("line"));
    }
}
