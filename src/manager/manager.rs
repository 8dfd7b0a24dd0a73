use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use super::managererror::ManagerError;


/// Every configurable object carries a `name` under which it is registered.
#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    /// Builds one object from its JSON form without registering it.
    fn build_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    /// Registers every object or none: all entries are built before the
    /// first one is inserted. Later entries replace earlier ones of the same
    /// name.
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let objs = json_vec
            .iter()
            .map(|j| self.build_obj_from_json(j.clone()))
            .collect::<Result<Vec<(String, V)>, ManagerError>>()?;
        self.map().extend(objs);
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn build_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!(name = %named_object.name, "built object");
        Ok((named_object.name, v))
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Weight {
        value: f64
    }

    fn weight_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        let weight: Weight = ManagerError::from_json_or_json_parse_error(json_value)?;
        Ok(weight.value)
    }

    #[test]
    fn insert_and_get() {
        let manager = Manager::new(weight_from_json);
        manager.insert_obj_from_json_vec(&[json!({"name": "half", "value": 0.5})]).unwrap();
        assert_eq!(manager.get("half").unwrap(), 0.5);
        assert!(manager.contains("half"));
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        let manager = Manager::new(weight_from_json);
        let error = manager.build_obj_from_json(json!({"value": 0.5})).unwrap_err();
        assert!(matches!(error, ManagerError::JsonParseError(_)));
    }

    #[test]
    fn unknown_name() {
        let manager = Manager::new(weight_from_json);
        let error = manager.get("nothing").unwrap_err();
        assert!(matches!(error, ManagerError::NameNotFoundError(ref name) if name == "nothing"));
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let manager = Manager::new(weight_from_json);
        manager.insert_obj_from_json_vec(&[
            json!({"name": "w", "value": 1.0}),
            json!({"name": "w", "value": 2.0}),
            json!({"name": "v", "value": 3.0})
        ]).unwrap();
        assert_eq!(manager.get("w").unwrap(), 2.0);
        assert_eq!(manager.get("v").unwrap(), 3.0);
    }

    #[test]
    fn failed_batch_registers_nothing() {
        let manager = Manager::new(weight_from_json);
        let error = manager.insert_obj_from_json_vec(&[
            json!({"name": "good", "value": 1.0}),
            json!({"name": "bad", "value": "heavy"})
        ]).unwrap_err();
        assert!(matches!(error, ManagerError::JsonParseError(_)));
        assert!(!manager.contains("good"));
        assert!(!manager.contains("bad"));
    }
}
