//! Typed node contract: descriptors, pins and pin values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::model::{Point3, Polyline};

/// Data type of a pin.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PinDataType {
    Boolean,
    Point,
    Text,
    Curve,
}

/// Direction of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinDirection {
    Input,
    Output,
}

/// Definition of a pin on a component.
#[derive(Clone, Debug)]
pub struct PinDefinition {
    /// Internal name used for data access (e.g. "execute").
    pub name: String,
    /// Display name shown in the UI (e.g. "Execute").
    pub display_name: String,
    pub direction: PinDirection,
    pub data_type: PinDataType,
    /// Short description shown as pin tooltip.
    pub description: String,
}

impl PinDefinition {
    pub fn input(name: &str, display_name: &str, data_type: PinDataType) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            direction: PinDirection::Input,
            data_type,
            description: String::new(),
        }
    }

    pub fn output(name: &str, display_name: &str, data_type: PinDataType) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            direction: PinDirection::Output,
            data_type,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Identity and menu placement of a component.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: Uuid,
    pub name: String,
    pub nickname: String,
    pub description: String,
    /// Host-menu category; placement only.
    pub category: String,
    /// Host-menu subcategory; placement only.
    pub subcategory: String,
}

impl NodeDescriptor {
    pub fn new(
        id: Uuid,
        name: &str,
        nickname: &str,
        description: &str,
        category: &str,
        subcategory: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            nickname: nickname.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        }
    }
}

/// A single pin value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Boolean(bool),
    Point(Point3),
    Text(String),
    Curve(Polyline),
}

impl Value {
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<&Point3> {
        match self {
            Value::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_curve(&self) -> Option<&Polyline> {
        match self {
            Value::Curve(c) => Some(c),
            _ => None,
        }
    }
}

/// Single-value inputs gathered for one solve, keyed by pin name.
#[derive(Clone, Debug, Default)]
pub struct InputData {
    values: HashMap<String, Value>,
}

impl InputData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, pin: &str, value: Value) {
        self.values.insert(pin.to_string(), value);
    }

    pub fn get(&self, pin: &str) -> Option<&Value> {
        self.values.get(pin)
    }

    /// Boolean value of a pin; `None` when absent or of another type.
    pub fn boolean(&self, pin: &str) -> Option<bool> {
        self.values.get(pin).and_then(Value::as_boolean)
    }
}

/// Per-pin value lists published by a completed solve, keyed by pin name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputData {
    lists: HashMap<String, Vec<Value>>,
}

impl OutputData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_list(&mut self, pin: &str, values: Vec<Value>) {
        self.lists.insert(pin.to_string(), values);
    }

    pub fn list(&self, pin: &str) -> Option<&[Value]> {
        self.lists.get(pin).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// A node type the host can place on the canvas.
///
/// `create_worker` returns a fresh worker per dispatch; workers never share
/// state across concurrent solves.
pub trait Component: Send + Sync {
    fn descriptor(&self) -> NodeDescriptor;
    fn input_pins(&self) -> Vec<PinDefinition>;
    fn output_pins(&self) -> Vec<PinDefinition>;
    fn create_worker(&self) -> Box<dyn crate::component::worker::Worker>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_boolean_access() {
        let mut inputs = InputData::new();
        inputs.set("execute", Value::Boolean(true));
        assert_eq!(inputs.boolean("execute"), Some(true));
        assert_eq!(inputs.boolean("missing"), None);

        inputs.set("execute", Value::Text("yes".to_string()));
        assert_eq!(inputs.boolean("execute"), None);
    }

    #[test]
    fn output_lists_round_trip() {
        let mut outputs = OutputData::new();
        outputs.set_list(
            "area_names",
            vec![Value::Text("A1".into()), Value::Text("A2".into())],
        );
        let list = outputs.list("area_names").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].as_text(), Some("A1"));
        assert!(outputs.list("points").is_none());
    }
}
