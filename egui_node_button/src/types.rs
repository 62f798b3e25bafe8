//! Lightweight data types for the node widget.

use uuid::Uuid;

/// Information about a pin for rendering.
#[derive(Clone, Debug)]
pub struct PinInfo {
    pub name: String,
    pub display_name: String,
    pub is_output: bool,
}

impl PinInfo {
    pub fn input(name: &str, display_name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            is_output: false,
        }
    }

    pub fn output(name: &str, display_name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            is_output: true,
        }
    }
}

/// How a node with a run button should be displayed.
#[derive(Clone, Debug)]
pub struct NodeButtonDisplay {
    pub id: Uuid,
    pub title: String,
    pub button_label: String,
    pub inputs: Vec<PinInfo>,
    pub outputs: Vec<PinInfo>,
}

impl NodeButtonDisplay {
    pub fn new(title: &str, button_label: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            button_label: button_label.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<PinInfo>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PinInfo>) -> Self {
        self.outputs = outputs;
        self
    }
}
