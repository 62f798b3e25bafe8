//! Built-in components shipped with the library.

pub mod area_loads;

use std::sync::Arc;

use crate::automation::RunningInstanceTable;
use crate::component::Component;
use crate::plugin::ComponentPlugin;

pub use area_loads::AreaLoadComponent;

/// Plugin exposing the built-in components.
pub struct BuiltinComponentPlugin {
    table: Option<Arc<RunningInstanceTable>>,
}

impl BuiltinComponentPlugin {
    /// Built-ins attached through the process-wide instance table.
    pub fn new() -> Self {
        Self { table: None }
    }

    /// Built-ins attached through a private instance table.
    pub fn with_table(table: Arc<RunningInstanceTable>) -> Self {
        Self { table: Some(table) }
    }
}

impl Default for BuiltinComponentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentPlugin for BuiltinComponentPlugin {
    fn id(&self) -> &'static str {
        "builtin_components"
    }

    fn name(&self) -> String {
        "Built-in Components".to_string()
    }

    fn category(&self) -> String {
        "Structure".to_string()
    }

    fn components(&self) -> Vec<Arc<dyn Component>> {
        let component = match &self.table {
            Some(table) => AreaLoadComponent::with_table(Arc::clone(table)),
            None => AreaLoadComponent::new(),
        };
        vec![Arc::new(component)]
    }
}
