use std::sync::Arc;

use library::builtin::AreaLoadComponent;
use library::component::Component;
use library::plugin::ComponentPlugin;

pub struct AreaLoadsPlugin;

impl ComponentPlugin for AreaLoadsPlugin {
    fn id(&self) -> &'static str {
        "area_loads_plugin"
    }

    fn name(&self) -> String {
        "Area Load Reader".to_string()
    }

    fn category(&self) -> String {
        "Structure".to_string()
    }

    fn components(&self) -> Vec<Arc<dyn Component>> {
        vec![Arc::new(AreaLoadComponent::new())]
    }
}

#[allow(improper_ctypes_definitions)]
#[no_mangle]
pub extern "C" fn create_component_plugin() -> *mut dyn ComponentPlugin {
    let plugin: Box<dyn ComponentPlugin> = Box::new(AreaLoadsPlugin);
    Box::into_raw(plugin)
}
