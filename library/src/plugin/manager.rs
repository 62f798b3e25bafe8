use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use libloading::{Library, Symbol};
use log::{debug, warn};
use uuid::Uuid;

use crate::component::Component;
use crate::error::LibraryError;
use crate::plugin::{ComponentPlugin, ComponentPluginCreateFn};

struct PluginRepository {
    plugins: HashMap<String, Arc<dyn ComponentPlugin>>,
    components: HashMap<Uuid, Arc<dyn Component>>,
    // Loaded libraries must outlive every component they created.
    dynamic_libraries: Vec<Library>,
}

/// Registry of component plugins, built-in and dynamically loaded.
pub struct PluginManager {
    inner: RwLock<PluginRepository>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PluginRepository {
                plugins: HashMap::new(),
                components: HashMap::new(),
                dynamic_libraries: Vec::new(),
            }),
        }
    }

    /// Register a plugin and index its components by descriptor id.
    pub fn register_plugin(&self, plugin: Arc<dyn ComponentPlugin>) {
        let mut inner = self.inner.write().expect("plugin registry poisoned");
        debug!("registering component plugin '{}'", plugin.id());
        for component in plugin.components() {
            let descriptor = component.descriptor();
            if inner.components.insert(descriptor.id, component).is_some() {
                warn!(
                    "component '{}' ({}) was already registered, replacing it",
                    descriptor.name, descriptor.id
                );
            }
        }
        inner.plugins.insert(plugin.id().to_string(), plugin);
    }

    pub fn plugin(&self, id: &str) -> Option<Arc<dyn ComponentPlugin>> {
        let inner = self.inner.read().expect("plugin registry poisoned");
        inner.plugins.get(id).cloned()
    }

    pub fn component(&self, id: Uuid) -> Option<Arc<dyn Component>> {
        let inner = self.inner.read().expect("plugin registry poisoned");
        inner.components.get(&id).cloned()
    }

    /// All registered components, sorted by display name.
    pub fn components(&self) -> Vec<Arc<dyn Component>> {
        let inner = self.inner.read().expect("plugin registry poisoned");
        let mut components: Vec<_> = inner.components.values().cloned().collect();
        components.sort_by_key(|c| c.descriptor().name);
        components
    }

    /// Load every component plugin from `directory`. Returns the number of
    /// plugins loaded; files that are not loadable plugins are skipped with
    /// a warning.
    pub fn load_plugins_from_directory(&self, directory: &Path) -> Result<usize, LibraryError> {
        let mut loaded = 0;
        for entry in std::fs::read_dir(directory)? {
            let path = entry?.path();
            let is_dylib = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext, "so" | "dll" | "dylib"));
            if !is_dylib {
                continue;
            }
            match self.load_plugin_library(&path) {
                Ok(()) => loaded += 1,
                Err(err) => warn!("skipping '{}': {}", path.display(), err),
            }
        }
        Ok(loaded)
    }

    fn load_plugin_library(&self, path: &Path) -> Result<(), LibraryError> {
        unsafe {
            let library = Library::new(path)?;
            let raw = {
                let create: Symbol<ComponentPluginCreateFn> =
                    library.get(b"create_component_plugin")?;
                create()
            };
            if raw.is_null() {
                return Err(LibraryError::Plugin(format!(
                    "'{}' returned a null plugin",
                    path.display()
                )));
            }
            let plugin: Arc<dyn ComponentPlugin> = Arc::from(Box::from_raw(raw));
            self.register_plugin(plugin);
            let mut inner = self.inner.write().expect("plugin registry poisoned");
            inner.dynamic_libraries.push(library);
        }
        Ok(())
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}
