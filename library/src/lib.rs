//! Core library for the analysis-model reader node.
//!
//! Binds a visual-programming host's async-component contract to the
//! automation surface of a running structural-analysis application: a node
//! triggers a background worker that attaches to the application, pulls
//! joints, area objects and uniform area loads, and republishes them as
//! typed node outputs.

pub mod automation;
pub mod builtin;
pub mod component;
pub mod error;
pub mod model;
pub mod plugin;

use std::sync::Arc;

pub use error::LibraryError;

use crate::builtin::BuiltinComponentPlugin;
use crate::plugin::PluginManager;

/// Create a plugin manager with the built-in components registered.
pub fn create_plugin_manager() -> PluginManager {
    let manager = PluginManager::new();
    manager.register_plugin(Arc::new(BuiltinComponentPlugin::new()));
    manager
}
