//! Attach-by-identifier lookup of a running application instance.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use log::debug;
use thiserror::Error;

use crate::automation::api::StructuralModel;

/// Well-known identifier the analysis application registers itself under.
pub const DEFAULT_APP_ID: &str = "StructuralAnalysis.Api.ActiveModel";

#[derive(Error, Debug)]
pub enum AttachError {
    #[error("no running instance registered under '{0}'")]
    NotRunning(String),
    #[error("instance lookup failed: {0}")]
    Lookup(String),
}

/// Process-wide table of running application instances, keyed by their
/// well-known identifiers.
///
/// A running host registers its live automation handle here; components
/// attach by identifier without launching anything. Attaching never creates
/// an instance — a missing entry is the "no running instance" failure the
/// caller must surface.
#[derive(Default)]
pub struct RunningInstanceTable {
    instances: RwLock<HashMap<String, Arc<dyn StructuralModel>>>,
}

static GLOBAL_TABLE: OnceLock<RunningInstanceTable> = OnceLock::new();

impl RunningInstanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared table for this process. Components use this unless a host
    /// hands them a private table.
    pub fn global() -> &'static RunningInstanceTable {
        GLOBAL_TABLE.get_or_init(Self::new)
    }

    /// Register a running instance under `app_id`, replacing any previous
    /// registration.
    pub fn register(&self, app_id: &str, model: Arc<dyn StructuralModel>) {
        if let Ok(mut instances) = self.instances.write() {
            debug!("registering running instance '{}'", app_id);
            instances.insert(app_id.to_string(), model);
        }
    }

    /// Remove the registration for `app_id`, returning the handle if one was
    /// registered.
    pub fn revoke(&self, app_id: &str) -> Option<Arc<dyn StructuralModel>> {
        self.instances.write().ok()?.remove(app_id)
    }

    /// Obtain a handle to the already-running instance registered under
    /// `app_id`.
    pub fn attach(&self, app_id: &str) -> Result<Arc<dyn StructuralModel>, AttachError> {
        let instances = self
            .instances
            .read()
            .map_err(|err| AttachError::Lookup(err.to_string()))?;
        instances
            .get(app_id)
            .cloned()
            .ok_or_else(|| AttachError::NotRunning(app_id.to_string()))
    }
}
