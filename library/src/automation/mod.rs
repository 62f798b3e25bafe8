//! Automation surface of the external structural-analysis application.
//!
//! The application itself is closed; everything in this crate talks to it
//! through the [`StructuralModel`] trait. Attaching to an already-running
//! instance goes through the [`RunningInstanceTable`], the in-process
//! equivalent of the platform's active-object lookup.

pub mod api;
pub mod attach;
pub mod memory;

pub use api::{ApiError, StructuralModel};
pub use attach::{AttachError, RunningInstanceTable, DEFAULT_APP_ID};
pub use memory::{AreaDefinition, InMemoryModel};
