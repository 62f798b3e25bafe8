//! Standalone egui-based graph node widget with a clickable run button.
//!
//! This crate renders a single data-flow node capsule with typed pins and a
//! button strip along its bottom edge, and turns clicks on that strip into
//! re-run requests. It has no domain-specific dependencies; hosts describe
//! the node with [`NodeButtonDisplay`] and react to the returned
//! [`NodeButtonOutput`].

pub mod interactions;
pub mod node_rendering;
pub mod state;
pub mod theme;
pub mod types;
pub mod widget;

pub use interactions::ButtonResponse;
pub use state::RunButtonState;
pub use theme::NodeButtonTheme;
pub use types::{NodeButtonDisplay, PinInfo};
pub use widget::{NodeButtonOutput, RunButtonNode};
