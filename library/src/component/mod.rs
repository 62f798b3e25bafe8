//! The async-component contract a host embeds.
//!
//! A [`Component`] declares a node's identity and typed pins and produces a
//! fresh [`Worker`] per dispatch. [`SolveHandle`] runs the worker on a
//! background thread, streaming [`SolveEvent`]s back to the foreground;
//! [`AsyncNode`] is the node façade gluing the two together and holding the
//! node's published outputs between solves.

pub mod async_node;
pub mod events;
pub mod node;
pub mod solver;
pub mod worker;

pub use async_node::AsyncNode;
pub use events::{MessageLevel, Reporter, SolveEvent};
pub use node::{
    Component, InputData, NodeDescriptor, OutputData, PinDataType, PinDefinition, PinDirection,
    Value,
};
pub use solver::SolveHandle;
pub use worker::{SolveError, WorkContext, WorkStatus, Worker};
