//! Read-only query surface of the running analysis model.

use thiserror::Error;

use crate::model::{Point3, UniformLoad};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unknown point object '{0}'")]
    UnknownPoint(String),
    #[error("unknown area object '{0}'")]
    UnknownArea(String),
    #[error("automation call failed: {0}")]
    Call(String),
}

/// The slice of the analysis application's automation API this crate reads.
///
/// Name enumerations return the complete, consistent list for the current
/// model state in one call; there is no pagination. Per-name queries mirror
/// the external API's by-key lookups. Calls are synchronous and may block;
/// callers are expected to run them off the UI thread.
pub trait StructuralModel: Send + Sync {
    /// Names of all point objects in the model.
    fn point_names(&self) -> Result<Vec<String>, ApiError>;

    /// Cartesian coordinates of one point object.
    fn point_coordinates(&self, name: &str) -> Result<Point3, ApiError>;

    /// Names of all area objects in the model.
    fn area_names(&self) -> Result<Vec<String>, ApiError>;

    /// Ordered point-object names forming the boundary of one area object.
    fn area_points(&self, name: &str) -> Result<Vec<String>, ApiError>;

    /// Uniform load assignments on one area object. One entry per
    /// (area, load-component) pair; empty when the area carries no loads.
    fn area_uniform_loads(&self, name: &str) -> Result<Vec<UniformLoad>, ApiError>;
}
