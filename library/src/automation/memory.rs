//! In-memory model backend.
//!
//! Stands in for a live application instance wherever one is not available:
//! the demo binary seeds one from a JSON file, and hosts can register one in
//! a [`RunningInstanceTable`](crate::automation::RunningInstanceTable) to
//! exercise components without the real application.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::automation::api::{ApiError, StructuralModel};
use crate::model::{Point3, UniformLoad};

/// A named area object and the ordered joint names of its boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaDefinition {
    pub name: String,
    pub points: Vec<String>,
}

/// A complete in-memory analysis model.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryModel {
    joints: BTreeMap<String, Point3>,
    areas: Vec<AreaDefinition>,
    #[serde(default)]
    loads: BTreeMap<String, Vec<UniformLoad>>,
}

impl InMemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_joint(&mut self, name: &str, location: Point3) -> &mut Self {
        self.joints.insert(name.to_string(), location);
        self
    }

    pub fn add_area(&mut self, name: &str, points: &[&str]) -> &mut Self {
        self.areas.push(AreaDefinition {
            name: name.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    pub fn add_uniform_load(&mut self, area: &str, load: UniformLoad) -> &mut Self {
        self.loads.entry(area.to_string()).or_default().push(load);
        self
    }
}

impl StructuralModel for InMemoryModel {
    fn point_names(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.joints.keys().cloned().collect())
    }

    fn point_coordinates(&self, name: &str) -> Result<Point3, ApiError> {
        self.joints
            .get(name)
            .copied()
            .ok_or_else(|| ApiError::UnknownPoint(name.to_string()))
    }

    fn area_names(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.areas.iter().map(|a| a.name.clone()).collect())
    }

    fn area_points(&self, name: &str) -> Result<Vec<String>, ApiError> {
        self.areas
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.points.clone())
            .ok_or_else(|| ApiError::UnknownArea(name.to_string()))
    }

    fn area_uniform_loads(&self, name: &str) -> Result<Vec<UniformLoad>, ApiError> {
        Ok(self.loads.get(name).cloned().unwrap_or_default())
    }
}
