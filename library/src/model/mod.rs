//! Geometry and load data pulled from the analysis model in one read cycle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A 3D location in the analysis model's cartesian space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An ordered boundary through joint locations. Closed by convention; the
/// first vertex is not repeated at the end.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point3>,
}

impl Polyline {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point3>> for Polyline {
    fn from(points: Vec<Point3>) -> Self {
        Self { points }
    }
}

/// Joint name → coordinates for the current read cycle. Rebuilt from scratch
/// on every run, never merged with a prior cycle.
pub type JointMap = BTreeMap<String, Point3>;

/// One uniform load component assigned to an area object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformLoad {
    /// Load pattern name (e.g. "DEAD").
    pub pattern: String,
    /// Coordinate system the direction is expressed in (e.g. "Global").
    pub csys: String,
    /// Direction code as reported by the analysis application.
    pub direction: i32,
    /// Load magnitude.
    pub value: f64,
}

impl UniformLoad {
    pub fn new(pattern: &str, csys: &str, direction: i32, value: f64) -> Self {
        Self {
            pattern: pattern.to_string(),
            csys: csys.to_string(),
            direction,
            value,
        }
    }

    /// Serialize this load as one delimited record line. Field order is
    /// area, pattern, csys, direction, value; embedded commas are not
    /// escaped.
    pub fn to_record(&self, area: &str) -> String {
        format!(
            "{},{},{},{},{}",
            area, self.pattern, self.csys, self.direction, self.value
        )
    }
}

/// Everything one successful run pulls out of the analysis model. Owned by
/// the worker for the duration of the run and handed over as a whole on
/// completion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub joints: JointMap,
    pub area_names: Vec<String>,
    pub area_boundaries: Vec<Polyline>,
    pub load_records: Vec<String>,
}
