//! Component that reads joints, area objects and uniform area loads from
//! the running analysis model.

use std::sync::Arc;

use log::{debug, warn};
use uuid::Uuid;

use crate::automation::{RunningInstanceTable, StructuralModel, DEFAULT_APP_ID};
use crate::component::{
    Component, InputData, NodeDescriptor, OutputData, PinDataType, PinDefinition, SolveError,
    Value, WorkContext, WorkStatus, Worker,
};
use crate::model::{JointMap, ModelSnapshot, Polyline};

pub const EXECUTE_PIN: &str = "execute";
pub const POINTS_PIN: &str = "points";
pub const AREA_NAMES_PIN: &str = "area_names";
pub const AREA_BOUNDARIES_PIN: &str = "area_boundaries";
pub const LOAD_VALUES_PIN: &str = "load_values";

const COMPONENT_ID: Uuid = Uuid::from_u128(0x7c1f0d2e_4b8a_4f3a_9e61_2d5c8b7a9f10);

/// "Read Area Loads" node: one boolean trigger in, the pulled model data out.
pub struct AreaLoadComponent {
    table: Option<Arc<RunningInstanceTable>>,
    app_id: String,
}

impl AreaLoadComponent {
    /// Attaches through the process-wide instance table under the default
    /// application identifier.
    pub fn new() -> Self {
        Self {
            table: None,
            app_id: DEFAULT_APP_ID.to_string(),
        }
    }

    /// Attaches through a private instance table.
    pub fn with_table(table: Arc<RunningInstanceTable>) -> Self {
        Self {
            table: Some(table),
            app_id: DEFAULT_APP_ID.to_string(),
        }
    }

    pub fn with_app_id(mut self, app_id: &str) -> Self {
        self.app_id = app_id.to_string();
        self
    }
}

impl Default for AreaLoadComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AreaLoadComponent {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor::new(
            COMPONENT_ID,
            "Read Area Loads",
            "RAL",
            "Reads joints, area objects and uniform area loads from the running analysis model",
            "Structure",
            "Model Exchange",
        )
    }

    fn input_pins(&self) -> Vec<PinDefinition> {
        vec![
            PinDefinition::input(EXECUTE_PIN, "Execute", PinDataType::Boolean)
                .with_description("Refresh the pulled model data"),
        ]
    }

    fn output_pins(&self) -> Vec<PinDefinition> {
        vec![
            PinDefinition::output(POINTS_PIN, "Points", PinDataType::Point)
                .with_description("Coordinates of the points retrieved"),
            PinDefinition::output(AREA_NAMES_PIN, "Area Names", PinDataType::Text)
                .with_description("Names of the area objects retrieved"),
            PinDefinition::output(AREA_BOUNDARIES_PIN, "Area Boundaries", PinDataType::Curve)
                .with_description("Boundary curves of the area objects retrieved"),
            PinDefinition::output(LOAD_VALUES_PIN, "Load Values", PinDataType::Text)
                .with_description("Uniform loads applied to the area objects retrieved"),
        ]
    }

    fn create_worker(&self) -> Box<dyn Worker> {
        Box::new(AreaLoadWorker {
            execute: false,
            table: self.table.clone(),
            app_id: self.app_id.clone(),
        })
    }
}

struct AreaLoadWorker {
    execute: bool,
    table: Option<Arc<RunningInstanceTable>>,
    app_id: String,
}

impl AreaLoadWorker {
    fn table(&self) -> &RunningInstanceTable {
        self.table
            .as_deref()
            .unwrap_or_else(|| RunningInstanceTable::global())
    }

    fn read_joints(model: &dyn StructuralModel) -> Result<JointMap, SolveError> {
        let mut joints = JointMap::new();
        for name in model.point_names()? {
            let coordinates = model.point_coordinates(&name)?;
            joints.insert(name, coordinates);
        }
        Ok(joints)
    }

    fn read_area_objects(
        model: &dyn StructuralModel,
        joints: &JointMap,
    ) -> Result<(Vec<String>, Vec<Polyline>), SolveError> {
        let mut names = Vec::new();
        let mut boundaries = Vec::new();
        for area in model.area_names()? {
            let mut boundary = Polyline::new();
            for joint_name in model.area_points(&area)? {
                let point =
                    joints
                        .get(&joint_name)
                        .copied()
                        .ok_or_else(|| SolveError::UnknownJointReference {
                            area: area.clone(),
                            joint: joint_name.clone(),
                        })?;
                boundary.push(point);
            }
            boundaries.push(boundary);
            names.push(area);
        }
        Ok((names, boundaries))
    }

    fn publish(snapshot: ModelSnapshot) -> OutputData {
        let mut outputs = OutputData::new();
        outputs.set_list(
            POINTS_PIN,
            snapshot.joints.values().map(|p| Value::Point(*p)).collect(),
        );
        outputs.set_list(
            AREA_NAMES_PIN,
            snapshot.area_names.into_iter().map(Value::Text).collect(),
        );
        outputs.set_list(
            AREA_BOUNDARIES_PIN,
            snapshot
                .area_boundaries
                .into_iter()
                .map(Value::Curve)
                .collect(),
        );
        outputs.set_list(
            LOAD_VALUES_PIN,
            snapshot.load_records.into_iter().map(Value::Text).collect(),
        );
        outputs
    }
}

impl Worker for AreaLoadWorker {
    fn gather(&mut self, inputs: &InputData) -> Result<(), SolveError> {
        self.execute = inputs.boolean(EXECUTE_PIN).unwrap_or(false);
        Ok(())
    }

    fn work(&mut self, ctx: &WorkContext) -> Result<WorkStatus, SolveError> {
        if !self.execute {
            return Ok(WorkStatus::Skipped);
        }

        ctx.progress("Start", 0.0);
        if ctx.is_cancelled() {
            return Ok(WorkStatus::Cancelled);
        }

        // Attach failure is recoverable: report it once and let the
        // remaining steps run as no-ops, so the run still completes with an
        // empty snapshot.
        let model = match self.table().attach(&self.app_id) {
            Ok(model) => {
                debug!("attached to running instance '{}'", self.app_id);
                Some(model)
            }
            Err(err) => {
                warn!("attach failed: {}", err);
                ctx.error("No running instance of the program found or failed to attach.");
                None
            }
        };

        if ctx.is_cancelled() {
            return Ok(WorkStatus::Cancelled);
        }
        let joints = match &model {
            Some(model) => Self::read_joints(model.as_ref())?,
            None => JointMap::new(),
        };

        if ctx.is_cancelled() {
            return Ok(WorkStatus::Cancelled);
        }
        let (area_names, area_boundaries) = match &model {
            Some(model) => Self::read_area_objects(model.as_ref(), &joints)?,
            None => (Vec::new(), Vec::new()),
        };

        if ctx.is_cancelled() {
            return Ok(WorkStatus::Cancelled);
        }
        let mut load_records = Vec::new();
        if let Some(model) = &model {
            let total = area_names.len();
            for (index, area) in area_names.iter().enumerate() {
                if ctx.is_cancelled() {
                    return Ok(WorkStatus::Cancelled);
                }
                for load in model.area_uniform_loads(area)? {
                    load_records.push(load.to_record(area));
                }
                // Reported after this area's records land, with the fraction
                // of areas completed before it: the last of n areas reports
                // (n-1)/n, never 1.0.
                ctx.progress(area, index as f64 / total as f64);
            }
        }

        let snapshot = ModelSnapshot {
            joints,
            area_names,
            area_boundaries,
            load_records,
        };
        Ok(WorkStatus::Completed(Self::publish(snapshot)))
    }
}
