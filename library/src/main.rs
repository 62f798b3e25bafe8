use std::env;
use std::error::Error;
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{error, info, warn};

use library::automation::{InMemoryModel, RunningInstanceTable, DEFAULT_APP_ID};
use library::component::{AsyncNode, InputData, MessageLevel, SolveEvent, Value};
use library::create_plugin_manager;
use library::model::{Point3, UniformLoad};

fn sample_model() -> InMemoryModel {
    let mut model = InMemoryModel::new();
    model
        .add_joint("J1", Point3::new(0.0, 0.0, 3.0))
        .add_joint("J2", Point3::new(6.0, 0.0, 3.0))
        .add_joint("J3", Point3::new(6.0, 4.0, 3.0))
        .add_joint("J4", Point3::new(0.0, 4.0, 3.0))
        .add_area("Roof", &["J1", "J2", "J3", "J4"])
        .add_uniform_load("Roof", UniformLoad::new("DEAD", "Global", 3, -0.005))
        .add_uniform_load("Roof", UniformLoad::new("LIVE", "Global", 3, -0.002));
    model
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // With a path argument the model is seeded from a JSON file, otherwise a
    // small built-in sample stands in for the running application.
    let args: Vec<String> = env::args().collect();
    let model = match args.get(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => sample_model(),
    };
    RunningInstanceTable::global().register(DEFAULT_APP_ID, Arc::new(model));

    let manager = create_plugin_manager();
    let component = manager
        .components()
        .into_iter()
        .next()
        .ok_or("no components registered")?;
    info!("solving '{}'", component.descriptor().name);

    let mut node = AsyncNode::new(component);
    let mut inputs = InputData::new();
    inputs.set("execute", Value::Boolean(true));
    node.solve(&inputs)?;

    loop {
        let solving = node.is_solving();
        for event in node.update() {
            match event {
                SolveEvent::Progress { label, fraction } => {
                    info!("[{:>3.0}%] {}", fraction * 100.0, label)
                }
                SolveEvent::Message { level, text } => match level {
                    MessageLevel::Error => error!("{}", text),
                    MessageLevel::Warning => warn!("{}", text),
                    MessageLevel::Remark => info!("{}", text),
                },
                SolveEvent::Done => info!("solve completed"),
            }
        }
        if !solving {
            break;
        }
        thread::sleep(Duration::from_millis(20));
    }

    let outputs = node.outputs();
    let points = outputs.list("points").unwrap_or_default();
    let areas = outputs.list("area_names").unwrap_or_default();
    let boundaries = outputs.list("area_boundaries").unwrap_or_default();
    let records = outputs.list("load_values").unwrap_or_default();

    println!("points: {}", points.len());
    println!(
        "areas: {}",
        areas
            .iter()
            .filter_map(|v| v.as_text())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("boundaries: {}", boundaries.len());
    println!("load records:");
    for record in records.iter().filter_map(|v| v.as_text()) {
        println!("  {}", record);
    }

    Ok(())
}
