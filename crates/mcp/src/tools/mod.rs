pub mod helpers;
pub mod machine;
pub mod shots;
mod registry;

pub use machine::StatusTool;
pub use registry::{json_schema_object, json_schema_string, Tool, ToolRegistry};
pub use shots::{LatestShotIdTool, ShotDataTool};

use gaggiuino_sdk::GaggiuinoClient;
use std::sync::Arc;

/// Registry holding the status, latest-shot and shot-data tools.
pub fn machine_registry(client: GaggiuinoClient, downsample: usize) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(StatusTool::new(client.clone())));
    registry.register(Arc::new(LatestShotIdTool::new(client.clone())));
    registry.register(Arc::new(ShotDataTool::with_downsample(client, downsample)));
    registry
}
