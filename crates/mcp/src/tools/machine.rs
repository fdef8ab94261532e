// Machine tools for live telemetry

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::helpers::first_entry;
use crate::tools::{json_schema_object, Tool};
use anyhow::Result;
use gaggiuino_core::format_status;
use gaggiuino_sdk::GaggiuinoClient;

pub const STATUS_UNAVAILABLE: &str = "Unable to fetch your espresso machine status.";

/// Tool reporting temperature, pressure and brew/steam state
pub struct StatusTool {
    client: GaggiuinoClient,
}

impl StatusTool {
    pub fn new(client: GaggiuinoClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for StatusTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getStatus".to_string(),
            description: "Get espresso machine status.".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let payload = self.client.machine().status().await;

        let text = match first_entry(payload) {
            Some(reading) => format_status(&reading),
            None => STATUS_UNAVAILABLE.to_string(),
        };

        Ok(CallToolResult::text(text))
    }
}
