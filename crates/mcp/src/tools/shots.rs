// Shot history tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::helpers::{first_entry, is_empty_payload, value_to_text};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use gaggiuino_core::{format_shot, DEFAULT_DOWNSAMPLE};
use gaggiuino_sdk::GaggiuinoClient;
use serde::Deserialize;

pub const SHOT_UNAVAILABLE: &str = "Unable to fetch shot or no shot found.";

/// Tool returning the id of the most recent shot
pub struct LatestShotIdTool {
    client: GaggiuinoClient,
}

impl LatestShotIdTool {
    pub fn new(client: GaggiuinoClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for LatestShotIdTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getLatestShotId".to_string(),
            description: "Get latest espresso shot id.".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let latest = first_entry(self.client.shots().latest().await);

        let text = match latest {
            Some(id) => value_to_text(&id),
            None => SHOT_UNAVAILABLE.to_string(),
        };

        Ok(CallToolResult::text(text))
    }
}

/// Tool returning a rescaled, downsampled shot record as JSON
pub struct ShotDataTool {
    client: GaggiuinoClient,
    downsample: usize,
}

impl ShotDataTool {
    pub fn new(client: GaggiuinoClient) -> Self {
        Self::with_downsample(client, DEFAULT_DOWNSAMPLE)
    }

    pub fn with_downsample(client: GaggiuinoClient, downsample: usize) -> Self {
        Self {
            client,
            downsample: downsample.max(1),
        }
    }
}

/// Agents send ids both as strings and as bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShotId {
    Text(String),
    Number(u64),
}

impl ShotId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s.trim().to_string(),
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShotDataArgs {
    id: ShotId,
}

#[async_trait::async_trait]
impl Tool for ShotDataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "getShotData".to_string(),
            description: "Get espresso shot data for an id. Durations and datapoint series are \
                          rescaled to true units and series are downsampled."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "id": json_schema_string("Shot id")
                }),
                vec!["id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ShotDataArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for getShotData")?;

        let id = args.id.into_string();
        if id.is_empty() {
            return Ok(CallToolResult::error("Shot id must not be empty"));
        }

        let shot = match self.client.shots().get(&id).await {
            Some(shot) if !is_empty_payload(&shot) => shot,
            _ => return Ok(CallToolResult::text(SHOT_UNAVAILABLE)),
        };

        let text = format_shot(shot, self.downsample).context("Failed to render shot")?;
        Ok(CallToolResult::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaggiuino_sdk::RetryConfig;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GaggiuinoClient {
        GaggiuinoClient::builder()
            .base_url(server.uri())
            .timeout(Duration::from_millis(500))
            .retry_config(RetryConfig::no_retry())
            .build()
            .unwrap()
    }

    async fn mount_json(server: &MockServer, at: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_latest_shot_id_string() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/shots/latest", json!(["118"])).await;

        let result = LatestShotIdTool::new(client_for(&server))
            .execute(json!({}))
            .await
            .unwrap();

        assert_eq!(result.joined_text(), "118");
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_latest_shot_id_object_rendered_as_json() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/shots/latest", json!([{"lastShotId": "118"}])).await;

        let result = LatestShotIdTool::new(client_for(&server))
            .execute(json!({}))
            .await
            .unwrap();

        assert_eq!(result.joined_text(), r#"{"lastShotId":"118"}"#);
    }

    #[tokio::test]
    async fn test_latest_shot_id_empty() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/shots/latest", json!([])).await;

        let result = LatestShotIdTool::new(client_for(&server))
            .execute(json!({}))
            .await
            .unwrap();

        assert_eq!(result.joined_text(), SHOT_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_shot_data_formatted() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/shots/118",
            json!({
                "id": 118,
                "duration": 1234,
                "datapoints": {
                    "pressure": [0, 10, 20, 30, 40, 50],
                    "weightFlow": [1, 2, 3]
                }
            }),
        )
        .await;

        let result = ShotDataTool::new(client_for(&server))
            .execute(json!({"id": "118"}))
            .await
            .unwrap();

        let rendered: serde_json::Value = serde_json::from_str(&result.joined_text()).unwrap();
        assert_eq!(
            rendered,
            json!({
                "id": 118,
                "duration": 123.4,
                "datapoints": { "pressure": [0.0, 5.0] }
            })
        );
        assert!(result.joined_text().contains("\n  \"duration\": 123.4"));
    }

    #[tokio::test]
    async fn test_shot_data_numeric_id() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/shots/7", json!({"duration": 300})).await;

        let result = ShotDataTool::with_downsample(client_for(&server), 2)
            .execute(json!({"id": 7}))
            .await
            .unwrap();

        assert_eq!(result.joined_text(), "{\n  \"duration\": 30.0\n}");
    }

    #[tokio::test]
    async fn test_shot_data_missing_shot() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/shots/999"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let result = ShotDataTool::new(client_for(&server))
            .execute(json!({"id": "999"}))
            .await
            .unwrap();

        assert_eq!(result.joined_text(), SHOT_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_shot_data_empty_record() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/shots/3", json!({})).await;

        let result = ShotDataTool::new(client_for(&server))
            .execute(json!({"id": "3"}))
            .await
            .unwrap();

        assert_eq!(result.joined_text(), SHOT_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_shot_data_requires_id() {
        let server = MockServer::start().await;

        let result = ShotDataTool::new(client_for(&server))
            .execute(json!({}))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_shot_data_rejects_blank_id() {
        let server = MockServer::start().await;

        let result = ShotDataTool::new(client_for(&server))
            .execute(json!({"id": "  "}))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
    }
}
