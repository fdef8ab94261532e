//! Shot history API endpoints.

use crate::client::GaggiuinoClient;
use serde_json::Value;

/// Shots API for brew history.
pub struct ShotsApi<'a> {
    client: &'a GaggiuinoClient,
}

impl<'a> ShotsApi<'a> {
    pub(crate) fn new(client: &'a GaggiuinoClient) -> Self {
        Self { client }
    }

    /// Fetch the latest shot payload, a sequence whose first element is the id.
    pub async fn latest(&self) -> Option<Value> {
        self.client.http.fetch(&["api", "shots", "latest"]).await
    }

    /// Fetch the raw record of a shot by id.
    pub async fn get(&self, id: &str) -> Option<Value> {
        self.client.http.fetch(&["api", "shots", id]).await
    }
}
