//! Machine system API endpoints.

use crate::client::GaggiuinoClient;
use serde_json::Value;

/// System API for live machine telemetry.
pub struct MachineApi<'a> {
    client: &'a GaggiuinoClient,
}

impl<'a> MachineApi<'a> {
    pub(crate) fn new(client: &'a GaggiuinoClient) -> Self {
        Self { client }
    }

    /// Fetch the current status payload.
    ///
    /// The machine answers with a sequence whose first element is the
    /// telemetry reading. `None` if the machine could not be reached.
    pub async fn status(&self) -> Option<Value> {
        self.client.http.fetch(&["api", "system", "status"]).await
    }
}
