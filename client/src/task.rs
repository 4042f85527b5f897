use tracing::info;

use crate::api::{segment, Api};
use crate::error::ConnectResult;
use crate::models::{ConfigMap, TaskInfo, TaskStatus};

/// One task of a connector, as listed by `GET /connectors/{name}/tasks`
#[derive(Debug, Clone)]
pub struct Task {
    api: Api,
    pub id: u32,
    pub connector: String,
    pub config: ConfigMap,
}

impl Task {
    pub(crate) fn from_info(api: Api, info: TaskInfo) -> Self {
        Self {
            api,
            id: info.id.task,
            connector: info.id.connector,
            config: info.config,
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("/connectors/{}/tasks/{}/{}", segment(&self.connector), self.id, action)
    }

    /// `GET /connectors/{connector}/tasks/{id}/status`
    pub async fn status(&self) -> ConnectResult<TaskStatus> {
        self.api.get_as(&self.endpoint("status")).await
    }

    /// `POST /connectors/{connector}/tasks/{id}/restart`
    pub async fn restart(&self) -> ConnectResult<()> {
        self.api.post(&self.endpoint("restart"), None).await?;
        info!("[KafkaConnect] Restarted task {} of connector {}", self.id, self.connector);
        Ok(())
    }
}
