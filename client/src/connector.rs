use tracing::info;

use crate::api::{segment, Api};
use crate::connector_config::{config_endpoint, ConnectorConfig};
use crate::error::ConnectResult;
use crate::models::{ConfigMap, ConnectorInfo, ConnectorStatus, TaskInfo};
use crate::task::Task;

/// Handle to a named connector.
///
/// Creating a handle never talks to the worker; each method issues one request.
#[derive(Debug, Clone)]
pub struct Connector {
    api: Api,
    name: String,
}

impl Connector {
    pub(crate) fn new(api: Api, name: impl Into<String>) -> Self {
        Self {
            api,
            name: name.into(),
        }
    }

    /// Connector name as used in every endpoint path
    pub fn name(&self) -> &str {
        &self.name
    }

    fn endpoint(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            format!("/connectors/{}", segment(&self.name))
        } else {
            format!("/connectors/{}/{}", segment(&self.name), suffix)
        }
    }

    /// `GET /connectors/{name}`
    pub async fn info(&self) -> ConnectResult<ConnectorInfo> {
        self.api.get_as(&self.endpoint("")).await
    }

    /// Load the live configuration
    pub async fn config(&self) -> ConnectResult<ConnectorConfig> {
        ConnectorConfig::load(self.api.clone(), &self.name).await
    }

    /// Replace the whole configuration with `PUT /connectors/{name}/config`
    pub async fn set_config(&self, config: &ConfigMap) -> ConnectResult<()> {
        self.api
            .put(&config_endpoint(&self.name), Some(serde_json::to_value(config)?))
            .await?;
        Ok(())
    }

    /// `GET /connectors/{name}/status`
    pub async fn status(&self) -> ConnectResult<ConnectorStatus> {
        self.api.get_as(&self.endpoint("status")).await
    }

    /// `POST /connectors/{name}/restart`
    pub async fn restart(&self) -> ConnectResult<()> {
        self.api.post(&self.endpoint("restart"), None).await?;
        info!("[KafkaConnect] Restarted connector {}", self.name);
        Ok(())
    }

    /// `PUT /connectors/{name}/pause`
    pub async fn pause(&self) -> ConnectResult<()> {
        self.api.put(&self.endpoint("pause"), None).await?;
        info!("[KafkaConnect] Paused connector {}", self.name);
        Ok(())
    }

    /// `PUT /connectors/{name}/resume`
    pub async fn resume(&self) -> ConnectResult<()> {
        self.api.put(&self.endpoint("resume"), None).await?;
        info!("[KafkaConnect] Resumed connector {}", self.name);
        Ok(())
    }

    /// `GET /connectors/{name}/tasks`
    pub async fn tasks(&self) -> ConnectResult<Vec<Task>> {
        let infos: Vec<TaskInfo> = self.api.get_as(&self.endpoint("tasks")).await?;
        Ok(infos
            .into_iter()
            .map(|info| Task::from_info(self.api.clone(), info))
            .collect())
    }
}
