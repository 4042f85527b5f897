//! Request/response types matching the Kafka Connect REST API JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Connector or task configuration: every value is a string on the wire
pub type ConfigMap = BTreeMap<String, String>;

/// Worker info returned by `GET /`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub version: Option<String>,
    pub commit: Option<String>,
    pub kafka_cluster_id: Option<String>,
}

/// Lifecycle state of a connector or task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    Unassigned,
    Running,
    Paused,
    Failed,
    Restarting,
    Stopped,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            State::Unassigned => "UNASSIGNED",
            State::Running => "RUNNING",
            State::Paused => "PAUSED",
            State::Failed => "FAILED",
            State::Restarting => "RESTARTING",
            State::Stopped => "STOPPED",
            State::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorType {
    Source,
    Sink,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Identifies one task of one connector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId {
    pub connector: String,
    pub task: u32,
}

/// Entry of `GET /connectors/{name}/tasks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInfo {
    pub id: TaskId,
    #[serde(default)]
    pub config: ConfigMap,
}

/// Returned by `GET /connectors/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorInfo {
    pub name: String,
    #[serde(default)]
    pub config: ConfigMap,
    #[serde(default)]
    pub tasks: Vec<TaskId>,
    #[serde(rename = "type", default)]
    pub connector_type: ConnectorType,
}

/// Returned by `GET /connectors/{name}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorStatus {
    pub name: String,
    pub connector: ConnectorState,
    #[serde(default)]
    pub tasks: Vec<TaskStatus>,
    #[serde(rename = "type", default)]
    pub connector_type: ConnectorType,
}

impl ConnectorStatus {
    /// Tasks currently in the `FAILED` state
    pub fn failed_tasks(&self) -> impl Iterator<Item = &TaskStatus> {
        self.tasks.iter().filter(|t| t.state == State::Failed)
    }
}

/// State of the connector itself inside a `ConnectorStatus`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorState {
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub worker_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Returned by `GET /connectors/{name}/tasks/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: u32,
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub worker_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Entry of `GET /connector-plugins/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    pub class: String,
    #[serde(rename = "type", default)]
    pub plugin_type: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body of `POST /connectors`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConnectorRequest {
    pub name: String,
    pub config: ConfigMap,
}

/// Returned by `PUT /connector-plugins/{class}/config/validate/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfos {
    pub name: String,
    pub error_count: u32,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub configs: Vec<ConfigInfo>,
}

impl ConfigInfos {
    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }

    /// `(key, errors)` for every key the worker rejected
    pub fn errors(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.configs
            .iter()
            .filter(|c| !c.value.errors.is_empty())
            .map(|c| (c.value.name.as_str(), c.value.errors.as_slice()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub definition: ConfigKeyInfo,
    pub value: ConfigValueInfo,
}

/// Definition of a single config key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigKeyInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub config_type: String,
    pub required: bool,
    pub default_value: Option<String>,
    pub importance: Option<String>,
    pub documentation: Option<String>,
    pub group: Option<String>,
    pub order: i32,
    pub width: Option<String>,
    pub display_name: Option<String>,
    pub dependents: Vec<String>,
}

/// Submitted value and validation outcome of a single config key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValueInfo {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub recommended_values: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}
