use kafka_connect_config::ClientConfig;

use crate::api::Api;
use crate::connectors::Connectors;
use crate::error::ConnectResult;
use crate::models::{PluginInfo, ServerInfo};
use crate::plugin::Plugin;

/// Entry point: a pinged connection to one Kafka Connect worker
#[derive(Debug, Clone)]
pub struct KafkaConnect {
    api: Api,
    connectors: Connectors,
}

impl KafkaConnect {
    /// Connect with default settings apart from the worker address
    pub async fn new(host: &str, port: u16, scheme: &str) -> ConnectResult<Self> {
        Self::connect(&ClientConfig::new(host, port).with_scheme(scheme)).await
    }

    /// Connect and ping the worker; fails if it cannot be reached
    pub async fn connect(config: &ClientConfig) -> ConnectResult<Self> {
        let api = Api::connect(config).await?;
        let connectors = Connectors::new(api.clone());
        Ok(Self { api, connectors })
    }

    /// Connect using `KAFKA_CONNECT_*` environment variables
    pub async fn from_env() -> ConnectResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::connect(&config).await
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn connectors(&self) -> &Connectors {
        &self.connectors
    }

    /// Worker info from the last ping
    pub fn info(&self) -> &ServerInfo {
        self.api.info()
    }

    /// Re-read worker info from `GET /`
    pub async fn ping(&mut self) -> ConnectResult<&ServerInfo> {
        self.api.ping().await
    }

    /// `GET /connector-plugins/`
    pub async fn plugins(&self) -> ConnectResult<Vec<Plugin>> {
        let infos: Vec<PluginInfo> = self.api.get_as("/connector-plugins/").await?;
        Ok(infos
            .into_iter()
            .map(|info| Plugin::from_info(self.api.clone(), info))
            .collect())
    }
}
