use tracing::info;

use crate::api::{segment, Api};
use crate::connector::Connector;
use crate::connector_config::config_endpoint;
use crate::error::ConnectResult;
use crate::models::{ConfigMap, CreateConnectorRequest};

/// Map-like view of every connector on the worker, keyed by name
#[derive(Debug, Clone)]
pub struct Connectors {
    api: Api,
}

impl Connectors {
    /// Collection backed by `api`
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Handle for `name`; does not check that the connector exists
    pub fn get(&self, name: &str) -> Connector {
        Connector::new(self.api.clone(), name)
    }

    /// `GET /connectors`
    pub async fn names(&self) -> ConnectResult<Vec<String>> {
        self.api.get_as("/connectors").await
    }

    /// Number of connectors, from `GET /connectors`
    pub async fn len(&self) -> ConnectResult<usize> {
        Ok(self.names().await?.len())
    }

    /// True when the worker runs no connectors
    pub async fn is_empty(&self) -> ConnectResult<bool> {
        Ok(self.names().await?.is_empty())
    }

    /// True when `name` is among `GET /connectors`
    pub async fn contains(&self, name: &str) -> ConnectResult<bool> {
        Ok(self.names().await?.iter().any(|n| n == name))
    }

    /// One handle per connector currently on the worker
    pub async fn list(&self) -> ConnectResult<Vec<Connector>> {
        Ok(self
            .names()
            .await?
            .into_iter()
            .map(|name| Connector::new(self.api.clone(), name))
            .collect())
    }

    /// Create `name`, or replace its config if it already exists.
    ///
    /// A missing `name` key in `config` is filled in; an existing one is kept.
    pub async fn insert(&self, name: &str, mut config: ConfigMap) -> ConnectResult<Connector> {
        config
            .entry("name".to_string())
            .or_insert_with(|| name.to_string());

        if self.contains(name).await? {
            self.api
                .put(&config_endpoint(name), Some(serde_json::to_value(&config)?))
                .await?;
            info!("[KafkaConnect] Updated connector {}", name);
        } else {
            let request = CreateConnectorRequest {
                name: name.to_string(),
                config,
            };
            self.api
                .post("/connectors", Some(serde_json::to_value(&request)?))
                .await?;
            info!("[KafkaConnect] Created connector {}", name);
        }

        Ok(self.get(name))
    }

    /// Copy the configuration of `source` to a connector called `name`
    pub async fn insert_from(&self, name: &str, source: &Connector) -> ConnectResult<Connector> {
        let mut config = source.config().await?.into_inner();
        config.insert("name".to_string(), name.to_string());
        self.insert(name, config).await
    }

    /// `DELETE /connectors/{name}`
    pub async fn remove(&self, name: &str) -> ConnectResult<()> {
        self.api
            .delete(&format!("/connectors/{}", segment(name)))
            .await?;
        info!("[KafkaConnect] Deleted connector {}", name);
        Ok(())
    }
}
