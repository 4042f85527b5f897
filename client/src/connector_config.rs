use tracing::debug;

use crate::api::{segment, Api};
use crate::error::ConnectResult;
use crate::models::ConfigMap;

/// Map-like view of `/connectors/{name}/config`.
///
/// Edits are pushed back to the worker as one `PUT` of the whole map. With
/// autocommit on (the default) that happens on every `set`/`remove`;
/// otherwise the caller decides when to [`commit`](Self::commit).
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    api: Api,
    connector: String,
    config: ConfigMap,
    dirty: bool,
}

impl ConnectorConfig {
    /// Fetch the current configuration of `connector`
    pub async fn load(api: Api, connector: &str) -> ConnectResult<Self> {
        let config: ConfigMap = api.get_as(&config_endpoint(connector)).await?;
        Ok(Self {
            api,
            connector: connector.to_string(),
            config,
            dirty: false,
        })
    }

    pub fn connector(&self) -> &str {
        &self.connector
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.config.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.config.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.config.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys in the local copy
    pub fn len(&self) -> usize {
        self.config.len()
    }

    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    pub fn as_map(&self) -> &ConfigMap {
        &self.config
    }

    pub fn into_inner(self) -> ConfigMap {
        self.config
    }

    /// Local edits not yet pushed to the worker
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set one key, returning its previous value
    pub async fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ConnectResult<Option<String>> {
        let previous = self.config.insert(key.into(), value.into());
        self.dirty = true;
        self.autocommit().await?;
        Ok(previous)
    }

    /// Remove one key, returning its previous value. Absent keys issue no request.
    pub async fn remove(&mut self, key: &str) -> ConnectResult<Option<String>> {
        let previous = self.config.remove(key);
        if previous.is_some() {
            self.dirty = true;
            self.autocommit().await?;
        }
        Ok(previous)
    }

    /// Push the whole map with `PUT /connectors/{name}/config`
    pub async fn commit(&mut self) -> ConnectResult<()> {
        debug!(connector = %self.connector, keys = self.config.len(), "Committing connector config");
        self.api
            .put(&config_endpoint(&self.connector), Some(serde_json::to_value(&self.config)?))
            .await?;
        self.dirty = false;
        Ok(())
    }

    async fn autocommit(&mut self) -> ConnectResult<()> {
        if self.api.autocommit() {
            self.commit().await?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ConnectorConfig {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.config.iter()
    }
}

pub(crate) fn config_endpoint(connector: &str) -> String {
    format!("/connectors/{}/config", segment(connector))
}
