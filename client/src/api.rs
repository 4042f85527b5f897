//! HTTP transport for the Kafka Connect REST API.
//!
//! Every façade call funnels through [`Api::request`], which sends one JSON
//! request and either decodes the JSON response or maps the status to a
//! [`ConnectError`].

use kafka_connect_config::ClientConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::{debug, error, info, warn};

use crate::error::{ConnectError, ConnectResult};
use crate::models::ServerInfo;

const JSON: &str = "application/json";

/// Percent-encode one user-supplied path segment (connector name, plugin class)
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Connection to a single Kafka Connect worker
#[derive(Clone)]
pub struct Api {
    base_url: String,
    client: Client,
    autocommit: bool,
    info: ServerInfo,
}

impl Api {
    /// Build the transport without contacting the worker
    pub fn new(config: &ClientConfig) -> ConnectResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ConnectError::from_transport)?;

        Ok(Self {
            base_url: config.base_url(),
            client,
            autocommit: config.autocommit,
            info: ServerInfo::default(),
        })
    }

    /// Build the transport and ping the worker
    pub async fn connect(config: &ClientConfig) -> ConnectResult<Self> {
        let mut api = Self::new(config)?;
        api.ping().await?;

        info!(
            "[KafkaConnect] Connected to {} (version={:?}, kafka_cluster_id={:?})",
            api.base_url, api.info.version, api.info.kafka_cluster_id
        );

        Ok(api)
    }

    /// Fetch worker version info from `GET /` and keep it as [`info`](Self::info)
    pub async fn ping(&mut self) -> ConnectResult<&ServerInfo> {
        self.info = self.get_as("/").await?;
        Ok(&self.info)
    }

    /// Worker base URL, `{scheme}://{host}:{port}`
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Whether connector config edits are pushed as soon as they are made
    pub fn autocommit(&self) -> bool {
        self.autocommit
    }

    /// Worker info from the last ping
    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Perform one round trip.
    ///
    /// An empty 2xx body decodes as `{}`.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ConnectResult<Value> {
        let url = self.url_for(endpoint);
        debug!(method = %method, url = %url, has_body = body.is_some(), "Kafka Connect request");

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON);

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(&body)?);
        }

        let response = builder.send().await.map_err(|e| {
            error!("[KafkaConnect] {} {} failed: {}", method, url, e);
            ConnectError::from_transport(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ConnectError::from_transport)?;

        debug!(method = %method, url = %url, status = status.as_u16(), "Kafka Connect response");

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            let err = ConnectError::from_status(status.as_u16(), &text);
            if err.is_retriable() {
                warn!("[KafkaConnect] {} {} rejected during rebalance: {}", method, url, err);
            } else {
                debug!("[KafkaConnect] {} {} returned {}: {}", method, url, status, err);
            }
            return Err(err);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `GET` without a body
    pub async fn get(&self, endpoint: &str) -> ConnectResult<Value> {
        self.request(Method::GET, endpoint, None).await
    }

    /// `POST` with an optional JSON body
    pub async fn post(&self, endpoint: &str, body: Option<Value>) -> ConnectResult<Value> {
        self.request(Method::POST, endpoint, body).await
    }

    /// `PUT` with an optional JSON body
    pub async fn put(&self, endpoint: &str, body: Option<Value>) -> ConnectResult<Value> {
        self.request(Method::PUT, endpoint, body).await
    }

    /// `DELETE` without a body
    pub async fn delete(&self, endpoint: &str) -> ConnectResult<Value> {
        self.request(Method::DELETE, endpoint, None).await
    }

    /// `GET` and decode the response into `T`
    pub async fn get_as<T: DeserializeOwned>(&self, endpoint: &str) -> ConnectResult<T> {
        let value = self.get(endpoint).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `PUT` a serialized `body` and decode the response into `T`
    pub async fn put_as<B, T>(&self, endpoint: &str, body: &B) -> ConnectResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.put(endpoint, Some(serde_json::to_value(body)?)).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url)
            .field("autocommit", &self.autocommit)
            .field("info", &self.info)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_adds_leading_slash() {
        let api = Api::new(&ClientConfig::new("worker", 8083)).unwrap();
        assert_eq!(api.url_for("connectors"), "http://worker:8083/connectors");
        assert_eq!(api.url_for("/connectors"), "http://worker:8083/connectors");
        assert_eq!(api.url_for("/"), "http://worker:8083/");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("jdbc-sink_1.v2"), "jdbc-sink_1.v2");
        assert_eq!(segment("my connector/x"), "my%20connector%2Fx");
    }

    #[test]
    fn test_new_rejects_bad_scheme() {
        let config = ClientConfig::new("worker", 8083).with_scheme("gopher");
        assert!(matches!(Api::new(&config), Err(ConnectError::Config(_))));
    }

    #[test]
    fn test_new_keeps_autocommit() {
        let api = Api::new(&ClientConfig::default().with_autocommit(false)).unwrap();
        assert!(!api.autocommit());
        assert_eq!(api.url(), "http://localhost:8083");
        assert_eq!(api.info(), &ServerInfo::default());
    }
}
