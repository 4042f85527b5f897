//! Client for the Kafka Connect REST management API.
//!
//! Connectors, their configuration and tasks, and installed plugins are exposed
//! as plain Rust values. Each method performs exactly one HTTP call against the
//! worker; nothing is cached.
//!
//! ```ignore
//! use kafka_connect::KafkaConnect;
//!
//! let kc = KafkaConnect::new("localhost", 8083, "http").await?;
//! for connector in kc.connectors().list().await? {
//!     let status = connector.status().await?;
//!     println!("{} {}", connector.name(), status.connector.state);
//! }
//! ```

pub mod api;
pub mod client;
pub mod connector;
pub mod connector_config;
pub mod connectors;
pub mod error;
pub mod models;
pub mod plugin;
pub mod task;

pub use api::Api;
pub use client::KafkaConnect;
pub use connector::Connector;
pub use connector_config::ConnectorConfig;
pub use connectors::Connectors;
pub use error::{ConnectError, ConnectResult};
pub use kafka_connect_config::{ClientConfig, ConfigError};
pub use models::*;
pub use plugin::Plugin;
pub use task::Task;
