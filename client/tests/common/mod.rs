//! Mock Kafka Connect worker shared by the integration tests.

#![allow(dead_code)]

use kafka_connect::{ClientConfig, KafkaConnect};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FILE_SINK_CLASS: &str = "org.apache.kafka.connect.file.FileStreamSinkConnector";

pub fn server_info() -> Value {
    json!({
        "version": "3.6.0",
        "commit": "60e845626d8a465a",
        "kafka_cluster_id": "I4ZmrWqfT2e-upky_4fdPA"
    })
}

/// Start a mock worker that answers `GET /`
pub async fn start_worker() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_info()))
        .mount(&server)
        .await;
    server
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    let addr = server.address();
    ClientConfig::new(addr.ip().to_string(), addr.port())
}

pub async fn connect(server: &MockServer) -> KafkaConnect {
    KafkaConnect::connect(&config_for(server))
        .await
        .expect("mock worker should accept the ping")
}

pub async fn connect_manual_commit(server: &MockServer) -> KafkaConnect {
    KafkaConnect::connect(&config_for(server).with_autocommit(false))
        .await
        .expect("mock worker should accept the ping")
}

/// Mount `GET /connectors` returning `names`
pub async fn mount_connector_names(server: &MockServer, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/connectors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(names)))
        .mount(server)
        .await;
}

pub fn error_body(code: u16, message: &str) -> Value {
    json!({ "error_code": code, "message": message })
}
