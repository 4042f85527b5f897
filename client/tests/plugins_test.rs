mod common;

use common::*;
use kafka_connect::ConfigMap;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_plugins() {
    let server = start_worker().await;
    Mock::given(method("GET"))
        .and(path("/connector-plugins/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"class": FILE_SINK_CLASS, "type": "sink", "version": "3.6.0"},
            {"class": "org.apache.kafka.connect.file.FileStreamSourceConnector", "type": "source", "version": "3.6.0"},
            {"class": "io.example.LegacyConnector", "type": "source"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let kc = connect(&server).await;
    let plugins = kc.plugins().await.unwrap();

    assert_eq!(plugins.len(), 3);
    assert_eq!(plugins[0].class_name, FILE_SINK_CLASS);
    assert_eq!(plugins[0].type_name, "sink");
    assert_eq!(plugins[0].version.as_deref(), Some("3.6.0"));
    assert_eq!(plugins[1].short_name(), "FileStreamSourceConnector");
    assert_eq!(plugins[2].to_string(), "io.example.LegacyConnector");
    assert!(plugins[2].version.is_none());
}

#[tokio::test]
async fn test_validate_uses_short_class_name() {
    let server = start_worker().await;
    Mock::given(method("GET"))
        .and(path("/connector-plugins/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"class": FILE_SINK_CLASS, "type": "sink", "version": "3.6.0"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/connector-plugins/FileStreamSinkConnector/config/validate/"))
        .and(body_json(json!({
            "connector.class": FILE_SINK_CLASS,
            "name": "orders-sink"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": FILE_SINK_CLASS,
            "error_count": 1,
            "groups": ["Common", "Transforms"],
            "configs": [
                {
                    "definition": {
                        "name": "topics",
                        "type": "LIST",
                        "required": false,
                        "default_value": "",
                        "importance": "HIGH",
                        "documentation": "List of topics to consume",
                        "group": "Common",
                        "width": "LONG",
                        "display_name": "Topics",
                        "dependents": [],
                        "order": 4
                    },
                    "value": {
                        "name": "topics",
                        "value": "",
                        "recommended_values": [],
                        "errors": ["Must configure one of topics or topics.regex"],
                        "visible": true
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let kc = connect(&server).await;
    let plugins = kc.plugins().await.unwrap();

    let config: ConfigMap = [
        ("connector.class".to_string(), FILE_SINK_CLASS.to_string()),
        ("name".to_string(), "orders-sink".to_string()),
    ]
    .into_iter()
    .collect();

    let result = plugins[0].validate(&config).await.unwrap();
    assert!(!result.is_valid());
    assert_eq!(result.groups, vec!["Common", "Transforms"]);

    let errors: Vec<_> = result.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "topics");
    assert_eq!(result.configs[0].definition.display_name.as_deref(), Some("Topics"));
}

#[tokio::test]
async fn test_validate_unknown_plugin() {
    let server = start_worker().await;
    Mock::given(method("GET"))
        .and(path("/connector-plugins/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"class": "io.example.GoneConnector", "type": "sink", "version": "1.0"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/connector-plugins/GoneConnector/config/validate/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
            400,
            "Failed to find any class that implements Connector and which name matches GoneConnector",
        )))
        .mount(&server)
        .await;

    let kc = connect(&server).await;
    let plugins = kc.plugins().await.unwrap();
    let err = plugins[0].validate(&ConfigMap::new()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert!(err.to_string().starts_with("HttpError(400): Failed to find"));
}
